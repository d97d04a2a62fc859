//! # sass-tokens
//!
//! Converts parsed Sass variable declarations into design tokens: plain,
//! ordered trees of mappings, sequences and scalars ready to be written out
//! as JSON.
//!
//! The input is the typed value tree an upstream Sass parser produces for a
//! variable ([`Rule`]). The output is a [`TokenValue`]. Nothing here parses
//! Sass source or writes files; those are the caller's job.
//!
//! ## Quick Start
//!
//! ```
//! use sass_tokens::{convert_sass_variable, Rule};
//!
//! let rule = Rule::list([Rule::string("a"), Rule::string("b")]);
//! let token = convert_sass_variable(&rule, "colors", false);
//! assert_eq!(token.to_json_string(), r#"{"colors":["a","b"]}"#);
//! ```
//!
//! Reading the upstream parser's JSON:
//!
//! ```
//! use sass_tokens::convert_json_variable;
//! use serde_json::json;
//!
//! let json = json!({"type": "SassNumber", "value": 10, "unit": "px"});
//! let token = convert_json_variable(&json, "gap", false)?;
//! assert_eq!(token.to_json(), json!({"gap": "10px"}));
//! # Ok::<(), sass_tokens::ConvertError>(())
//! ```
//!
//! ## Modules
//!
//! - [`rule`]: Typed Sass input and JSON reading
//! - [`convert`]: The converter and its per-kind handlers
//! - [`token`]: Output tree and JSON output
//! - [`config`]: Conversion settings
//! - [`batch`]: Whole-sheet conversion, optionally parallel

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod batch;
pub mod config;
pub mod convert;
pub mod prelude;
pub mod rule;
pub mod token;

// =============================================================================
// Conversion
// =============================================================================

pub use convert::{
    convert_json_variable, convert_sass_variable, render_number, ConvertError, Converter,
};

// =============================================================================
// Data model
// =============================================================================

pub use rule::{Rule, RuleKind, RuleMap};
pub use token::{Scalar, TokenMap, TokenValue};

// =============================================================================
// Infrastructure
// =============================================================================

pub use batch::{parse_variables, Batch, Variable};
pub use config::{Config, ConfigBuilder, MapNaming};
