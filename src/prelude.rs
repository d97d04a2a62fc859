//! Prelude module for convenient imports.
//!
//! ```
//! use sass_tokens::prelude::*;
//! ```

// Conversion
pub use crate::convert::{convert_json_variable, convert_sass_variable, ConvertError, Converter};

// Data model
pub use crate::rule::{Rule, RuleKind, RuleMap};
pub use crate::token::{Scalar, TokenMap, TokenValue};

// Batch
pub use crate::batch::{Batch, Variable};

// Configuration
pub use crate::config::{Config, ConfigBuilder, MapNaming};
