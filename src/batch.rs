//! Whole-sheet conversion.
//!
//! A style sheet declares many variables. [`Batch`] converts each one with
//! its name and merges the fragments into a single token root, the object a
//! token file is written from.
//!
//! # Example
//!
//! ```
//! use sass_tokens::{Batch, Rule, Variable};
//!
//! let variables = [
//!     Variable::new("gap", Rule::number_with_unit(8.0, "px")),
//!     Variable::new("spacing", Rule::map([("small", Rule::string("4px"))])),
//! ];
//! let root = Batch::default().convert(&variables)?;
//!
//! // Maps flatten into the root by default.
//! assert_eq!(root.keys().collect::<Vec<_>>(), ["gap", "small"]);
//! # Ok::<(), sass_tokens::ConvertError>(())
//! ```
//!
//! With the `batch` feature, [`Batch::par_convert`] converts variables in
//! parallel with rayon. Fragments are still merged in declaration order, so
//! the result matches [`Batch::convert`].

use serde_json::Value as JsonValue;

use crate::config::Config;
use crate::convert::{ConvertError, Converter};
use crate::rule::Rule;
use crate::token::{TokenMap, TokenValue};

/// One variable declaration: `$name: rule;`.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Variable name without the leading `$`.
    pub name: String,
    /// The declared value.
    pub rule: Rule,
}

impl Variable {
    /// Create a variable. A leading `$` on `name` is stripped.
    pub fn new(name: impl Into<String>, rule: Rule) -> Self {
        let name = name.into();
        let name = name.strip_prefix('$').map(str::to_string).unwrap_or(name);
        Self { name, rule }
    }

    /// Read a variable from `{"name": "...", "value": <rule>}`.
    pub fn from_json(json: &JsonValue) -> Result<Self, ConvertError> {
        let name = json
            .get("name")
            .and_then(JsonValue::as_str)
            .ok_or_else(|| {
                ConvertError::invalid_variable(format!("missing a string 'name': {json}"))
            })?;
        let value = json
            .get("value")
            .ok_or_else(|| ConvertError::invalid_variable(format!("'{name}' has no 'value'")))?;
        let rule = Rule::from_json(value).map_err(|e| e.in_variable(name))?;
        Ok(Self::new(name, rule))
    }
}

/// Converts lists of variables into one token root.
#[derive(Debug, Clone, Copy, Default)]
pub struct Batch {
    converter: Converter,
}

impl Batch {
    /// Create a batch converter with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            converter: Converter::new(config),
        }
    }

    /// Convert every variable and merge the results in order.
    ///
    /// Later variables replace earlier entries with the same key.
    pub fn convert(&self, variables: &[Variable]) -> Result<TokenMap, ConvertError> {
        let fragments = variables
            .iter()
            .map(|variable| self.converter.convert(&variable.rule, &variable.name, false));
        merge_fragments(fragments, variables.len())
    }

    /// Convert every variable in parallel, then merge the results in order.
    #[cfg(feature = "batch")]
    pub fn par_convert(&self, variables: &[Variable]) -> Result<TokenMap, ConvertError> {
        use rayon::prelude::*;

        let fragments: Vec<TokenValue> = variables
            .par_iter()
            .map(|variable| self.converter.convert(&variable.rule, &variable.name, false))
            .collect();
        merge_fragments(fragments, variables.len())
    }

    /// Read and convert a sheet of variables from JSON.
    ///
    /// Accepts either an array of `{"name", "value"}` objects or an object
    /// mapping variable names to rules. Every rule is read before any is
    /// converted, so one bad rule fails the whole sheet.
    pub fn convert_json(&self, json: &JsonValue) -> Result<TokenMap, ConvertError> {
        let variables = parse_variables(json)?;
        self.convert(&variables)
    }
}

/// Read the variables of a JSON sheet, in document order.
pub fn parse_variables(json: &JsonValue) -> Result<Vec<Variable>, ConvertError> {
    match json {
        JsonValue::Array(items) => items.iter().map(Variable::from_json).collect(),
        JsonValue::Object(obj) => obj
            .iter()
            .map(|(name, value)| {
                let rule = Rule::from_json(value).map_err(|e| e.in_variable(name.as_str()))?;
                Ok::<_, ConvertError>(Variable::new(name.as_str(), rule))
            })
            .collect(),
        _ => Err(ConvertError::invalid_variable(
            "variables must be a JSON array or object",
        )),
    }
}

fn merge_fragments(
    fragments: impl IntoIterator<Item = TokenValue>,
    count: usize,
) -> Result<TokenMap, ConvertError> {
    let mut root = TokenMap::with_capacity(count);
    for (index, fragment) in fragments.into_iter().enumerate() {
        match fragment {
            TokenValue::Mapping(map) => root.merge(map),
            _ => return Err(ConvertError::UnnamedFragment { index }),
        }
    }
    log::debug!("merged {count} variables into {} tokens", root.len());
    Ok(root)
}
