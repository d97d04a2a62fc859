//! Rule dispatch.

use serde_json::Value as JsonValue;

use super::ConvertError;
use crate::config::Config;
use crate::rule::Rule;
use crate::token::TokenValue;

/// Converts Sass rules into token trees.
///
/// A converter holds only its [`Config`]; it is `Copy` and can be shared
/// freely across threads. Every call builds a new tree.
///
/// # Example
///
/// ```
/// use sass_tokens::{Converter, Rule};
///
/// let converter = Converter::default();
/// let token = converter.convert(&Rule::number_with_unit(10.0, "px"), "gap", false);
/// assert_eq!(token.to_json_string(), r#"{"gap":"10px"}"#);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    pub(super) config: Config,
}

impl Converter {
    /// Create a converter with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert a rule into a token fragment.
    ///
    /// `name` is the token name; pass `""` for no name. `is_sub_prop` marks a
    /// rule nested inside a list or map. Handlers receive it but it does not
    /// change the shape of their output.
    pub fn convert(&self, rule: &Rule, name: &str, is_sub_prop: bool) -> TokenValue {
        log::trace!("converting {} (name: {name:?}, sub-prop: {is_sub_prop})", rule.kind());

        match rule {
            Rule::String(value) => self.convert_string(name, value, is_sub_prop),
            Rule::Number { value, unit } => {
                self.convert_number(name, *value, unit.as_deref(), is_sub_prop)
            }
            Rule::List(items) => self.convert_list(name, items, is_sub_prop),
            Rule::Map(children) => self.convert_map(name, children, is_sub_prop),
            Rule::Color(channels) => self.convert_color(name, channels, is_sub_prop),
            Rule::Boolean(value) => self.convert_bool(name, *value, is_sub_prop),
        }
    }

    /// Read a rule from the upstream parser's JSON and convert it.
    ///
    /// The whole node is read before anything is converted, so an unknown
    /// type tag anywhere in the tree aborts with
    /// [`ConvertError::UnsupportedRuleKind`] and no partial result.
    pub fn convert_json(
        &self,
        json: &JsonValue,
        name: &str,
        is_sub_prop: bool,
    ) -> Result<TokenValue, ConvertError> {
        let rule = Rule::from_json(json)?;
        Ok(self.convert(&rule, name, is_sub_prop))
    }
}

/// Convert a rule with the default configuration.
///
/// Shorthand for `Converter::default().convert(rule, name, is_sub_prop)`.
pub fn convert_sass_variable(rule: &Rule, name: &str, is_sub_prop: bool) -> TokenValue {
    Converter::default().convert(rule, name, is_sub_prop)
}

/// Read and convert an upstream JSON rule with the default configuration.
pub fn convert_json_variable(
    json: &JsonValue,
    name: &str,
    is_sub_prop: bool,
) -> Result<TokenValue, ConvertError> {
    Converter::default().convert_json(json, name, is_sub_prop)
}

/// Wrap `value` as `{ name: value }` unless `name` is empty.
pub(super) fn with_name(name: &str, value: impl Into<TokenValue>) -> TokenValue {
    if name.is_empty() {
        value.into()
    } else {
        TokenValue::named(name, value)
    }
}
