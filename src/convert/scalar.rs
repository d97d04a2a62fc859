//! String, number and boolean handlers.

use super::converter::{with_name, Converter};
use crate::token::TokenValue;

impl Converter {
    pub(super) fn convert_string(&self, name: &str, value: &str, _is_sub_prop: bool) -> TokenValue {
        with_name(name, value)
    }

    pub(super) fn convert_number(
        &self,
        name: &str,
        value: f64,
        unit: Option<&str>,
        _is_sub_prop: bool,
    ) -> TokenValue {
        let mut text = render_number(value);
        if let Some(unit) = unit {
            text.push_str(unit);
        }
        with_name(name, text)
    }

    pub(super) fn convert_bool(&self, name: &str, value: bool, _is_sub_prop: bool) -> TokenValue {
        with_name(name, value)
    }
}

/// Render a number the way the upstream tooling prints it.
///
/// Produces the shortest text that reads back as the same `f64`:
///
/// - integral values have no fraction: `10` → `"10"`
/// - negative zero prints as `"0"`
/// - magnitudes at or above `1e21`, or below `1e-6`, use an exponent with an
///   explicit sign: `"1e+21"`, `"1.5e-7"`
/// - `NaN`, `Infinity` and `-Infinity` are spelled out
///
/// ```
/// use sass_tokens::render_number;
///
/// assert_eq!(render_number(10.0), "10");
/// assert_eq!(render_number(0.5), "0.5");
/// assert_eq!(render_number(1e21), "1e+21");
/// ```
pub fn render_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }

    value.to_string()
}
