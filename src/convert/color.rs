//! Color handler.

use super::converter::{with_name, Converter};
use crate::token::{TokenMap, TokenValue};

impl Converter {
    /// The channel mapping is copied as-is; channels are never interpreted.
    pub(super) fn convert_color(
        &self,
        name: &str,
        channels: &TokenMap,
        _is_sub_prop: bool,
    ) -> TokenValue {
        with_name(name, channels.clone())
    }
}
