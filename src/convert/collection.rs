//! List and map handlers.

use super::converter::{with_name, Converter};
use crate::config::MapNaming;
use crate::rule::{Rule, RuleMap};
use crate::token::{TokenMap, TokenValue};

impl Converter {
    /// Elements are converted unnamed, as sub-properties, in order.
    pub(super) fn convert_list(
        &self,
        name: &str,
        items: &[Rule],
        _is_sub_prop: bool,
    ) -> TokenValue {
        let values: Vec<TokenValue> =
            items.iter().map(|item| self.convert(item, "", true)).collect();
        with_name(name, values)
    }

    /// Children are converted unnamed, as sub-properties, in declaration order.
    ///
    /// With [`MapNaming::Flatten`] the map's own name is dropped whether or
    /// not one is given, so a named map yields its children directly.
    pub(super) fn convert_map(
        &self,
        name: &str,
        children: &RuleMap,
        _is_sub_prop: bool,
    ) -> TokenValue {
        let mut converted = TokenMap::with_capacity(children.len());
        for (key, child) in children.iter() {
            converted.insert(key, self.convert(child, "", true));
        }

        match self.config.map_naming {
            MapNaming::Flatten => TokenValue::Mapping(converted),
            MapNaming::Nest => with_name(name, converted),
        }
    }
}
