//! Sass rule type tags.

use std::fmt;

/// The closed set of Sass value types the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// `SassString`
    String,
    /// `SassNumber`
    Number,
    /// `SassList`
    List,
    /// `SassMap`
    Map,
    /// `SassColor`
    Color,
    /// `SassBoolean`
    Boolean,
}

impl RuleKind {
    /// Every kind, in tag order.
    pub const ALL: [RuleKind; 6] = [
        Self::String,
        Self::Number,
        Self::List,
        Self::Map,
        Self::Color,
        Self::Boolean,
    ];

    /// The type tag the upstream parser writes for this kind.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::String => "SassString",
            Self::Number => "SassNumber",
            Self::List => "SassList",
            Self::Map => "SassMap",
            Self::Color => "SassColor",
            Self::Boolean => "SassBoolean",
        }
    }

    /// Look up a kind by its type tag. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
