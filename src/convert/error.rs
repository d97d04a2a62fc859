//! Error types for rule conversion.

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::rule::RuleKind;

/// Error raised while reading or converting Sass rules.
///
/// Conversion of a typed [`Rule`](crate::Rule) cannot fail. Every error
/// comes from the JSON input boundary, where the upstream parser's output is
/// turned into rules, or from merging a batch of variables.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The rule's type tag is missing or names none of the known Sass types.
    #[error("unexpected Sass type encountered: {dump}")]
    UnsupportedRuleKind {
        /// The type tag found on the node, if it had a string tag.
        kind: Option<String>,
        /// Compact JSON dump of the offending node.
        dump: String,
    },

    /// A known rule type carried a value of the wrong shape.
    #[error("malformed {kind} rule: {reason}")]
    MalformedRule {
        /// The rule's type.
        kind: RuleKind,
        /// What was wrong with the value.
        reason: String,
    },

    /// A variable converted with an empty name produced something other
    /// than a mapping, so it cannot be merged into the token root.
    #[error("variable #{index} has no name and did not produce a mapping")]
    UnnamedFragment {
        /// Position of the variable in its batch.
        index: usize,
    },

    /// A rule inside a named variable failed.
    #[error("in variable '{name}': {source}")]
    Variable {
        /// The variable's name.
        name: String,
        /// The underlying failure.
        #[source]
        source: Box<ConvertError>,
    },

    /// A variable entry of a JSON sheet, or the sheet itself, has the
    /// wrong structure.
    #[error("invalid variable: {reason}")]
    InvalidVariable {
        /// What was wrong with the entry.
        reason: String,
    },

    /// Input text was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    /// Build an [`UnsupportedRuleKind`](Self::UnsupportedRuleKind) error for a JSON node.
    pub fn unsupported(node: &JsonValue) -> Self {
        let kind = node
            .get("type")
            .and_then(JsonValue::as_str)
            .map(str::to_string);
        Self::UnsupportedRuleKind {
            kind,
            dump: node.to_string(),
        }
    }

    /// Build a [`MalformedRule`](Self::MalformedRule) error.
    pub fn malformed(kind: RuleKind, reason: impl Into<String>) -> Self {
        Self::MalformedRule {
            kind,
            reason: reason.into(),
        }
    }

    /// Build an [`InvalidVariable`](Self::InvalidVariable) error.
    pub fn invalid_variable(reason: impl Into<String>) -> Self {
        Self::InvalidVariable {
            reason: reason.into(),
        }
    }

    /// Attach the name of the variable being read.
    pub fn in_variable(self, name: impl Into<String>) -> Self {
        Self::Variable {
            name: name.into(),
            source: Box::new(self),
        }
    }

    /// Get the innermost error, unwrapping variable context.
    pub fn root_cause(&self) -> &ConvertError {
        match self {
            Self::Variable { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Whether the innermost error is an unsupported rule kind.
    pub fn is_unsupported_kind(&self) -> bool {
        matches!(self.root_cause(), Self::UnsupportedRuleKind { .. })
    }
}
