//! Conversion tests.
//!
//! Tests verify that:
//! - Every kind produces the documented shape, named and unnamed
//! - Lists and maps keep their order through nested conversion
//! - Named maps flatten by default and nest when configured
//! - Upstream JSON with unknown kinds never yields a partial tree

pub(crate) mod common;

mod json;
mod list;
mod map;
mod nesting;
