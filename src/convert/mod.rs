//! Sass rule → design token conversion.
//!
//! The converter walks a [`Rule`](crate::Rule) and builds a
//! [`TokenValue`](crate::TokenValue). Each rule kind has its own handler:
//!
//! | Kind          | Unnamed result        | Named result            |
//! |---------------|-----------------------|-------------------------|
//! | `SassString`  | the string            | `{ name: string }`      |
//! | `SassNumber`  | `"<number><unit>"`    | `{ name: "<n><unit>" }` |
//! | `SassBoolean` | the boolean           | `{ name: boolean }`     |
//! | `SassList`    | converted elements    | `{ name: [..] }`        |
//! | `SassMap`     | converted children    | converted children      |
//! | `SassColor`   | copy of channels      | `{ name: channels }`    |
//!
//! A named map is not wrapped in its name by default; its children are
//! returned as-is and merge into whatever contains them. See
//! [`MapNaming`](crate::MapNaming).
//!
//! # Modules
//!
//! - `converter` - [`Converter`] and dispatch
//! - `scalar` - String, number and boolean handlers
//! - `collection` - List and map handlers
//! - `color` - Color handler
//! - `error` - Error types

mod collection;
mod color;
mod converter;
mod error;
mod scalar;

#[cfg(test)]
mod cases;

pub use converter::{convert_json_variable, convert_sass_variable, Converter};
pub use error::ConvertError;
pub use scalar::render_number;
