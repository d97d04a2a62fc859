//! Configuration for conversion.
//!
//! The defaults reproduce the upstream tokens plugin exactly. Use
//! [`ConfigBuilder`] to opt into the alternative map naming.

/// How a named `SassMap` appears in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MapNaming {
    /// Drop the map's name and return its children directly:
    /// `$point: (x: 1, y: 2)` becomes `{ "x": "1", "y": "2" }`.
    ///
    /// This is what existing token files were generated with.
    #[default]
    Flatten,
    /// Wrap the children in the map's name like every other kind:
    /// `$point: (x: 1, y: 2)` becomes `{ "point": { "x": "1", "y": "2" } }`.
    ///
    /// Maps nested inside lists and maps are unnamed, so only the outermost
    /// map of a variable is affected.
    Nest,
}

/// Conversion settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Treatment of named maps.
    pub map_naming: MapNaming,
}

impl Config {
    /// Start building a configuration.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Configuration builder for fluent API.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    map_naming: Option<MapNaming>,
}

impl ConfigBuilder {
    /// Create a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how named maps are emitted.
    ///
    /// Default: [`MapNaming::Flatten`]
    pub fn map_naming(mut self, naming: MapNaming) -> Self {
        self.map_naming = Some(naming);
        self
    }

    /// Shorthand for `map_naming(MapNaming::Nest)` when `nest` is true,
    /// `map_naming(MapNaming::Flatten)` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use sass_tokens::{ConfigBuilder, MapNaming};
    ///
    /// let config = ConfigBuilder::new().nest_named_maps(true).build();
    /// assert_eq!(config.map_naming, MapNaming::Nest);
    /// ```
    pub fn nest_named_maps(self, nest: bool) -> Self {
        self.map_naming(if nest { MapNaming::Nest } else { MapNaming::Flatten })
    }

    /// Build the configuration.
    pub fn build(self) -> Config {
        Config {
            map_naming: self.map_naming.unwrap_or_default(),
        }
    }
}
