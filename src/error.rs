//! Error types for configuration loading and world construction.

use thiserror::Error;

/// Errors raised while loading, saving or validating a [`Config`](crate::Config)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML could not be parsed or emitted
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// A value is outside its allowed range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors raised while building a [`World`](crate::World)
#[derive(Debug, Error)]
pub enum WorldError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Terrain and food left no cell for the gazelle to stand on
    #[error("no free cell to place the gazelle on a {size}x{size} grid")]
    NoSpawnCell { size: usize },
}
