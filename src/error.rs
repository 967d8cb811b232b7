//! Error types shared across the crate

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while preparing ring geometry for extrusion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A ring has fewer than 3 distinct points once its closing point is dropped
    #[error("invalid ring: {distinct} distinct points, need at least 3")]
    InvalidRing { distinct: usize },
}

/// Soft errors for building records that cannot be extruded
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingError {
    /// No height attribute, or one that is not a positive finite number
    #[error("building has no usable height")]
    MissingHeight,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("failed to parse building records: {0}")]
    Json(#[from] serde_json::Error),
}
