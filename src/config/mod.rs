use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// RGB colour with channels in [0, 1]
pub type Color = [f32; 3];

/// Reference values for Mapbox-style building tiles.
///
/// The landmark height is the placeholder the source data uses for towers of
/// unknown height. Dividing by `LANDMARK_HEIGHT + 1` keeps every ordinary
/// building strictly below 1.0 in normalized height.
pub mod defaults {
    use super::Color;

    pub const EXTENT: f64 = 4096.0;
    pub const LANDMARK_HEIGHT: f64 = 368.0;
    pub const HEIGHT_SCALE: f64 = LANDMARK_HEIGHT + 1.0;

    pub const WALL_COLOR: Color = [0.62, 0.62, 0.66];
    pub const ROOF_COLOR: Color = [0.86, 0.82, 0.74];
}

/// How the rings of a multi-ring footprint are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RingMode {
    /// Every ring gets its own roof and walls
    #[default]
    Independent,
    /// Rings wound against the outer ring are cut out of its roof
    Holes,
}

fn default_extent() -> f64 {
    defaults::EXTENT
}
fn default_height_scale() -> f64 {
    defaults::HEIGHT_SCALE
}
fn default_landmark_height() -> f64 {
    defaults::LANDMARK_HEIGHT
}
fn default_wall_color() -> Color {
    defaults::WALL_COLOR
}
fn default_roof_color() -> Color {
    defaults::ROOF_COLOR
}
fn default_require_extrude_flag() -> bool {
    true
}

/// Settings for one mesh-generation pass
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MeshConfig {
    /// Tile coordinate span in tile-local units
    #[serde(default = "default_extent")]
    pub extent: f64,
    /// Divisor mapping raw heights to normalized height
    #[serde(default = "default_height_scale")]
    pub height_scale: f64,
    /// Placeholder tower height, rendered but left out of `max_height`
    #[serde(default = "default_landmark_height")]
    pub landmark_height: f64,
    #[serde(default = "default_wall_color")]
    pub wall_color: Color,
    #[serde(default = "default_roof_color")]
    pub roof_color: Color,
    /// Only extrude buildings whose `extrude` attribute is set
    #[serde(default = "default_require_extrude_flag")]
    pub require_extrude_flag: bool,
    #[serde(default)]
    pub ring_mode: RingMode,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            extent: default_extent(),
            height_scale: default_height_scale(),
            landmark_height: default_landmark_height(),
            wall_color: default_wall_color(),
            roof_color: default_roof_color(),
            require_extrude_flag: default_require_extrude_flag(),
            ring_mode: RingMode::default(),
        }
    }
}

impl MeshConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: MeshConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn with_extent(mut self, extent: f64) -> Self {
        self.extent = extent;
        self
    }

    pub fn with_ring_mode(mut self, mode: RingMode) -> Self {
        self.ring_mode = mode;
        self
    }

    pub fn with_require_extrude_flag(mut self, required: bool) -> Self {
        self.require_extrude_flag = required;
        self
    }

    /// Reject values the normalizer cannot divide by or the renderer cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.extent.is_finite() && self.extent > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "extent must be a positive number, got {}",
                self.extent
            )));
        }
        if !(self.height_scale.is_finite() && self.height_scale > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "height_scale must be a positive number, got {}",
                self.height_scale
            )));
        }
        if !self.landmark_height.is_finite() {
            return Err(ConfigError::Invalid(
                "landmark_height must be finite".to_string(),
            ));
        }
        for (name, color) in [("wall_color", self.wall_color), ("roof_color", self.roof_color)] {
            if color.iter().any(|c| !c.is_finite()) {
                return Err(ConfigError::Invalid(format!(
                    "{} has a non-finite channel",
                    name
                )));
            }
        }
        Ok(())
    }
}
