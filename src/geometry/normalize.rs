use crate::config::MeshConfig;
use crate::domain::Point2D;

/// Maps tile-local coordinates and raw heights into rendering space
///
/// - x: `[0, extent]` -> `[-1, 1]`
/// - y: `[0, extent]` -> `[1, -1]` (flipped to match image orientation)
/// - height: `h / height_scale`, unclamped, so landmark towers may exceed 1.0
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    extent: f64,
    height_scale: f64,
}

impl Normalizer {
    pub fn new(extent: f64, height_scale: f64) -> Self {
        Self {
            extent,
            height_scale,
        }
    }

    pub fn from_config(config: &MeshConfig) -> Self {
        Self::new(config.extent, config.height_scale)
    }

    pub fn x(&self, v: f64) -> f64 {
        (v / self.extent - 0.5) * 2.0
    }

    pub fn y(&self, v: f64) -> f64 {
        (v / self.extent - 0.5) * -2.0
    }

    pub fn height(&self, v: f64) -> f64 {
        v / self.height_scale
    }

    /// Normalized vertex position for a footprint point lifted to `height`
    pub fn vertex(&self, p: Point2D, height: f64) -> [f32; 3] {
        [
            self.x(p.x) as f32,
            self.y(p.y) as f32,
            self.height(height) as f32,
        ]
    }
}
