//! Web Mercator slippy-map tile addressing
//!
//! Locates the tile that contains a WGS84 coordinate at a given zoom:
//! - x = (lon + 180) / 360 * 2^zoom
//! - y = (1 - ln(tan(lat) + sec(lat)) / pi) / 2 * 2^zoom

use std::f64::consts::PI;
use std::fmt;

/// Fractional tile column for a longitude
pub fn lon_to_tile_x(lon: f64, zoom: u8) -> f64 {
    (lon + 180.0) / 360.0 * tiles_per_side(zoom)
}

/// Fractional tile row for a latitude (rows grow southwards)
pub fn lat_to_tile_y(lat: f64, zoom: u8) -> f64 {
    let lat_rad = lat.to_radians();
    (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * tiles_per_side(zoom)
}

fn tiles_per_side(zoom: u8) -> f64 {
    2f64.powi(zoom as i32)
}

/// Integer tile address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub zoom: u8,
    pub x: u32,
    pub y: u32,
}

impl TileCoord {
    pub fn new(zoom: u8, x: u32, y: u32) -> Self {
        Self { zoom, x, y }
    }

    /// The tile containing `(lat, lon)` at `zoom`, clamped to the valid tile range
    pub fn containing(lat: f64, lon: f64, zoom: u8) -> Self {
        let max = tiles_per_side(zoom) - 1.0;
        let x = lon_to_tile_x(lon, zoom).floor().clamp(0.0, max);
        let y = lat_to_tile_y(lat, zoom).floor().clamp(0.0, max);
        Self {
            zoom,
            x: x as u32,
            y: y as u32,
        }
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}
