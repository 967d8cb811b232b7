use serde::Deserialize;

use crate::error::BuildingError;

/// A tile-local point in `[0, extent]` space
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// A closed boundary loop as stored in the tile: the last point repeats the first
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct Ring {
    pub points: Vec<Point2D>,
}

impl Ring {
    pub fn new(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    /// Build a ring from `(x, y)` pairs, closing point included
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self {
            points: coords.iter().copied().map(Point2D::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Outer ring plus any further rings of one building
pub type Footprint = Vec<Ring>;

/// A building footprint with its extrusion attributes, already normalized
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub footprint: Footprint,
    pub height: Option<f64>,
    pub min_height: f64,
    pub extrude: bool,
}

impl Building {
    pub fn new(footprint: Footprint, height: f64) -> Self {
        Self {
            footprint,
            height: Some(height),
            min_height: 0.0,
            extrude: true,
        }
    }

    pub fn with_min_height(mut self, min_height: f64) -> Self {
        self.min_height = min_height;
        self
    }

    pub fn with_extrude(mut self, extrude: bool) -> Self {
        self.extrude = extrude;
        self
    }

    /// Height to extrude to.
    ///
    /// Zero, negative and non-finite heights count as missing, the same as an
    /// absent attribute.
    pub fn usable_height(&self) -> Result<f64, BuildingError> {
        match self.height {
            Some(h) if h.is_finite() && h > 0.0 => Ok(h),
            _ => Err(BuildingError::MissingHeight),
        }
    }

    /// Every stored point of every ring, closing points included
    pub fn points(&self) -> impl Iterator<Item = &Point2D> {
        self.footprint.iter().flat_map(|ring| ring.points.iter())
    }
}
