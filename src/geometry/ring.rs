use geo::{Area, LineString, Polygon};
use std::collections::HashSet;

use crate::domain::{Point2D, Ring};
use crate::error::GeometryError;

/// A ring with its closing point removed, ready for walls and triangulation
#[derive(Debug, Clone, PartialEq)]
pub struct RingGeometry {
    points: Vec<Point2D>,
}

impl RingGeometry {
    /// Drop the stored closing point and check enough distinct points remain.
    ///
    /// An unclosed ring is taken as-is. Consecutive duplicates are kept; they
    /// only produce zero-area walls.
    pub fn from_ring(ring: &Ring) -> Result<Self, GeometryError> {
        let mut points = ring.points.clone();
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        let distinct = count_distinct(&points);
        if distinct < 3 {
            return Err(GeometryError::InvalidRing { distinct });
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs, ending with the wrap edge from last to first
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Alternating `x, y` coordinates in the layout the ear-clipper expects
    pub fn flat_coords(&self) -> Vec<f64> {
        let mut coords = Vec::with_capacity(self.points.len() * 2);
        for p in &self.points {
            coords.push(p.x);
            coords.push(p.y);
        }
        coords
    }

    /// Shoelace area, positive for counter-clockwise rings in a y-up frame
    pub fn signed_area(&self) -> f64 {
        let exterior: LineString<f64> = self
            .points
            .iter()
            .map(|p| geo::coord! { x: p.x, y: p.y })
            .collect();
        Polygon::new(exterior, vec![]).signed_area()
    }
}

fn count_distinct(points: &[Point2D]) -> usize {
    // `+ 0.0` folds -0.0 into 0.0 so both hash the same
    points
        .iter()
        .map(|p| ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits()))
        .collect::<HashSet<_>>()
        .len()
}
