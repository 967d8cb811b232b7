use crate::domain::Point2D;

/// Bounding box in raw tile coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Degenerate bounds around a single point
    pub fn at(p: Point2D) -> Self {
        Self {
            min_x: p.x,
            max_x: p.x,
            min_y: p.y,
            max_y: p.y,
        }
    }

    /// Create bounds from a set of points
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point2D>) -> Option<Self> {
        let mut points = points.into_iter();
        let mut bounds = Self::at(*points.next()?);
        for p in points {
            bounds.include(*p);
        }
        Some(bounds)
    }

    /// Grow the bounds to contain `p`
    pub fn include(&mut self, p: Point2D) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}
