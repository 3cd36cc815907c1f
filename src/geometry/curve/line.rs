use crate::math::Point2;

use super::Curve;

/// A straight segment between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    start: Point2,
    end: Point2,
}

impl Line {
    /// Creates a new line segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }
}

impl Curve for Line {
    fn evaluate(&self, t: f64) -> Point2 {
        self.start + (self.end - self.start) * t
    }

    fn start_point(&self) -> Point2 {
        self.start
    }

    fn end_point(&self) -> Point2 {
        self.end
    }

    fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    fn hull_points(&self) -> Vec<Point2> {
        vec![self.start, self.end]
    }
}
