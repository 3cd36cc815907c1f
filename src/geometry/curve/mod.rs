mod arc;
mod line;

pub use arc::Arc;
pub use line::Line;

use crate::math::Point2;

/// Trait for the bounded 2D curves an edge can carry.
///
/// Curves are parameterized over `t` in `[0, 1]` from start to end.
pub trait Curve {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> Point2;

    /// Returns the start point.
    fn start_point(&self) -> Point2 {
        self.evaluate(0.0)
    }

    /// Returns the end point.
    fn end_point(&self) -> Point2 {
        self.evaluate(1.0)
    }

    /// Returns the length of the curve.
    fn length(&self) -> f64;

    /// Returns points whose convex hull contains the whole curve.
    fn hull_points(&self) -> Vec<Point2>;
}
