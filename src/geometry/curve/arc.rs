use crate::error::{GeometryError, Result};
use crate::math::arc_2d::{angle_of, arc_point_at, chord_frame_box, clockwise_sweep, sagitta};
use crate::math::{Point2, TOLERANCE};

use super::Curve;

/// A circular arc traversed clockwise from `start` to `end`.
///
/// The radius is taken from the start point; the sweep is the clockwise
/// angle from start to end in `(0, 2π]`, so the same endpoints and center
/// give the minor or the major arc depending on which endpoint comes first.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    center: Point2,
    radius: f64,
    start: Point2,
    end: Point2,
    start_angle: f64,
    sweep: f64,
}

impl Arc {
    /// Creates a clockwise arc around `center` from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if `start` coincides with `center`.
    pub fn new(center: Point2, start: Point2, end: Point2) -> Result<Self> {
        let radius = (start - center).norm();
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }
        Ok(Self {
            center,
            radius,
            start,
            end,
            start_angle: angle_of(&center, &start),
            sweep: clockwise_sweep(&center, &start, &end),
        })
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the clockwise sweep angle in radians.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// Returns the straight-line distance between the endpoints.
    #[must_use]
    pub fn chord_length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Returns the arc's height over its chord.
    #[must_use]
    pub fn sagitta(&self) -> f64 {
        sagitta(self.radius, self.sweep)
    }
}

impl Curve for Arc {
    fn evaluate(&self, t: f64) -> Point2 {
        arc_point_at(&self.center, self.radius, self.start_angle, self.sweep, t)
    }

    fn start_point(&self) -> Point2 {
        self.start
    }

    fn end_point(&self) -> Point2 {
        self.end
    }

    fn length(&self) -> f64 {
        self.radius * self.sweep
    }

    /// Corners of the chord-aligned box around the arc.
    ///
    /// The corners can lie outside the arc's own convex hull, which makes any
    /// hull built from them a conservative superset of the curved region.
    fn hull_points(&self) -> Vec<Point2> {
        chord_frame_box(&self.start, &self.end, &self.center, self.radius, self.sweep).to_vec()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn semicircle_length_is_pi_r() {
        let arc = Arc::new(
            Point2::new(0.0, 0.0),
            Point2::new(-3.0, 0.0),
            Point2::new(3.0, 0.0),
        )
        .unwrap();
        assert_relative_eq!(arc.length(), 3.0 * PI, epsilon = 1e-12);
        assert_relative_eq!(arc.sagitta(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(arc.chord_length(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn near_full_circle_approaches_two_pi_r() {
        let r = 2.0;
        let gap: f64 = 1e-4;
        let center = Point2::new(1.0, 1.0);
        let start = Point2::new(center.x + r * gap.cos(), center.y - r * gap.sin());
        let end = Point2::new(center.x + r, center.y);
        // Clockwise from just below the +x axis all the way round to it.
        let arc = Arc::new(center, start, end).unwrap();
        assert!(arc.length() < TAU * r);
        assert_relative_eq!(arc.length(), TAU * r, epsilon = 1e-3);
    }

    #[test]
    fn clockwise_from_picks_minor_or_major() {
        let c = Point2::new(0.0, 0.0);
        let a = Point2::new(0.0, 5.0);
        let b = Point2::new(5.0, 0.0);
        let minor = Arc::new(c, a, b).unwrap();
        let major = Arc::new(c, b, a).unwrap();
        assert_relative_eq!(minor.length(), 5.0 * PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(major.length(), 5.0 * 3.0 * PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn evaluate_hits_endpoints_and_peak() {
        let arc = Arc::new(
            Point2::new(0.0, 0.0),
            Point2::new(-1.0, 0.0),
            Point2::new(1.0, 0.0),
        )
        .unwrap();
        assert!((arc.evaluate(0.0) - Point2::new(-1.0, 0.0)).norm() < 1e-12);
        assert!((arc.evaluate(1.0) - Point2::new(1.0, 0.0)).norm() < 1e-12);
        assert!((arc.evaluate(0.5) - Point2::new(0.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn zero_radius_is_degenerate() {
        let p = Point2::new(1.0, 1.0);
        assert!(Arc::new(p, p, Point2::new(2.0, 1.0)).is_err());
    }

    #[test]
    fn hull_points_contain_sampled_arc() {
        let arc = Arc::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, -1.0),
        )
        .unwrap();
        let corners = arc.hull_points();
        for i in 0..=100 {
            let p = arc.evaluate(f64::from(i) / 100.0);
            assert!(crate::math::polygon_2d::convex_contains(&corners, &p, 1e-9));
        }
    }
}
