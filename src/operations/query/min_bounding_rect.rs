use serde::Serialize;
use tracing::trace;

use crate::math::polygon_2d::{left_normal, segment_direction};
use crate::math::{Point2, Vector2};

use super::convex_hull::Hull;

/// A rectangle with one side parallel to a hull edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingRect {
    /// Extent along the aligned hull edge.
    pub width: f64,
    /// Extent perpendicular to the aligned hull edge.
    pub height: f64,
    /// Direction of the aligned edge, in radians from the +x axis.
    pub angle: f64,
    /// Corners in counter-clockwise order.
    pub corners: [Point2; 4],
}

impl BoundingRect {
    /// A zero-size rectangle at `p`.
    #[must_use]
    pub fn point(p: Point2) -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            angle: 0.0,
            corners: [p; 4],
        }
    }

    /// Returns `width * height`.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Finds the minimum-area rectangle around a convex hull by rotating calipers.
///
/// One side of the minimum rectangle of a convex polygon is flush with a
/// polygon edge, so trying every hull edge as the rectangle's orientation is
/// enough. Ties keep the first edge in hull order.
pub struct MinBoundingRect<'a> {
    hull: &'a Hull,
}

impl<'a> MinBoundingRect<'a> {
    /// Creates a new `MinBoundingRect` query.
    #[must_use]
    pub fn new(hull: &'a Hull) -> Self {
        Self { hull }
    }

    /// Executes the query, returning the minimum-area rectangle.
    ///
    /// An empty hull yields a zero rectangle at the origin, a single point a
    /// zero rectangle at that point and a segment a zero-height rectangle
    /// along it.
    #[must_use]
    pub fn execute(&self) -> BoundingRect {
        let points = self.hull.points();
        let Some(&first) = points.first() else {
            return BoundingRect::point(Point2::origin());
        };

        let n = points.len();
        let mut best: Option<BoundingRect> = None;
        for i in 0..n {
            let a = points[i];
            let Ok(dir) = segment_direction(&a, &points[(i + 1) % n]) else {
                continue;
            };
            let candidate = fit(points, a, dir);
            trace!(edge = i, area = candidate.area(), "caliper candidate");
            if best.map_or(true, |b| candidate.area() < b.area()) {
                best = Some(candidate);
            }
        }

        best.unwrap_or_else(|| BoundingRect::point(first))
    }
}

/// Bounds `points` in the frame of `dir` anchored at `origin`.
fn fit(points: &[Point2], origin: Point2, dir: Vector2) -> BoundingRect {
    let normal = left_normal(dir);
    let (mut u_min, mut u_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut v_min, mut v_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in points {
        let d = p - origin;
        let u = d.dot(&dir);
        let v = d.dot(&normal);
        u_min = u_min.min(u);
        u_max = u_max.max(u);
        v_min = v_min.min(v);
        v_max = v_max.max(v);
    }

    let at = |u: f64, v: f64| origin + dir * u + normal * v;
    BoundingRect {
        width: u_max - u_min,
        height: v_max - v_min,
        angle: dir.y.atan2(dir.x),
        corners: [
            at(u_min, v_min),
            at(u_max, v_min),
            at(u_max, v_max),
            at(u_min, v_max),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::{axis_aligned_bounds, convex_contains};
    use crate::operations::query::ConvexHull;
    use approx::assert_relative_eq;

    fn hull(coords: &[(f64, f64)]) -> Hull {
        ConvexHull::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()).execute()
    }

    #[test]
    fn axis_aligned_rectangle_is_exact() {
        let h = hull(&[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (0.0, 2.0)]);
        let rect = MinBoundingRect::new(&h).execute();
        assert_eq!(rect.area(), 8.0);
        assert_eq!(rect.width, 4.0);
        assert_eq!(rect.height, 2.0);
        assert_eq!(rect.angle, 0.0);
    }

    #[test]
    fn rotated_rectangle_is_recovered() {
        let (w, h) = (5.0, 3.0);
        let theta: f64 = 0.5;
        let (c, s) = (theta.cos(), theta.sin());
        let corner = |x: f64, y: f64| (x * c - y * s + 10.0, x * s + y * c - 7.0);
        let hh = hull(&[corner(0.0, 0.0), corner(w, 0.0), corner(w, h), corner(0.0, h)]);
        let rect = MinBoundingRect::new(&hh).execute();
        assert_relative_eq!(rect.area(), w * h, epsilon = 1e-9);
        let (lo, hi) = if rect.width < rect.height {
            (rect.width, rect.height)
        } else {
            (rect.height, rect.width)
        };
        assert_relative_eq!(lo, h, epsilon = 1e-9);
        assert_relative_eq!(hi, w, epsilon = 1e-9);
    }

    #[test]
    fn diamond_beats_axis_box() {
        // A square rotated 45°: the axis box is twice its area.
        let h = hull(&[(1.0, 0.0), (2.0, 1.0), (1.0, 2.0), (0.0, 1.0)]);
        let rect = MinBoundingRect::new(&h).execute();
        assert_relative_eq!(rect.area(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn corners_enclose_hull() {
        let h = hull(&[(0.0, 0.0), (3.0, 1.0), (4.0, 4.0), (1.0, 3.0), (-1.0, 2.0)]);
        let rect = MinBoundingRect::new(&h).execute();
        for p in h.points() {
            assert!(convex_contains(&rect.corners, p, 1e-9), "{p} outside rectangle");
        }
        assert_relative_eq!(
            (rect.corners[1] - rect.corners[0]).norm(),
            rect.width,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            (rect.corners[3] - rect.corners[0]).norm(),
            rect.height,
            epsilon = 1e-9
        );
    }

    #[test]
    fn bounded_by_polygon_and_axis_box() {
        let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
        let mut next = || {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
            #[allow(clippy::cast_precision_loss)]
            let v = (state >> 11) as f64 / (1u64 << 53) as f64;
            v * 8.0 - 4.0
        };
        for _ in 0..30 {
            let pts: Vec<(f64, f64)> = (0..12).map(|_| (next(), next())).collect();
            let h = hull(&pts);
            let rect = MinBoundingRect::new(&h).execute();
            let (min, max) = axis_aligned_bounds(h.points()).unwrap_or((Point2::origin(), Point2::origin()));
            let aabb = (max.x - min.x) * (max.y - min.y);
            assert!(rect.area() >= h.area() - 1e-9, "rectangle smaller than polygon");
            assert!(rect.area() <= aabb + 1e-9, "rectangle larger than axis box");
        }
    }

    #[test]
    fn degenerate_hulls() {
        let empty = MinBoundingRect::new(&Hull::default()).execute();
        assert_eq!(empty.area(), 0.0);

        let single = MinBoundingRect::new(&hull(&[(2.0, 3.0)])).execute();
        assert_eq!(single.area(), 0.0);
        assert_eq!(single.corners[0], Point2::new(2.0, 3.0));

        let segment = MinBoundingRect::new(&hull(&[(0.0, 0.0), (3.0, 4.0), (1.5, 2.0)])).execute();
        assert_relative_eq!(segment.width, 5.0, epsilon = 1e-12);
        assert!(segment.height.abs() < 1e-12);
        assert_relative_eq!(segment.angle, 4.0_f64.atan2(3.0), epsilon = 1e-12);
    }
}
