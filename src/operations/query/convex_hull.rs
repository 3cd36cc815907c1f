use crate::math::polygon_2d::{convex_contains, lowest_left, signed_area_2d, turn};
use crate::math::{Point2, TOLERANCE};

/// A convex polygon in counter-clockwise order.
///
/// Holds no duplicate points and no point in the middle of a straight run.
/// One point is a degenerate hull; two points are a segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hull {
    points: Vec<Point2>,
}

impl Hull {
    /// Returns the hull vertices, counter-clockwise from the lowest point.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the number of hull vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the hull has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Returns `true` if `p` is inside or on the hull, within `tol`.
    #[must_use]
    pub fn contains(&self, p: &Point2, tol: f64) -> bool {
        convex_contains(&self.points, p, tol)
    }
}

/// Computes the convex hull of a point set by Graham scan.
///
/// Points are sorted by polar angle around the lowest (then leftmost) point
/// and swept with a stack that only keeps strict left turns.
pub struct ConvexHull {
    points: Vec<Point2>,
}

impl ConvexHull {
    /// Creates a new `ConvexHull` query.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Executes the query, returning the hull.
    #[must_use]
    pub fn execute(&self) -> Hull {
        let mut points = dedup(&self.points);
        let Some(pivot_idx) = lowest_left(&points) else {
            return Hull::default();
        };
        points.swap(0, pivot_idx);
        let pivot = points[0];

        let mut rest: Vec<(f64, f64, Point2)> = points[1..]
            .iter()
            .map(|p| {
                let d = p - pivot;
                (d.y.atan2(d.x), d.norm_squared(), *p)
            })
            .collect();
        rest.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

        let mut stack: Vec<Point2> = Vec::with_capacity(points.len());
        stack.push(pivot);
        for (_, _, p) in rest {
            while let [.., a, b] = stack.as_slice() {
                if turn(a, b, &p) > TOLERANCE {
                    break;
                }
                stack.pop();
            }
            stack.push(p);
        }

        Hull { points: stack }
    }
}

/// Removes points that coincide within tolerance, keeping first occurrences.
fn dedup(points: &[Point2]) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        if !out.iter().any(|q| (p - q).norm() < TOLERANCE) {
            out.push(*p);
        }
    }
    out
}
