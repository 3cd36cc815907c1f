use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Z component of the cross product `(b - a) × (c - a)`.
///
/// Positive when `a → b → c` turns left (counter-clockwise), negative when it
/// turns right, zero when the three points are collinear.
#[must_use]
pub fn turn(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the index of the bottommost point, breaking ties by smallest x.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn lowest_left(points: &[Point2]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, pt) in points.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(b) => {
                let b = &points[b];
                if pt.y < b.y - TOLERANCE || ((pt.y - b.y).abs() < TOLERANCE && pt.x < b.x) {
                    best = Some(i);
                }
            }
        }
    }
    best
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if the segment has zero length.
pub fn segment_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(d / len)
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Returns the `(min, max)` corners of the axis-aligned box around `points`.
#[must_use]
pub fn axis_aligned_bounds(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}

/// Returns `true` if `p` lies inside or on a counter-clockwise convex polygon.
///
/// `tol` is an absolute distance slack applied to every edge.
#[must_use]
pub fn convex_contains(polygon: &[Point2], p: &Point2, tol: f64) -> bool {
    match polygon.len() {
        0 => false,
        1 => (p - polygon[0]).norm() <= tol,
        2 => {
            let (a, b) = (&polygon[0], &polygon[1]);
            let ab = b - a;
            let len = ab.norm();
            if len < TOLERANCE {
                return (p - a).norm() <= tol;
            }
            let t = (p - a).dot(&ab) / len;
            turn(a, b, p).abs() / len <= tol && t >= -tol && t <= len + tol
        }
        n => (0..n).all(|i| {
            let a = &polygon[i];
            let b = &polygon[(i + 1) % n];
            let len = (b - a).norm();
            len < TOLERANCE || turn(a, b, p) / len >= -tol
        }),
    }
}
