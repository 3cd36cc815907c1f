//! 2D circular arc math for clockwise-traversed arcs.
//!
//! Angles are measured counter-clockwise from the +x axis around the arc
//! center. A clockwise sweep is a positive angle in `(0, 2π]` by which the
//! traversal turns clockwise from its start angle.

use std::f64::consts::TAU;

use super::polygon_2d::left_normal;
use super::{Point2, Vector2, TOLERANCE};

/// Normalizes an angle to `[0, 2π)`.
#[must_use]
pub fn normalize_angle(a: f64) -> f64 {
    let r = a.rem_euclid(TAU);
    if r >= TAU {
        0.0
    } else {
        r
    }
}

/// Angle of `p` around `center`.
#[must_use]
pub fn angle_of(center: &Point2, p: &Point2) -> f64 {
    (p.y - center.y).atan2(p.x - center.x)
}

/// Clockwise sweep from `from` to `to` around `center`, in `(0, 2π]`.
///
/// Endpoints at the same angle describe a full turn.
#[must_use]
pub fn clockwise_sweep(center: &Point2, from: &Point2, to: &Point2) -> f64 {
    let sweep = normalize_angle(angle_of(center, from) - angle_of(center, to));
    if sweep < TOLERANCE || TAU - sweep < TOLERANCE {
        TAU
    } else {
        sweep
    }
}

/// Returns `true` if `angle` is passed while turning clockwise by `sweep`
/// from `start_angle` (endpoints included).
#[must_use]
pub fn angle_in_clockwise_sweep(angle: f64, start_angle: f64, sweep: f64) -> bool {
    let delta = normalize_angle(start_angle - angle);
    delta <= sweep + TOLERANCE || TAU - delta < TOLERANCE
}

/// Evaluates a point on a clockwise arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, start_angle: f64, sweep: f64, t: f64) -> Point2 {
    let angle = start_angle - sweep * t;
    Point2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Maximum distance from the chord to the arc on the bulge side.
///
/// Covers both minor (`sweep ≤ π`) and major arcs.
#[must_use]
pub fn sagitta(radius: f64, sweep: f64) -> f64 {
    radius * (1.0 - (sweep * 0.5).cos())
}

/// Corners of the smallest chord-aligned rectangle containing a clockwise arc.
///
/// The frame's `u` axis runs along the chord from `start` to `end`, `v` is its
/// left normal, which is the side a clockwise arc bulges toward. The
/// rectangle spans the arc endpoints plus every point `center ± r·u`,
/// `center ± r·v` inside the sweep. A zero-length chord falls back to the x
/// axis. Corners are returned counter-clockwise.
///
/// For arcs up to a half turn this is the chord pushed out by the sagitta;
/// larger arcs widen the rectangle past the chord ends.
#[must_use]
pub fn chord_frame_box(
    start: &Point2,
    end: &Point2,
    center: &Point2,
    radius: f64,
    sweep: f64,
) -> [Point2; 4] {
    let chord = end - start;
    let chord_len = chord.norm();
    let u = if chord_len < TOLERANCE {
        Vector2::new(1.0, 0.0)
    } else {
        chord / chord_len
    };
    let v = left_normal(u);

    let start_angle = angle_of(center, start);
    let mut extremes = vec![*start, *end];
    for dir in [u, -u, v, -v] {
        let candidate = center + dir * radius;
        if angle_in_clockwise_sweep(angle_of(center, &candidate), start_angle, sweep) {
            extremes.push(candidate);
        }
    }

    let (mut u_min, mut u_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut v_min, mut v_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in &extremes {
        let d = p - start;
        let pu = d.dot(&u);
        let pv = d.dot(&v);
        u_min = u_min.min(pu);
        u_max = u_max.max(pu);
        v_min = v_min.min(pv);
        v_max = v_max.max(pv);
    }

    let at = |pu: f64, pv: f64| start + u * pu + v * pv;
    [
        at(u_min, v_min),
        at(u_max, v_min),
        at(u_max, v_max),
        at(u_min, v_max),
    ]
}
