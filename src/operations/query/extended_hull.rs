use tracing::{debug, trace};

use crate::error::Result;
use crate::topology::{Cycle, EdgeCurve, TopologyStore};

use super::convex_hull::{ConvexHull, Hull};

/// Computes the convex hull of a cycle with its arcs pushed outward.
///
/// Every edge contributes the points of [`Curve::hull_points`]: a line its
/// endpoints, an arc the corners of its chord-aligned bounding box. The hull
/// of their union always contains the curved region and equals the plain
/// vertex hull for line-only cycles.
///
/// This is an approximation. An arc's box corners can stick out past the
/// arc, for instance when the arc's chord sits inside the hull and its bulge
/// crosses a hull edge at an angle. The hull is then larger than the curved
/// region's true hull and the rectangle fitted to it an upper bound on the
/// true minimum rectangle.
///
/// [`Curve::hull_points`]: crate::geometry::Curve::hull_points
pub struct ExtendedHull<'a> {
    cycle: &'a Cycle,
}

impl<'a> ExtendedHull<'a> {
    /// Creates a new `ExtendedHull` query.
    #[must_use]
    pub fn new(cycle: &'a Cycle) -> Self {
        Self { cycle }
    }

    /// Executes the query, returning the extended hull.
    ///
    /// # Errors
    ///
    /// Returns an error if a cycle edge or vertex is not in the store.
    pub fn execute(&self, store: &TopologyStore) -> Result<Hull> {
        let mut points = self.cycle.points(store)?;
        let mut arcs = 0usize;
        for oe in &self.cycle.edges {
            let edge = store.edge(oe.edge)?;
            if let EdgeCurve::Arc(arc) = &edge.curve {
                arcs += 1;
                trace!(
                    edge = %edge.key,
                    cx = arc.center().x,
                    cy = arc.center().y,
                    radius = arc.radius(),
                    sweep = arc.sweep(),
                    chord = arc.chord_length(),
                    sagitta = arc.sagitta(),
                    "extending hull around arc"
                );
            }
            points.extend(edge.curve.as_curve().hull_points());
        }

        let hull = ConvexHull::new(points).execute();
        debug!(
            edges = self.cycle.edges.len(),
            arcs,
            hull = hull.len(),
            "built extended hull"
        );
        Ok(hull)
    }
}
