use crate::error::TopologyError;
use crate::math::Point2;

use super::edge::EdgeId;
use super::vertex::VertexId;
use super::TopologyStore;

/// An edge with orientation information within a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientedEdge {
    /// The edge identifier.
    pub edge: EdgeId,
    /// If `true`, the edge is traversed in its natural direction (start → end).
    /// If `false`, the edge is traversed in reverse (end → start).
    pub forward: bool,
}

impl OrientedEdge {
    /// Creates a new oriented edge.
    #[must_use]
    pub fn new(edge: EdgeId, forward: bool) -> Self {
        Self { edge, forward }
    }
}

/// A closed walk through the topology.
///
/// Consecutive edges share a vertex, the last edge ends where the first
/// begins, and no edge appears twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    /// The ordered sequence of oriented edges.
    pub edges: Vec<OrientedEdge>,
}

impl Cycle {
    /// Returns the vertices visited by the cycle, one per edge, starting at
    /// the tail of the first edge.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge is not found in the store.
    pub fn vertices(&self, store: &TopologyStore) -> Result<Vec<VertexId>, TopologyError> {
        self.edges
            .iter()
            .map(|oe| {
                let edge = store.edge(oe.edge)?;
                Ok(if oe.forward { edge.start } else { edge.end })
            })
            .collect()
    }

    /// Returns the positions of the cycle's vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge or vertex is not found in the store.
    pub fn points(&self, store: &TopologyStore) -> Result<Vec<Point2>, TopologyError> {
        self.vertices(store)?
            .into_iter()
            .map(|v| store.vertex(v).map(|data| data.point))
            .collect()
    }
}
