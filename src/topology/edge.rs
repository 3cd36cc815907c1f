use crate::geometry::curve::{Arc, Curve, Line};

use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the topology store.
    pub struct EdgeId;
}

/// The geometric curve associated with an edge.
#[derive(Debug, Clone)]
pub enum EdgeCurve {
    /// A line segment.
    Line(Line),
    /// A circular arc, traversed clockwise from the edge's start vertex.
    Arc(Arc),
}

impl EdgeCurve {
    /// Returns the curve as a trait object.
    #[must_use]
    pub fn as_curve(&self) -> &dyn Curve {
        match self {
            Self::Line(line) => line,
            Self::Arc(arc) => arc,
        }
    }
}

/// Data associated with a topological edge.
///
/// An edge connects two vertices and carries the curve between them. For
/// arcs, `start` is the clockwise-from vertex.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Start vertex of the edge.
    pub start: VertexId,
    /// End vertex of the edge.
    pub end: VertexId,
    /// The geometric curve defining this edge's shape.
    pub curve: EdgeCurve,
    /// The edge's id in the source schema.
    pub key: String,
}

impl EdgeData {
    /// Returns the endpoint opposite `vertex`.
    ///
    /// For a self-loop both endpoints are the same vertex.
    #[must_use]
    pub fn opposite(&self, vertex: VertexId) -> VertexId {
        if vertex == self.start {
            self.end
        } else {
            self.start
        }
    }
}
