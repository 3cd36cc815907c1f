use crate::math::Point2;
use crate::schema::VertexKey;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the topology store.
    pub struct VertexId;
}

/// Data associated with a topological vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The 2D position of the vertex.
    pub point: Point2,
    /// The vertex's id in the source schema.
    pub key: VertexKey,
}

impl VertexData {
    /// Creates a new vertex at the given point.
    #[must_use]
    pub fn new(point: Point2, key: VertexKey) -> Self {
        Self { point, key }
    }
}
