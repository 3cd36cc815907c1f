pub mod cycle;
pub mod edge;
pub mod vertex;

pub use cycle::{Cycle, OrientedEdge};
pub use edge::{EdgeCurve, EdgeData, EdgeId};
pub use vertex::{VertexData, VertexId};

use crate::error::TopologyError;
use slotmap::{SecondaryMap, SlotMap};

/// Central arena that owns all topological entities.
///
/// Entities reference each other via typed IDs (generational indices),
/// avoiding self-referential structures. The store doubles as an undirected
/// multigraph: every vertex keeps the list of edges incident to it.
#[derive(Debug, Default)]
pub struct TopologyStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    incident: SecondaryMap<VertexId, Vec<EdgeId>>,
}

impl TopologyStore {
    /// Creates a new, empty topology store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        let id = self.vertices.insert(data);
        self.incident.insert(id, Vec::new());
        id
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // --- Edge operations ---

    /// Inserts an edge, links it to both endpoints and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is not in the store.
    pub fn add_edge(&mut self, data: EdgeData) -> Result<EdgeId, TopologyError> {
        let (start, end) = (data.start, data.end);
        self.vertex(start)?;
        self.vertex(end)?;
        let id = self.edges.insert(data);
        if let Some(list) = self.incident.get_mut(start) {
            list.push(id);
        }
        if end != start {
            if let Some(list) = self.incident.get_mut(end) {
                list.push(id);
            }
        }
        Ok(id)
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    /// Iterates over all edges.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &EdgeData)> {
        self.edges.iter()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // --- Adjacency ---

    /// Returns the edges incident to `vertex`, in insertion order.
    ///
    /// A self-loop is listed once.
    #[must_use]
    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        self.incident.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}
