use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{GeometryError, QuoteError, Result, SchemaError};
use crate::geometry::curve::{Arc, Line};
use crate::math::Point2;
use crate::schema::{EdgeSpec, Schema, VertexKey};
use crate::topology::{EdgeCurve, EdgeData, TopologyStore, VertexData, VertexId};

/// Builds the vertex/edge topology of a schema.
///
/// Every schema vertex becomes a topology vertex and every schema edge an
/// edge linked to both of its endpoints. Arcs are oriented so that the edge
/// starts at the clockwise-from vertex.
pub struct BuildTopology<'a> {
    schema: &'a Schema,
}

impl<'a> BuildTopology<'a> {
    /// Creates a new `BuildTopology` operation.
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Executes the operation, returning a populated topology store.
    ///
    /// A zero-radius arc collapses to a straight edge instead of failing.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::UnknownVertex` if an edge references a missing
    /// vertex, or `SchemaError::MalformedEdge` if an edge does not have two
    /// endpoints or an arc's clockwise-from vertex is not one of them.
    pub fn execute(&self) -> Result<TopologyStore> {
        let mut store = TopologyStore::new();
        let mut ids: HashMap<VertexKey, VertexId> = HashMap::with_capacity(self.schema.vertices.len());

        for (&key, spec) in &self.schema.vertices {
            let id = store.add_vertex(VertexData::new(spec.position.into(), key));
            ids.insert(key, id);
        }

        for (key, spec) in &self.schema.edges {
            let lookup = |vertex: VertexKey| -> Result<(VertexId, Point2)> {
                let id = *ids.get(&vertex).ok_or_else(|| SchemaError::UnknownVertex {
                    edge: key.clone(),
                    vertex,
                })?;
                Ok((id, store.vertex(id)?.point))
            };

            let data = match spec {
                EdgeSpec::LineSegment { vertices } => {
                    let (a, b) = endpoints(key, vertices)?;
                    let (start, p0) = lookup(a)?;
                    let (end, p1) = lookup(b)?;
                    EdgeData {
                        start,
                        end,
                        curve: EdgeCurve::Line(Line::new(p0, p1)),
                        key: key.clone(),
                    }
                }
                EdgeSpec::CircularArc {
                    vertices,
                    center,
                    clockwise_from,
                } => {
                    let (a, b) = endpoints(key, vertices)?;
                    let to = if *clockwise_from == a {
                        b
                    } else if *clockwise_from == b {
                        a
                    } else {
                        return Err(SchemaError::MalformedEdge {
                            edge: key.clone(),
                            reason: format!(
                                "clockwise-from vertex {clockwise_from} is not an endpoint"
                            ),
                        }
                        .into());
                    };
                    let (start, p0) = lookup(*clockwise_from)?;
                    let (end, p1) = lookup(to)?;
                    let curve = match Arc::new((*center).into(), p0, p1) {
                        Ok(arc) => EdgeCurve::Arc(arc),
                        Err(QuoteError::Geometry(GeometryError::Degenerate(reason))) => {
                            warn!(edge = %key, %reason, "degenerate arc treated as a straight edge");
                            EdgeCurve::Line(Line::new(p0, p1))
                        }
                        Err(e) => return Err(e),
                    };
                    EdgeData {
                        start,
                        end,
                        curve,
                        key: key.clone(),
                    }
                }
            };
            store.add_edge(data)?;
        }

        debug!(
            vertices = store.vertex_count(),
            edges = store.edge_count(),
            "built schema topology"
        );
        Ok(store)
    }
}

fn endpoints(edge: &str, vertices: &[VertexKey]) -> Result<(VertexKey, VertexKey)> {
    match vertices {
        [a, b] => Ok((*a, *b)),
        _ => Err(SchemaError::MalformedEdge {
            edge: edge.to_owned(),
            reason: format!("expected 2 vertices, found {}", vertices.len()),
        }
        .into()),
    }
}
