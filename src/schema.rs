//! Input schema model.
//!
//! A schema is the JSON document
//! `{"Edges": {id: edge}, "Vertices": {id: {"Position": {"X", "Y"}}}}`
//! where an edge is either
//! `{"Type": "LineSegment", "Vertices": [a, b]}` or
//! `{"Type": "CircularArc", "Vertices": [a, b], "Center": {"X", "Y"}, "ClockwiseFrom": a}`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};
use crate::math::Point2;

/// Identifier of a vertex within a schema.
pub type VertexKey = u64;

/// A 2D coordinate as written in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for Point2 {
    fn from(c: Coord) -> Self {
        Point2::new(c.x, c.y)
    }
}

/// A schema vertex.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VertexSpec {
    pub position: Coord,
}

/// A schema edge, tagged by its `Type` field.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "Type")]
pub enum EdgeSpec {
    LineSegment {
        #[serde(rename = "Vertices")]
        vertices: Vec<VertexKey>,
    },
    CircularArc {
        #[serde(rename = "Vertices")]
        vertices: Vec<VertexKey>,
        #[serde(rename = "Center")]
        center: Coord,
        #[serde(rename = "ClockwiseFrom")]
        clockwise_from: VertexKey,
    },
}

impl EdgeSpec {
    /// Returns the vertex ids this edge connects.
    #[must_use]
    pub fn vertex_ids(&self) -> &[VertexKey] {
        match self {
            Self::LineSegment { vertices } | Self::CircularArc { vertices, .. } => vertices,
        }
    }
}

/// A parsed edge/vertex schema.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Schema {
    pub edges: BTreeMap<String, EdgeSpec>,
    pub vertices: BTreeMap<VertexKey, VertexSpec>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex at `(x, y)`.
    #[must_use]
    pub fn with_vertex(mut self, id: VertexKey, x: f64, y: f64) -> Self {
        self.vertices.insert(
            id,
            VertexSpec {
                position: Coord::new(x, y),
            },
        );
        self
    }

    /// Adds a line segment between two vertices.
    #[must_use]
    pub fn with_line(mut self, id: impl Into<String>, a: VertexKey, b: VertexKey) -> Self {
        self.edges
            .insert(id.into(), EdgeSpec::LineSegment { vertices: vec![a, b] });
        self
    }

    /// Adds a circular arc traversed clockwise from `clockwise_from` to `to`.
    #[must_use]
    pub fn with_arc(
        mut self,
        id: impl Into<String>,
        clockwise_from: VertexKey,
        to: VertexKey,
        center: (f64, f64),
    ) -> Self {
        self.edges.insert(
            id.into(),
            EdgeSpec::CircularArc {
                vertices: vec![clockwise_from, to],
                center: Coord::new(center.0, center.1),
                clockwise_from,
            },
        );
        self
    }

    /// Parses a schema from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Json` if the text is not a schema document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text).map_err(SchemaError::from)?)
    }

    /// Reads and parses a schema file.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Io` if the file cannot be read, or
    /// `SchemaError::Json` if it does not hold a schema document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(SchemaError::from)?;
        Self::from_json_str(&text)
    }

    /// Checks that every edge references two known vertices and that each
    /// arc's clockwise-from vertex is one of its endpoints.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::MalformedEdge` or `SchemaError::UnknownVertex`
    /// for the first offending edge.
    pub fn validate(&self) -> Result<()> {
        for (id, edge) in &self.edges {
            let ids = edge.vertex_ids();
            if ids.len() != 2 {
                return Err(SchemaError::MalformedEdge {
                    edge: id.clone(),
                    reason: format!("expected 2 vertices, found {}", ids.len()),
                }
                .into());
            }
            if let Some(&missing) = ids.iter().find(|v| !self.vertices.contains_key(*v)) {
                return Err(SchemaError::UnknownVertex {
                    edge: id.clone(),
                    vertex: missing,
                }
                .into());
            }
            if let EdgeSpec::CircularArc { clockwise_from, .. } = edge {
                if !ids.contains(clockwise_from) {
                    return Err(SchemaError::MalformedEdge {
                        edge: id.clone(),
                        reason: format!("clockwise-from vertex {clockwise_from} is not an endpoint"),
                    }
                    .into());
                }
            }
        }
        Ok(())
    }
}
