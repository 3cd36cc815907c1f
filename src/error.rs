use thiserror::Error;

/// Top-level error type for the quoting pipeline.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A failure tagged with the schema it came from, so batch output
    /// tells inputs apart.
    #[error("{name}: {source}")]
    Named {
        name: String,
        #[source]
        source: Box<QuoteError>,
    },
}

impl QuoteError {
    /// Wraps this error with the name of the schema being quoted.
    #[must_use]
    pub fn named(self, name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            source: Box::new(self),
        }
    }
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the vertex/edge topology.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("No closed cycle found")]
    NoClosedCycle,

    #[error("path did not close within {steps} steps")]
    UnclosedPathDuringTraversal { steps: usize },
}

/// Errors raised while loading or validating an input schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("edge {edge} references unknown vertex {vertex}")]
    UnknownVertex { edge: String, vertex: u64 },

    #[error("malformed edge {edge}: {reason}")]
    MalformedEdge { edge: String, reason: String },

    #[error("not a valid schema: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read schema: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by invalid pricing constants.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be {requirement}, got {value}")]
    OutOfRange {
        field: &'static str,
        requirement: &'static str,
        value: f64,
    },

    #[error("invalid pricing config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read pricing config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for results using [`QuoteError`].
pub type Result<T> = std::result::Result<T, QuoteError>;
