use crate::error::Result;
use crate::topology::{Cycle, EdgeId, TopologyStore};

/// Computes the length of an edge.
pub struct Length {
    edge: EdgeId,
}

impl Length {
    /// Creates a new `Length` query.
    #[must_use]
    pub fn new(edge: EdgeId) -> Self {
        Self { edge }
    }

    /// Executes the query, returning the edge length.
    ///
    /// For a `Line`, this is the distance between its endpoints.
    /// For an `Arc`, this is `radius * sweep`.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not found.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        Ok(store.edge(self.edge)?.curve.as_curve().length())
    }
}

/// Computes the total length of the edges of a cycle.
pub struct Perimeter<'a> {
    cycle: &'a Cycle,
}

impl<'a> Perimeter<'a> {
    /// Creates a new `Perimeter` query.
    #[must_use]
    pub fn new(cycle: &'a Cycle) -> Self {
        Self { cycle }
    }

    /// Executes the query, returning the sum of the cycle's edge lengths.
    ///
    /// # Errors
    ///
    /// Returns an error if a cycle edge is not found.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        self.cycle
            .edges
            .iter()
            .map(|oe| Length::new(oe.edge).execute(store))
            .sum()
    }
}
