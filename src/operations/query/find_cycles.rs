use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{Result, TopologyError};
use crate::topology::{Cycle, EdgeId, OrientedEdge, TopologyStore, VertexId};

/// Extracts the closed cycles of a topology.
///
/// Walks the graph edge by edge from every not-yet-visited edge. When the
/// walk reaches a vertex already on its current path, the edges since that
/// vertex form a cycle; when it gets stuck, the last edge is a dead end and is
/// dropped. Edges that end up in no cycle are left out of the result.
///
/// Each component's walk is bounded by `2 * edge_count + 2` steps unless a
/// step limit is set. A component that exceeds its bound is dropped with a
/// warning.
#[derive(Debug, Default)]
pub struct FindCycles {
    step_limit: Option<usize>,
}

impl FindCycles {
    /// Creates a new `FindCycles` query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of steps a single component's walk may take.
    #[must_use]
    pub fn with_step_limit(mut self, steps: usize) -> Self {
        self.step_limit = Some(steps);
        self
    }

    /// Executes the query, returning every recovered cycle.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::NoClosedCycle` if no edge lies on a closed
    /// cycle.
    pub fn execute(&self, store: &TopologyStore) -> Result<Vec<Cycle>> {
        let mut visited: HashSet<EdgeId> = HashSet::with_capacity(store.edge_count());
        let mut cycles = Vec::new();
        let seeds: Vec<EdgeId> = store.edges().map(|(id, _)| id).collect();
        let bound = self
            .step_limit
            .unwrap_or_else(|| 2 * store.edge_count() + 2);

        for seed in seeds {
            if visited.contains(&seed) {
                continue;
            }
            match walk_component(store, seed, bound, &mut visited, &mut cycles) {
                Ok(()) => {}
                Err(TopologyError::UnclosedPathDuringTraversal { steps }) => {
                    warn!(steps, "dropping component whose walk did not terminate");
                }
                Err(e) => return Err(e.into()),
            }
        }

        if cycles.is_empty() {
            return Err(TopologyError::NoClosedCycle.into());
        }

        let on_cycles: usize = cycles.iter().map(|c| c.edges.len()).sum();
        debug!(
            cycles = cycles.len(),
            dropped_edges = store.edge_count() - on_cycles,
            "extracted closed cycles"
        );
        Ok(cycles)
    }
}

/// Walks every edge reachable from `seed`, pushing closed cycles as they form.
fn walk_component(
    store: &TopologyStore,
    seed: EdgeId,
    bound: usize,
    visited: &mut HashSet<EdgeId>,
    cycles: &mut Vec<Cycle>,
) -> std::result::Result<(), TopologyError> {
    let seed_edge = store.edge(seed)?;
    visited.insert(seed);

    // `tails[i]` is the vertex `path[i]` leaves from.
    let mut tails: Vec<VertexId> = vec![seed_edge.start];
    let mut path: Vec<OrientedEdge> = vec![OrientedEdge::new(seed, true)];
    let mut open_end = seed_edge.end;

    for _ in 0..bound {
        if let Some(i) = tails.iter().position(|&v| v == open_end) {
            let edges = path.split_off(i);
            tails.truncate(i);
            cycles.push(Cycle { edges });
            continue;
        }

        let next = store
            .incident_edges(open_end)
            .iter()
            .copied()
            .find(|e| !visited.contains(e));

        if let Some(next) = next {
            visited.insert(next);
            let edge = store.edge(next)?;
            path.push(OrientedEdge::new(next, edge.start == open_end));
            tails.push(open_end);
            open_end = edge.opposite(open_end);
        } else if let (Some(_), Some(tail)) = (path.pop(), tails.pop()) {
            // Dead end: the edge stays visited and is never priced.
            open_end = tail;
        } else {
            return Ok(());
        }
    }

    Err(TopologyError::UnclosedPathDuringTraversal { steps: bound })
}
