use crate::graph::{GraphError, NodeId, TaskGraph};
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::debug;

/// Computes earliest start/finish times via a multi-source topological sweep.
///
/// Tasks become eligible exactly when their last dependency is finalized, so
/// EST = max(EFT of dependencies) reads only finalized values. Everything
/// eligible at once forms a layer; layers run in parallel with one writer per
/// task and a merge barrier before the next layer is seeded. Any eligibility
/// order produces identical values since EST is a max-aggregate.
pub struct ForwardPass<'a> {
    graph: &'a TaskGraph,
}

impl<'a> ForwardPass<'a> {
    pub fn new(graph: &'a TaskGraph) -> Self {
        Self { graph }
    }

    /// Returns `(early_start, early_finish)` per node.
    ///
    /// Validation is a precondition; if it was skipped and the graph has a
    /// cycle the sweep drains early instead of looping, and reports the cycle.
    pub fn execute(&self) -> Result<HashMap<NodeId, (i64, i64)>, GraphError> {
        let graph = self.graph;
        let total = graph.len();
        let mut finishes: Vec<Option<i64>> = vec![None; total];
        let mut remaining: Vec<usize> = (0..total)
            .map(|ix| graph.dependencies_of(ix).len())
            .collect();
        let mut results: HashMap<NodeId, (i64, i64)> = HashMap::with_capacity(total);
        let mut layer = graph.start_tasks();
        let mut finalized = 0usize;

        while !layer.is_empty() {
            debug!(width = layer.len(), "forward pass layer");
            let computed: Vec<(NodeId, i64, i64)> = layer
                .par_iter()
                .map(|&ix| {
                    let early_start = graph
                        .dependencies_of(ix)
                        .iter()
                        .map(|&dep| {
                            finishes[dep].expect("dependency finalized before its dependent")
                        })
                        .max()
                        .unwrap_or(0);
                    let early_finish = early_start + graph.task(ix).duration;
                    (ix, early_start, early_finish)
                })
                .collect();

            // Merge barrier: every result of this layer is finalized before
            // any task of the next layer can read it.
            let mut next = Vec::new();
            for (ix, early_start, early_finish) in computed {
                finishes[ix] = Some(early_finish);
                results.insert(ix, (early_start, early_finish));
                finalized += 1;
                for &dependent in graph.dependents_of(ix) {
                    remaining[dependent] -= 1;
                    if remaining[dependent] == 0 {
                        next.push(dependent);
                    }
                }
            }
            layer = next;
        }

        if finalized < total {
            let stuck = (0..total)
                .find(|&ix| finishes[ix].is_none())
                .expect("an unfinalized task exists when the sweep drains early");
            return Err(GraphError::Cycle {
                task: graph.task(stuck).id.clone(),
            });
        }

        Ok(results)
    }
}

/// Project horizon: the maximum early finish across all tasks.
pub fn horizon(results: &HashMap<NodeId, (i64, i64)>) -> i64 {
    results
        .values()
        .map(|&(_, early_finish)| early_finish)
        .max()
        .unwrap_or(0)
}
