use crate::graph::{GraphError, NodeId, TaskGraph};
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::debug;

/// Computes latest start/finish times via a reverse sweep from the terminal
/// tasks, seeded by the project horizon.
///
/// Mirrors the forward pass over the `dependents` relation: a task becomes
/// eligible when all of its dependents are finalized, LFT = min(LST of
/// dependents) with the horizon as the default for terminal tasks, and
/// LST = LFT - duration. LFT is a min-aggregate, so eligibility order does
/// not affect the result.
pub struct BackwardPass<'a> {
    graph: &'a TaskGraph,
}

impl<'a> BackwardPass<'a> {
    pub fn new(graph: &'a TaskGraph) -> Self {
        Self { graph }
    }

    /// Returns `(late_start, late_finish)` per node.
    pub fn execute(&self, horizon: i64) -> Result<HashMap<NodeId, (i64, i64)>, GraphError> {
        let graph = self.graph;
        let total = graph.len();
        let mut starts: Vec<Option<i64>> = vec![None; total];
        let mut remaining: Vec<usize> = (0..total)
            .map(|ix| graph.dependents_of(ix).len())
            .collect();
        let mut results: HashMap<NodeId, (i64, i64)> = HashMap::with_capacity(total);
        let mut layer = graph.terminal_tasks();
        let mut finalized = 0usize;

        while !layer.is_empty() {
            debug!(width = layer.len(), "backward pass layer");
            let computed: Vec<(NodeId, i64, i64)> = layer
                .par_iter()
                .map(|&ix| {
                    let late_finish = graph
                        .dependents_of(ix)
                        .iter()
                        .map(|&dep| starts[dep].expect("dependent finalized before its dependency"))
                        .min()
                        .unwrap_or(horizon);
                    let late_start = late_finish - graph.task(ix).duration;
                    (ix, late_start, late_finish)
                })
                .collect();

            let mut next = Vec::new();
            for (ix, late_start, late_finish) in computed {
                starts[ix] = Some(late_start);
                results.insert(ix, (late_start, late_finish));
                finalized += 1;
                for &dependency in graph.dependencies_of(ix) {
                    remaining[dependency] -= 1;
                    if remaining[dependency] == 0 {
                        next.push(dependency);
                    }
                }
            }
            layer = next;
        }

        if finalized < total {
            let stuck = (0..total)
                .find(|&ix| starts[ix].is_none())
                .expect("an unfinalized task exists when the sweep drains early");
            return Err(GraphError::Cycle {
                task: graph.task(stuck).id.clone(),
            });
        }

        Ok(results)
    }
}
