use crate::graph::project_dag::ProjectDag;
use crate::graph::{GraphError, TaskGraph};
use petgraph::algo::toposort;
use tracing::debug;

/// Check structural well-formedness before any propagation runs.
///
/// A read-only pass: a topological-order attempt over the petgraph mirror
/// rejects cycles (self-loops included), then the graph must expose at least
/// one start task. Both propagators rely on this having succeeded and do not
/// re-derive acyclicity themselves.
pub fn validate_graph(graph: &TaskGraph) -> Result<(), GraphError> {
    let dag = ProjectDag::build(graph);
    toposort(&dag.graph, None).map_err(|cycle| {
        let ix = dag.graph[cycle.node_id()];
        GraphError::Cycle {
            task: graph.task(ix).id.clone(),
        }
    })?;

    if graph.start_tasks().is_empty() {
        return Err(GraphError::NoStartTask);
    }

    debug!(tasks = graph.len(), "project graph validated");
    Ok(())
}
