use super::{NodeId, TaskGraph};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// petgraph mirror of a [`TaskGraph`], edges running dependency -> dependent.
pub struct ProjectDag {
    pub graph: DiGraph<NodeId, ()>,
    pub node_index: HashMap<NodeId, NodeIndex>,
}

impl ProjectDag {
    pub fn build(tasks: &TaskGraph) -> Self {
        let mut graph: DiGraph<NodeId, ()> = DiGraph::new();
        let mut node_index: HashMap<NodeId, NodeIndex> = HashMap::with_capacity(tasks.len());

        // Add nodes first
        for ix in 0..tasks.len() {
            let node = graph.add_node(ix);
            node_index.insert(ix, node);
        }

        // Add edges: dependency -> task
        for ix in 0..tasks.len() {
            for &dep_ix in tasks.dependencies_of(ix) {
                graph.add_edge(node_index[&dep_ix], node_index[&ix], ());
            }
        }

        Self { graph, node_index }
    }
}
