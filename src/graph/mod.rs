use crate::task::Task;
use crate::task_validation;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

pub mod project_dag;

/// Stable arena index of a task inside a [`TaskGraph`].
pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    UnknownTask { task: String },
    Cycle { task: String },
    NoStartTask,
    InvalidTask { message: String },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::UnknownTask { task } => {
                write!(f, "dependency edge references undeclared task '{task}'")
            }
            GraphError::Cycle { task } => {
                write!(f, "dependency cycle detected through task '{task}'")
            }
            GraphError::NoStartTask => {
                write!(f, "no task has an empty dependency set, so no task can ever begin")
            }
            GraphError::InvalidTask { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Immutable dependency structure of a project.
///
/// Tasks live in an arena indexed by [`NodeId`]; the `dependencies` and
/// `dependents` relations are kept as index sets per node and are exact
/// inverses of each other. Only the computed time fields of each task are
/// written after construction, by the propagation passes.
#[derive(Debug)]
pub struct TaskGraph {
    nodes: Vec<Task>,
    index: HashMap<String, NodeId>,
    dependencies: Vec<BTreeSet<NodeId>>,
    dependents: Vec<BTreeSet<NodeId>>,
}

impl TaskGraph {
    /// Build a graph from declared tasks and a precedence relation.
    ///
    /// Each `(task, deps)` entry adds every member of `deps` to the task's
    /// dependency set and the task to each dependency's dependent set.
    /// Repeated edges collapse; the relations are sets.
    pub fn build<T, E, S>(tasks: T, edges: E) -> Result<Self, GraphError>
    where
        T: IntoIterator<Item = (S, i64)>,
        E: IntoIterator<Item = (S, Vec<S>)>,
        S: Into<String>,
    {
        let mut declared: Vec<Task> = tasks
            .into_iter()
            .map(|(id, duration)| Task::new(id, duration))
            .collect();

        let mut positions: HashMap<String, usize> = HashMap::with_capacity(declared.len());
        for (pos, task) in declared.iter().enumerate() {
            positions.insert(task.id.clone(), pos);
        }

        for (id, deps) in edges {
            let id = id.into();
            let pos = *positions
                .get(&id)
                .ok_or(GraphError::UnknownTask { task: id })?;
            declared[pos]
                .dependencies
                .extend(deps.into_iter().map(Into::into));
        }

        Self::from_tasks(declared)
    }

    /// Build a graph from task records carrying their own dependency lists.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self, GraphError> {
        task_validation::validate_task_collection(&tasks).map_err(|err| {
            GraphError::InvalidTask {
                message: err.to_string(),
            }
        })?;

        let mut index = HashMap::with_capacity(tasks.len());
        for (ix, task) in tasks.iter().enumerate() {
            index.insert(task.id.clone(), ix);
        }

        let mut graph = Self {
            dependencies: vec![BTreeSet::new(); tasks.len()],
            dependents: vec![BTreeSet::new(); tasks.len()],
            nodes: tasks,
            index,
        };

        for ix in 0..graph.nodes.len() {
            for dep in std::mem::take(&mut graph.nodes[ix].dependencies) {
                let dep_ix = *graph
                    .index
                    .get(&dep)
                    .ok_or(GraphError::UnknownTask { task: dep })?;
                graph.dependencies[ix].insert(dep_ix);
                graph.dependents[dep_ix].insert(ix);
            }
        }

        // Rewrite the declared lists from the resolved sets so every task
        // shows its dependencies deduplicated and in arena order.
        for ix in 0..graph.nodes.len() {
            let resolved: Vec<String> = graph.dependencies[ix]
                .iter()
                .map(|&dep_ix| graph.nodes[dep_ix].id.clone())
                .collect();
            graph.nodes[ix].dependencies = resolved;
        }

        Ok(graph)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_id(&self, id: &str) -> Option<NodeId> {
        self.index.get(id).copied()
    }

    pub fn task(&self, ix: NodeId) -> &Task {
        &self.nodes[ix]
    }

    pub(crate) fn task_mut(&mut self, ix: NodeId) -> &mut Task {
        &mut self.nodes[ix]
    }

    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.node_id(id).map(|ix| self.task(ix))
    }

    /// Tasks in declaration order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.nodes.iter()
    }

    pub fn dependencies_of(&self, ix: NodeId) -> &BTreeSet<NodeId> {
        &self.dependencies[ix]
    }

    pub fn dependents_of(&self, ix: NodeId) -> &BTreeSet<NodeId> {
        &self.dependents[ix]
    }

    /// Tasks with no dependencies; the forward pass starts here.
    pub fn start_tasks(&self) -> Vec<NodeId> {
        (0..self.nodes.len())
            .filter(|&ix| self.dependencies[ix].is_empty())
            .collect()
    }

    /// Tasks with no dependents; the backward pass starts here.
    pub fn terminal_tasks(&self) -> Vec<NodeId> {
        (0..self.nodes.len())
            .filter(|&ix| self.dependents[ix].is_empty())
            .collect()
    }
}
