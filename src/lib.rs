pub mod calculations;
pub mod graph;
pub mod graph_validation;
pub mod import;
pub mod logging;
pub mod metadata;
pub mod schedule;
pub mod social;
pub mod task;
pub(crate) mod task_validation;

pub use graph::{GraphError, NodeId, TaskGraph};
pub use graph_validation::validate_graph;
pub use import::{
    ImportError, load_project, load_project_from_csv, load_project_from_json, validate_tasks,
};
pub use metadata::ProjectMetadata;
pub use schedule::{RefreshSummary, Schedule};
pub use social::FriendNetwork;
pub use task::Task;
