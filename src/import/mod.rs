use crate::graph::GraphError;
use crate::task::Task;
use crate::task_validation;
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ImportError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    Csv(csv::Error),
    Graph(GraphError),
    InvalidData(String),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Serialization(err) => write!(f, "serialization error: {err}"),
            ImportError::Io(err) => write!(f, "io error: {err}"),
            ImportError::Csv(err) => write!(f, "csv error: {err}"),
            ImportError::Graph(err) => write!(f, "invalid project: {err}"),
            ImportError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for ImportError {}

impl From<SerdeJsonError> for ImportError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for ImportError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for ImportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<GraphError> for ImportError {
    fn from(value: GraphError) -> Self {
        Self::Graph(value)
    }
}

pub type ImportResult<T> = Result<T, ImportError>;

pub fn validate_tasks(tasks: &[Task]) -> ImportResult<()> {
    task_validation::validate_task_collection(tasks)
        .map_err(|err| ImportError::InvalidData(err.to_string()))
}

pub mod file;

pub use file::{load_project, load_project_from_csv, load_project_from_json};
