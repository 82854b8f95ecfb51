use super::{ImportError, ImportResult};
use crate::graph::TaskGraph;
use crate::metadata::ProjectMetadata;
use crate::schedule::Schedule;
use crate::task::Task;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

#[derive(Deserialize)]
struct ProjectSnapshot {
    #[serde(default)]
    metadata: Option<ProjectMetadata>,
    tasks: Vec<Task>,
}

impl ProjectSnapshot {
    fn into_schedule(self) -> ImportResult<Schedule> {
        super::validate_tasks(&self.tasks)?;
        let graph = TaskGraph::from_tasks(self.tasks)?;
        Ok(Schedule::new_with_metadata(
            self.metadata.unwrap_or_default(),
            graph,
        ))
    }
}

pub fn load_project_from_json<P: AsRef<Path>>(path: P) -> ImportResult<Schedule> {
    let file = File::open(path)?;
    let snapshot: ProjectSnapshot = serde_json::from_reader(file)?;
    snapshot.into_schedule()
}

#[derive(Deserialize)]
struct TaskCsvRecord {
    id: String,
    duration: i64,
    #[serde(default)]
    dependencies: String,
    #[serde(default)]
    metadata_json: String,
}

impl TaskCsvRecord {
    fn is_metadata_row(&self) -> bool {
        self.id == "__metadata__" || !self.metadata_json.trim().is_empty()
    }

    fn into_task(self) -> ImportResult<Task> {
        if self.is_metadata_row() {
            return Err(ImportError::InvalidData(
                "metadata row cannot be converted to task".into(),
            ));
        }
        let mut task = Task::new(self.id, self.duration);
        task.dependencies = split_ids(&self.dependencies);
        Ok(task)
    }
}

pub fn load_project_from_csv<P: AsRef<Path>>(path: P) -> ImportResult<Schedule> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut tasks = Vec::new();
    let mut metadata: Option<ProjectMetadata> = None;
    for record in reader.deserialize::<TaskCsvRecord>() {
        let record = record?;
        if record.is_metadata_row() {
            if metadata.is_some() {
                return Err(ImportError::InvalidData(
                    "CSV file contained multiple metadata rows".into(),
                ));
            }
            metadata = Some(serde_json::from_str(&record.metadata_json).map_err(|err| {
                ImportError::InvalidData(format!("invalid metadata json: {err}"))
            })?);
            continue;
        }
        tasks.push(record.into_task()?);
    }

    if tasks.is_empty() {
        return Err(ImportError::InvalidData(
            "CSV file contained no tasks".into(),
        ));
    }

    let snapshot = ProjectSnapshot { metadata, tasks };
    snapshot.into_schedule()
}

/// Load a project definition, picking the format from the file extension.
pub fn load_project<P: AsRef<Path>>(path: P) -> ImportResult<Schedule> {
    let path = path.as_ref();
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => load_project_from_json(path),
        Some("csv") => load_project_from_csv(path),
        other => Err(ImportError::InvalidData(format!(
            "unsupported project file extension '{}'",
            other.unwrap_or("")
        ))),
    }
}

fn split_ids(input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    input.split(',').map(|part| part.trim().to_string()).collect()
}
