use crate::calculations::backward_pass::BackwardPass;
use crate::calculations::forward_pass::{self, ForwardPass};
use crate::graph::{GraphError, TaskGraph};
use crate::graph_validation::validate_graph;
use crate::metadata::ProjectMetadata;
use crate::task::Task;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshSummary {
    pub task_count: usize,
    pub critical_count: usize,
    pub critical_path: Vec<String>,
    pub earliest_completion: i64,
    pub latest_completion: i64,
}

impl RefreshSummary {
    pub fn to_cli_summary(&self) -> String {
        let mut parts = Vec::new();
        parts.push(format!("tasks={}", self.task_count));
        parts.push(format!("critical={}", self.critical_count));
        parts.push(format!("earliest={}", self.earliest_completion));
        parts.push(format!("latest={}", self.latest_completion));
        if !self.critical_path.is_empty() {
            parts.push(format!("crit_path={}", self.critical_path.join("->")));
        }
        parts.join(", ")
    }
}

/// Owns a validated-on-refresh task graph and derives project-level answers.
#[derive(Debug)]
pub struct Schedule {
    graph: TaskGraph,
    metadata: ProjectMetadata,
}

impl Schedule {
    pub(crate) fn from_parts(metadata: ProjectMetadata, graph: TaskGraph) -> Self {
        Self { graph, metadata }
    }

    pub fn new(graph: TaskGraph) -> Self {
        Self::from_parts(ProjectMetadata::default(), graph)
    }

    pub fn new_with_metadata(metadata: ProjectMetadata, graph: TaskGraph) -> Self {
        Self::from_parts(metadata, graph)
    }

    pub fn graph(&self) -> &TaskGraph {
        &self.graph
    }

    pub fn metadata(&self) -> &ProjectMetadata {
        &self.metadata
    }

    pub fn project_name(&self) -> &str {
        &self.metadata.project_name
    }

    pub fn project_description(&self) -> &str {
        &self.metadata.project_description
    }

    pub fn set_project_name(&mut self, name: impl Into<String>) {
        self.metadata.project_name = name.into();
    }

    pub fn set_project_description(&mut self, description: impl Into<String>) {
        self.metadata.project_description = description.into();
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.graph.tasks()
    }

    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.graph.find_task(id)
    }

    /// Validate the graph and run both propagation passes.
    ///
    /// The forward sweep fixes every EST/EFT, its maximum finish becomes the
    /// horizon seeding the backward sweep for LFT/LST, and total float plus
    /// the critical flag are filled from the two. Each time field is written
    /// exactly once per refresh; running refresh again on an unchanged graph
    /// reproduces identical values.
    pub fn refresh(&mut self) -> Result<RefreshSummary, GraphError> {
        validate_graph(&self.graph)?;

        let early = ForwardPass::new(&self.graph).execute()?;
        let horizon = forward_pass::horizon(&early);
        let late = BackwardPass::new(&self.graph).execute(horizon)?;
        debug!(horizon, "propagation passes complete");

        let task_count = self.graph.len();
        let mut critical_count = 0usize;
        let mut critical_path: Vec<(i64, String)> = Vec::new();
        let mut latest_completion = 0i64;

        for ix in 0..task_count {
            let (early_start, early_finish) = early[&ix];
            let (late_start, late_finish) = late[&ix];
            let total_float = late_start - early_start;

            if late_finish > latest_completion {
                latest_completion = late_finish;
            }
            if total_float == 0 {
                critical_count += 1;
                critical_path.push((early_start, self.graph.task(ix).id.clone()));
            }

            let task = self.graph.task_mut(ix);
            task.early_start = Some(early_start);
            task.early_finish = Some(early_finish);
            task.late_start = Some(late_start);
            task.late_finish = Some(late_finish);
            task.total_float = Some(total_float);
            task.is_critical = Some(total_float == 0);
        }

        // Every terminal LFT is seeded to the horizon, so the two must agree.
        debug_assert_eq!(latest_completion, horizon);

        critical_path.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        let critical_path = critical_path.into_iter().map(|(_, id)| id).collect();

        Ok(RefreshSummary {
            task_count,
            critical_count,
            critical_path,
            earliest_completion: horizon,
            latest_completion,
        })
    }

    /// Maximum early finish across all tasks; `None` before a refresh.
    pub fn earliest_completion(&self) -> Option<i64> {
        let mut latest: Option<i64> = None;
        for task in self.graph.tasks() {
            let finish = task.early_finish?;
            latest = Some(match latest {
                Some(current) if current >= finish => current,
                _ => finish,
            });
        }
        latest
    }

    /// Maximum late finish across all tasks; `None` before a refresh.
    pub fn latest_completion(&self) -> Option<i64> {
        let mut latest: Option<i64> = None;
        for task in self.graph.tasks() {
            let finish = task.late_finish?;
            latest = Some(match latest {
                Some(current) if current >= finish => current,
                _ => finish,
            });
        }
        latest
    }

    /// Zero-slack tasks, derived from the computed starts rather than the
    /// stored flag.
    pub fn critical_tasks(&self) -> Vec<&Task> {
        self.graph
            .tasks()
            .filter(|task| task.slack() == Some(0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_computes_canonical_times() {
        let graph = TaskGraph::build(
            vec![("T1", 5), ("T2", 3), ("T3", 2), ("T4", 4)],
            vec![
                ("T2", vec!["T1"]),
                ("T3", vec!["T1"]),
                ("T4", vec!["T2", "T3"]),
            ],
        )
        .unwrap();
        let mut schedule = Schedule::new(graph);
        let summary = schedule.refresh().unwrap();

        assert_eq!(summary.earliest_completion, 12);
        assert_eq!(summary.latest_completion, 12);
        assert_eq!(summary.critical_path, vec!["T1", "T2", "T4"]);

        let t3 = schedule.find_task("T3").unwrap();
        assert_eq!(t3.slack(), Some(1));
        assert_eq!(t3.is_critical, Some(false));
    }

    #[test]
    fn cli_summary_lists_counts_and_path() {
        let graph = TaskGraph::build(vec![("a", 10)], Vec::<(&str, Vec<&str>)>::new()).unwrap();
        let mut schedule = Schedule::new(graph);
        let summary = schedule.refresh().unwrap();
        assert_eq!(
            summary.to_cli_summary(),
            "tasks=1, critical=1, earliest=10, latest=10, crit_path=a"
        );
    }
}
