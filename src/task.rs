use serde::{Deserialize, Serialize};

/// A single unit of project work on the abstract project clock.
///
/// `duration` is measured in whole clock units starting at 0. The four
/// schedule fields stay `None` until a propagation pass writes them, so a
/// read before propagation is visible instead of defaulting to a sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub duration: i64,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub early_start: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub early_finish: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub late_start: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub late_finish: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_float: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_critical: Option<bool>,
}

impl Task {
    pub fn new(id: impl Into<String>, duration: i64) -> Self {
        Self {
            id: id.into(),
            duration,
            dependencies: Vec::new(),
            early_start: None,
            early_finish: None,
            late_start: None,
            late_finish: None,
            total_float: None,
            is_critical: None,
        }
    }

    pub fn with_dependencies<I, S>(id: impl Into<String>, duration: i64, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut task = Self::new(id, duration);
        task.dependencies = dependencies.into_iter().map(Into::into).collect();
        task
    }

    /// Slack between the earliest and latest start, once both passes ran.
    pub fn slack(&self) -> Option<i64> {
        match (self.early_start, self.late_start) {
            (Some(es), Some(ls)) => Some(ls - es),
            _ => None,
        }
    }
}
