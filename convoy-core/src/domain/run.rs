//! Run-status types
//!
//! A run status is one historical execution record appended by the
//! external reconciler when a Git event triggers a pipeline. Entries are
//! immutable snapshots; display code only reads and reorders them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One historical pipeline execution recorded on a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStatus {
    pub pipeline_run_name: String,
    #[serde(default)]
    pub condition_reason: Option<String>,
    #[serde(default)]
    pub condition_message: Option<String>,
    /// Absent when the run has not started.
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    /// Absent when the run has not finished.
    #[serde(default)]
    pub completion_time: Option<DateTime<Utc>>,
    #[serde(rename = "commitSHA", default)]
    pub commit_sha: Option<String>,
    #[serde(rename = "commitSHAURL", default)]
    pub commit_sha_url: Option<String>,
    #[serde(default)]
    pub commit_title: Option<String>,
    #[serde(default)]
    pub target_branch: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
}

impl RunStatus {
    /// Display state classified from the condition reason.
    pub fn state(&self) -> RunState {
        RunState::from_reason(self.condition_reason.as_deref())
    }
}

/// Display state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Succeeded,
    Failed,
    Running,
    Unknown,
}

impl RunState {
    /// Classify a condition reason token.
    ///
    /// Recognized terminal tokens map to `Succeeded` or `Failed`; an
    /// absent reason or an in-progress token maps to `Running`. Any other
    /// token is `Unknown` rather than being guessed at.
    pub fn from_reason(reason: Option<&str>) -> Self {
        match reason {
            None => RunState::Running,
            Some("Succeeded" | "Success" | "Completed") => RunState::Succeeded,
            Some("Failed" | "Failure" | "PipelineRunTimeout") => RunState::Failed,
            Some("Running" | "Started" | "Pending") => RunState::Running,
            Some(_) => RunState::Unknown,
        }
    }

    /// One-glyph icon used as a line prefix in reports.
    pub fn icon(&self) -> &'static str {
        match self {
            RunState::Succeeded => "✓",
            RunState::Failed => "✗",
            RunState::Running => "▸",
            RunState::Unknown => "?",
        }
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self {
            RunState::Succeeded => "Succeeded",
            RunState::Failed => "Failed",
            RunState::Running => "Running",
            RunState::Unknown => "Unknown",
        };
        write!(f, "{}", state)
    }
}
