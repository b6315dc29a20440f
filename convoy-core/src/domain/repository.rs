//! Repository resource
//!
//! The addressable record describing a repository's pipeline history.
//! The external reconciler owns and mutates it; this crate only models
//! the fetched snapshot, which display code treats as read-only.

use serde::{Deserialize, Serialize};

use crate::domain::run::RunStatus;

/// A repository resource, addressed by name within a namespace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub namespace: String,
    /// Informational source URL, not validated.
    #[serde(rename = "sourceURL")]
    pub source_url: String,
    /// Run statuses in insertion order as written by the reconciler.
    /// Not guaranteed chronological.
    #[serde(default)]
    pub runs: Vec<RunStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_wire_schema() {
        let json = r#"{
            "name": "test-run",
            "namespace": "namespace",
            "sourceURL": "https://anurl.com",
            "runs": [
                {
                    "pipelineRunName": "pipelinerun1",
                    "conditionReason": "Success",
                    "conditionMessage": "all checks passed",
                    "startTime": "2024-05-01T11:44:00Z",
                    "completionTime": "2024-05-01T11:45:00Z",
                    "commitSHA": "SHA",
                    "commitSHAURL": "https://anurl.com/commit/SHA",
                    "commitTitle": "A title",
                    "targetBranch": "TargetBranch",
                    "eventType": "pull_request"
                }
            ]
        }"#;

        let repository: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repository.name, "test-run");
        assert_eq!(repository.namespace, "namespace");
        assert_eq!(repository.source_url, "https://anurl.com");
        assert_eq!(repository.runs.len(), 1);

        let run = &repository.runs[0];
        assert_eq!(run.pipeline_run_name, "pipelinerun1");
        assert_eq!(run.condition_reason.as_deref(), Some("Success"));
        assert_eq!(run.condition_message.as_deref(), Some("all checks passed"));
        assert_eq!(run.commit_sha.as_deref(), Some("SHA"));
        assert_eq!(run.commit_sha_url.as_deref(), Some("https://anurl.com/commit/SHA"));
        assert_eq!(run.commit_title.as_deref(), Some("A title"));
        assert_eq!(run.target_branch.as_deref(), Some("TargetBranch"));
        assert_eq!(run.event_type.as_deref(), Some("pull_request"));
        assert!(run.start_time.is_some());
        assert!(run.completion_time.is_some());
    }

    #[test]
    fn test_repository_tolerates_absent_optional_fields() {
        let json = r#"{
            "name": "bare",
            "namespace": "default",
            "sourceURL": "https://anurl.com",
            "runs": [
                { "pipelineRunName": "pipelinerun1" }
            ]
        }"#;

        let repository: Repository = serde_json::from_str(json).unwrap();
        let run = &repository.runs[0];
        assert!(run.condition_reason.is_none());
        assert!(run.start_time.is_none());
        assert!(run.completion_time.is_none());
        assert!(run.commit_sha.is_none());
    }

    #[test]
    fn test_repository_tolerates_absent_runs() {
        let json = r#"{
            "name": "bare",
            "namespace": "default",
            "sourceURL": "https://anurl.com"
        }"#;

        let repository: Repository = serde_json::from_str(json).unwrap();
        assert!(repository.runs.is_empty());
    }
}
