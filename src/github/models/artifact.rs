//! Workflow run artifacts.

use chrono::{DateTime, Utc};

use crate::model::macros::model;

model! {
    /// The workflow run that uploaded an artifact.
    pub struct ArtifactWorkflowRun {
        pub id: u64,
        pub repository_id: u64,
        pub head_repository_id: u64,
        /// Branch the run was started from.
        pub head_branch: String,
        /// Commit at the head of that branch.
        pub head_sha: String,
    }
}

model! {
    /// An artifact produced by a workflow run.
    pub struct Artifact {
        pub id: u64,
        pub node_id: String,
        pub name: String,
        pub size_in_bytes: u64,
        pub url: String,
        pub archive_download_url: String,
        /// Whether the artifact has expired and can no longer be downloaded.
        pub expired: bool,
        pub created_at: Option<DateTime<Utc>>,
        pub expires_at: Option<DateTime<Utc>>,
        pub updated_at: Option<DateTime<Utc>>,
        pub workflow_run: Option<ArtifactWorkflowRun>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn artifact_from_payload() {
        let artifact = Artifact::from_value(json!({
            "id": 1,
            "node_id": "MDg6QXJ0aWZhY3QxMQ==",
            "name": "Rails",
            "size_in_bytes": 556,
            "url": "https://api.github.com/repos/octo-org/octo-docs/actions/artifacts/11",
            "archive_download_url": "https://api.github.com/repos/octo-org/octo-docs/actions/artifacts/11/zip",
            "expired": false,
            "created_at": "2020-01-10T14:59:22Z",
            "expires_at": "2020-03-21T14:59:22Z",
            "updated_at": "2020-02-21T14:59:22Z",
            "workflow_run": {
                "id": 1,
                "repository_id": 2,
                "head_repository_id": 3,
                "head_branch": "main",
                "head_sha": "328faa0536e6fef19753d9d91dc96a9931694ce3",
            },
        }))
        .unwrap();

        assert_eq!(artifact.id, 1);
        assert_eq!(artifact.node_id, "MDg6QXJ0aWZhY3QxMQ==");
        assert_eq!(artifact.name, "Rails");
        assert_eq!(artifact.size_in_bytes, 556);
        assert!(!artifact.expired);
        assert_eq!(
            artifact.created_at,
            Some(Utc.with_ymd_and_hms(2020, 1, 10, 14, 59, 22).unwrap())
        );
        assert_eq!(
            artifact.expires_at,
            Some(Utc.with_ymd_and_hms(2020, 3, 21, 14, 59, 22).unwrap())
        );

        let run = artifact.workflow_run.expect("workflow run");
        assert_eq!(run.id, 1);
        assert_eq!(run.repository_id, 2);
        assert_eq!(run.head_repository_id, 3);
        assert_eq!(run.head_branch, "main");
        assert_eq!(run.head_sha, "328faa0536e6fef19753d9d91dc96a9931694ce3");
    }

    #[test]
    fn artifact_without_run_details() {
        let artifact = Artifact::from_value(json!({
            "id": 2,
            "node_id": "MDg6QXJ0aWZhY3QxMg==",
            "name": "coverage",
            "size_in_bytes": 12,
            "url": "https://api.github.com/repos/o/r/actions/artifacts/12",
            "archive_download_url": "https://api.github.com/repos/o/r/actions/artifacts/12/zip",
            "expired": true,
        }))
        .unwrap();

        assert_eq!(artifact.created_at, None);
        assert_eq!(artifact.workflow_run, None);
    }
}
