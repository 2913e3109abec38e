//! Workflows and workflow runs.

use serde_json::{Map, Value};

use crate::github::models::base::User;
use crate::model::macros::model;

model! {
    /// Author or committer identity on a run's head commit.
    pub struct CommitUser {
        pub name: String,
        pub email: String,
    }
}

model! {
    /// The head commit a workflow run was started for.
    pub struct WorkflowRunCommit {
        pub id: String,
        pub tree_id: String,
        pub message: String,
        pub timestamp: String,
        pub author: CommitUser,
        pub committer: CommitUser,
    }
}

model! {
    /// A workflow definition in a repository.
    pub struct Workflow {
        pub id: u64,
        pub node_id: String,
        pub name: String,
        pub path: String,
        pub state: String,
        pub created_at: String,
        pub updated_at: String,
        pub url: String,
        pub html_url: String,
        pub badge_url: String,
    }
}

model! {
    /// The slimmed-down repository object embedded in a workflow run.
    pub struct WorkflowRunRepository {
        pub id: u64,
        pub url: String,
        pub name: String,
        pub node_id: String,
        pub full_name: Option<String>,
        pub owner: Option<User>,
        pub private: Option<bool>,
        pub html_url: Option<String>,
        pub description: Option<String>,
        pub fork: Option<bool>,
        pub archive_url: Option<String>,
        pub assignees_url: Option<String>,
        pub blobs_url: Option<String>,
        pub branches_url: Option<String>,
        pub collaborators_url: Option<String>,
        pub comments_url: Option<String>,
        pub commits_url: Option<String>,
        pub compare_url: Option<String>,
        pub contents_url: Option<String>,
        pub contributors_url: Option<String>,
        pub deployments_url: Option<String>,
        pub downloads_url: Option<String>,
        pub events_url: Option<String>,
        pub forks_url: Option<String>,
        pub git_commits_url: Option<String>,
        pub git_refs_url: Option<String>,
        pub git_tags_url: Option<String>,
        pub git_url: Option<String>,
        pub issue_comment_url: Option<String>,
        pub issue_events_url: Option<String>,
        pub issues_url: Option<String>,
        pub keys_url: Option<String>,
        pub labels_url: Option<String>,
        pub languages_url: Option<String>,
        pub merges_url: Option<String>,
        pub milestones_url: Option<String>,
        pub notifications_url: Option<String>,
        pub pulls_url: Option<String>,
        pub releases_url: Option<String>,
        pub ssh_url: Option<String>,
        pub stargazers_url: Option<String>,
        pub statuses_url: Option<String>,
        pub subscribers_url: Option<String>,
        pub subscription_url: Option<String>,
        pub tags_url: Option<String>,
        pub teams_url: Option<String>,
        pub trees_url: Option<String>,
        pub hooks_url: Option<String>,
    }
}

model! {
    /// A single run of a workflow.
    pub struct WorkflowRun {
        pub id: u64,
        pub name: String,
        pub node_id: String,
        pub check_suite_id: u64,
        pub check_suite_node_id: String,
        pub head_branch: String,
        pub head_sha: String,
        pub run_number: u64,
        pub event: String,
        pub status: String,
        pub conclusion: Option<String>,
        pub workflow_id: u64,
        pub url: String,
        pub html_url: String,
        /// Minimal pull request objects, kept as raw mappings upstream.
        pub pull_requests: Vec<Map<String, Value>>,
        pub created_at: String,
        pub updated_at: String,
        pub actor: User,
        pub run_attempt: u64,
        pub run_started_at: String,
        pub triggering_actor: User,
        pub jobs_url: String,
        pub logs_url: String,
        pub check_suite_url: String,
        pub artifacts_url: String,
        pub cancel_url: String,
        pub rerun_url: String,
        pub workflow_url: String,
        pub head_commit: WorkflowRunCommit,
        pub repository: WorkflowRunRepository,
    }
}
