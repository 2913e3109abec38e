//! Pull requests, their commits and review metadata.

use chrono::{DateTime, Utc};

use crate::github::models::base::{FileStatus, Team, User};
use crate::github::models::organization::Repository;
use crate::model::macros::{model, str_enum};

model! {
    /// Author or committer identity on a commit inside a pull request.
    pub struct PullRequestCommitUser {
        pub name: String,
        pub email: String,
        pub date: DateTime<Utc>,
    }
}

model! {
    pub struct Tree {
        pub url: String,
        pub sha: String,
    }
}

model! {
    pub struct PullRequestCommitVerification {
        pub verified: bool,
        pub reason: String,
        pub signature: Option<String>,
        pub payload: Option<String>,
    }
}

model! {
    /// The git commit object embedded in a pull request commit.
    pub struct PullRequestCommitDetails {
        pub comment_count: u64,
        pub message: String,
        pub tree: Tree,
        pub url: String,
        pub verification: PullRequestCommitVerification,
        pub author: Option<PullRequestCommitUser>,
        pub committer: Option<PullRequestCommitUser>,
    }
}

model! {
    pub struct PullRequestCommitParent {
        pub url: String,
        pub sha: String,
        pub html_url: Option<String>,
    }
}

model! {
    pub struct Stats {
        pub additions: u64,
        pub deletions: u64,
        pub total: u64,
    }
}

model! {
    /// Per-file diff information of a commit.
    pub struct DiffEntry {
        pub additions: u64,
        pub blob_url: String,
        pub changes: u64,
        pub contents_url: String,
        pub deletions: u64,
        pub filename: String,
        pub raw_url: String,
        pub sha: String,
        pub status: FileStatus,
        pub patch: Option<String>,
        pub previous_filename: Option<String>,
    }
}

model! {
    /// A commit that is part of a pull request.
    pub struct PullRequestCommit {
        pub url: String,
        pub sha: String,
        pub node_id: String,
        pub html_url: String,
        pub comments_url: String,
        pub commit: PullRequestCommitDetails,
        pub author: User,
        pub stats: Option<Stats>,
        pub files: Vec<DiffEntry>,
        pub committer: Option<User>,
        pub parents: Vec<PullRequestCommitParent>,
    }
}

model! {
    pub struct Label {
        pub id: u64,
        pub node_id: String,
        pub url: String,
        pub name: String,
        pub color: String,
        pub default: bool,
        pub description: Option<String>,
    }
}

str_enum! {
    pub enum MilestoneState {
        Open = "open",
        Closed = "closed",
    }
}

model! {
    pub struct Milestone {
        pub closed_issues: u64,
        pub created_at: DateTime<Utc>,
        pub html_url: String,
        pub id: u64,
        pub labels_url: String,
        pub node_id: String,
        pub number: u64,
        pub open_issues: u64,
        pub state: MilestoneState,
        pub title: String,
        pub updated_at: DateTime<Utc>,
        pub url: String,
        pub closed_at: Option<DateTime<Utc>>,
        pub creator: Option<User>,
        pub description: Option<String>,
        pub due_on: Option<DateTime<Utc>>,
    }
}

model! {
    /// The head or base reference of a pull request.
    pub struct PullRequestRef {
        pub label: String,
        pub r#ref: String,
        pub sha: String,
        pub user: User,
        pub repo: Repository,
    }
}

str_enum! {
    pub enum PullRequestState {
        Open = "open",
        Closed = "closed",
    }
}

str_enum! {
    /// The relationship of the author to the repository.
    pub enum AuthorAssociation {
        Collaborator = "COLLABORATOR",
        Contributor = "CONTRIBUTOR",
        FirstTimer = "FIRST_TIMER",
        FirstTimeContributor = "FIRST_TIME_CONTRIBUTOR",
        Mannequin = "MANNEQUIN",
        Member = "MEMBER",
        None = "NONE",
        Owner = "OWNER",
    }
}

str_enum! {
    pub enum MergeMethod {
        Merge = "merge",
        Squash = "squash",
        Rebase = "rebase",
    }
}

model! {
    pub struct AutoMerge {
        pub enabled_by: User,
        pub merge_method: MergeMethod,
        pub commit_title: String,
        pub commit_message: String,
    }
}

model! {
    /// A pull request with its review and merge state.
    pub struct PullRequest {
        pub additions: u64,
        pub author_association: AuthorAssociation,
        pub base: PullRequestRef,
        pub changed_files: u64,
        pub comments_url: String,
        pub comments: u64,
        pub commits_url: String,
        pub commits: u64,
        pub created_at: DateTime<Utc>,
        pub deletions: u64,
        pub diff_url: String,
        pub head: PullRequestRef,
        pub html_url: String,
        pub id: u64,
        pub issue_url: String,
        pub locked: bool,
        pub maintainer_can_modify: bool,
        pub mergeable_state: String,
        pub merged: bool,
        pub node_id: String,
        pub number: u64,
        pub patch_url: String,
        pub review_comment_url: String,
        pub review_comments_url: String,
        pub review_comments: u64,
        pub state: PullRequestState,
        pub statuses_url: String,
        pub title: String,
        pub updated_at: DateTime<Utc>,
        pub url: String,
        pub user: User,
        pub active_lock_reason: Option<String>,
        pub assignee: Option<User>,
        pub assignees: Vec<User>,
        pub auto_merge: Option<AutoMerge>,
        pub body: Option<String>,
        pub closed_at: Option<DateTime<Utc>>,
        pub draft: Option<bool>,
        pub labels: Vec<Label>,
        pub merge_commit_sha: Option<String>,
        pub mergeable: Option<bool>,
        pub merged_at: Option<DateTime<Utc>>,
        pub merged_by: Option<User>,
        pub milestone: Option<Milestone>,
        pub rebaseable: Option<bool>,
        pub requested_reviewers: Vec<User>,
        pub requested_teams: Vec<Team>,
    }
}
