//! Secret scanning alerts and the locations a secret was found at.

use chrono::{DateTime, Utc};

use crate::github::models::base::User;
use crate::github::models::organization::Repository;
use crate::model::macros::{model, payload_union, str_enum};

str_enum! {
    /// Property by which alert listings are sorted.
    pub enum AlertSort {
        Created = "created",
        Updated = "updated",
    }
}

str_enum! {
    pub enum AlertState {
        Open = "open",
        Resolved = "resolved",
    }
}

str_enum! {
    /// Reason given when an alert is resolved.
    pub enum Resolution {
        FalsePositive = "false_positive",
        WontFix = "wont_fix",
        Revoked = "revoked",
        UsedInTests = "used_in_tests",
    }
}

str_enum! {
    pub enum LocationType {
        Commit = "commit",
        IssueTitle = "issue_title",
        IssueBody = "issue_body",
        IssueComment = "issue_comment",
    }
}

model! {
    /// A detected secret and its triage state.
    pub struct SecretScanningAlert {
        pub number: u64,
        pub url: String,
        pub html_url: String,
        pub locations_url: String,
        pub state: AlertState,
        pub secret_type: String,
        pub secret_type_display_name: String,
        pub secret: String,
        pub created_at: DateTime<Utc>,
        pub repository: Option<Repository>,
        pub updated_at: Option<DateTime<Utc>>,
        pub resolution: Option<Resolution>,
        pub resolved_at: Option<DateTime<Utc>>,
        pub resolved_by: Option<User>,
        pub push_protection_bypassed: Option<bool>,
        pub push_protection_bypassed_by: Option<User>,
        pub push_protection_bypassed_at: Option<DateTime<Utc>>,
        pub resolution_comment: Option<String>,
    }
}

model! {
    /// A secret found in a commit blob.
    pub struct CommitLocation {
        pub path: String,
        pub start_line: u64,
        pub end_line: u64,
        pub start_column: u64,
        pub end_column: u64,
        pub blob_sha: String,
        pub blob_url: String,
        pub commit_sha: String,
        pub commit_url: String,
    }
}

model! {
    pub struct IssueTitleLocation {
        pub issue_title_url: String,
    }
}

model! {
    pub struct IssueBodyLocation {
        pub issue_body_url: String,
    }
}

model! {
    pub struct IssueCommentLocation {
        pub issue_comment_url: String,
    }
}

payload_union! {
    /// Location details, shaped by the alert's location type.
    pub enum AlertLocationDetails {
        Commit(CommitLocation),
        IssueTitle(IssueTitleLocation),
        IssueBody(IssueBodyLocation),
        IssueComment(IssueCommentLocation),
    }
}

model! {
    /// Where a detected secret appears.
    pub struct AlertLocation {
        pub r#type: LocationType,
        pub details: AlertLocationDetails,
    }
}
