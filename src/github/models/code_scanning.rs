//! Code scanning alerts.

use chrono::{DateTime, Utc};

use crate::github::models::base::User;
use crate::github::models::organization::Repository;
use crate::model::macros::{model, str_enum};

str_enum! {
    pub enum AlertState {
        Open = "open",
        Dismissed = "dismissed",
        Fixed = "fixed",
    }
}

str_enum! {
    /// Property by which alert listings are sorted.
    pub enum AlertSort {
        Created = "created",
        Updated = "updated",
    }
}

str_enum! {
    /// Reason given when an alert is dismissed or closed.
    pub enum DismissedReason {
        FalsePositive = "false positive",
        WontFix = "won't fix",
        UsedInTests = "used in tests",
    }
}

str_enum! {
    pub enum Severity {
        None = "none",
        Note = "note",
        Warning = "warning",
        Error = "error",
    }
}

str_enum! {
    pub enum SecuritySeverityLevel {
        Low = "low",
        Medium = "medium",
        High = "high",
        Critical = "critical",
    }
}

str_enum! {
    /// Classification of the file that triggered an alert.
    pub enum Classification {
        Source = "source",
        Generated = "generated",
        Test = "test",
        Library = "library",
    }
}

model! {
    /// The analysis rule that produced an alert.
    pub struct Rule {
        pub name: String,
        pub description: String,
        pub id: Option<String>,
        pub full_description: Option<String>,
        pub severity: Option<Severity>,
        pub security_severity_level: Option<SecuritySeverityLevel>,
        pub tags: Option<Vec<String>>,
        pub help: Option<String>,
        pub help_uri: Option<String>,
    }
}

model! {
    pub struct Message {
        pub text: String,
    }
}

model! {
    /// A region within a file that an alert points at.
    pub struct Location {
        pub path: String,
        pub start_line: u64,
        pub end_line: u64,
        pub start_column: u64,
        pub end_column: u64,
    }
}

model! {
    /// One occurrence of an alert in a specific analysis.
    pub struct Instance {
        pub r#ref: String,
        pub analysis_key: String,
        pub environment: String,
        pub category: String,
        pub state: AlertState,
        pub commit_sha: String,
        pub message: Message,
        pub location: Location,
        pub html_url: Option<String>,
        pub classifications: Option<Vec<Classification>>,
    }
}

model! {
    /// The tool that generated the analysis.
    pub struct Tool {
        pub name: String,
        pub version: Option<String>,
        pub guid: Option<String>,
    }
}

model! {
    /// A code scanning alert with its most recent occurrence.
    pub struct CodeScanningAlert {
        pub number: u64,
        pub created_at: DateTime<Utc>,
        pub url: String,
        pub html_url: String,
        pub instances_url: String,
        pub state: AlertState,
        pub rule: Rule,
        pub tool: Tool,
        pub most_recent_instance: Instance,
        pub repository: Option<Repository>,
        pub updated_at: Option<DateTime<Utc>>,
        pub fixed_at: Option<DateTime<Utc>>,
        pub dismissed_by: Option<User>,
        pub dismissed_at: Option<DateTime<Utc>>,
        pub dismissed_reason: Option<DismissedReason>,
        pub dismissed_comment: Option<String>,
    }
}
