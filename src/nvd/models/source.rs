//! Organizations that contribute vulnerability data.

use chrono::{DateTime, Utc};

use crate::model::macros::model;

model! {
    /// How far submissions from a source are accepted for a metric kind.
    pub struct AcceptanceLevel {
        pub description: String,
        pub last_modified: DateTime<Utc>,
    }
}

model! {
    /// A data source contributing CVE information.
    pub struct Source {
        pub last_modified: DateTime<Utc>,
        pub created: DateTime<Utc>,
        pub name: Option<String>,
        pub source_identifiers: Vec<String>,
        pub contact_email: Option<String>,
        pub v2_acceptance_level: Option<AcceptanceLevel>,
        pub v3_acceptance_level: Option<AcceptanceLevel>,
        pub cwe_acceptance_level: Option<AcceptanceLevel>,
    }
}
