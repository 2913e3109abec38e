//! CPE match strings: criteria that resolve to one or more CPEs.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::macros::model;

model! {
    /// One CPE resolved from a match criteria string.
    pub struct CpeMatch {
        pub cpe_name: String,
        pub cpe_name_id: Uuid,
    }
}

model! {
    /// A match criteria string with its optional version range and the
    /// CPEs it currently resolves to.
    pub struct CpeMatchString {
        pub match_criteria_id: Uuid,
        pub criteria: String,
        pub status: String,
        pub cpe_last_modified: DateTime<Utc>,
        pub created: DateTime<Utc>,
        pub last_modified: DateTime<Utc>,
        pub matches: Vec<CpeMatch>,
        pub version_start_including: Option<String>,
        pub version_start_excluding: Option<String>,
        pub version_end_including: Option<String>,
        pub version_end_excluding: Option<String>,
    }
}
