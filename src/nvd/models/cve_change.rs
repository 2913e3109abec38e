//! CVE change-history events.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::macros::{model, str_enum};

str_enum! {
    /// What kind of change a history event records.
    pub enum EventName {
        InitialAnalysis = "Initial Analysis",
        Reanalysis = "Reanalysis",
        CveModified = "CVE Modified",
        ModifiedAnalysis = "Modified Analysis",
        CveTranslated = "CVE Translated",
        VendorComment = "Vendor Comment",
        CveSourceUpdate = "CVE Source Update",
        CpeDeprecationRemap = "CPE Deprecation Remap",
        CweRemap = "CWE Remap",
        CveRejected = "CVE Rejected",
        CveUnrejected = "CVE Unrejected",
    }
}

model! {
    /// One modified attribute within a change event.
    pub struct Detail {
        pub r#type: String,
        pub action: Option<String>,
        pub old_value: Option<String>,
        pub new_value: Option<String>,
    }
}

model! {
    /// A single event in a CVE's change history.
    pub struct CveChange {
        pub cve_id: String,
        pub event_name: EventName,
        pub cve_change_id: Uuid,
        pub source_identifier: String,
        pub created: Option<DateTime<Utc>>,
        pub details: Option<Vec<Detail>>,
    }
}
