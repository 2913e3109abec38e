//! CPE product records.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::macros::{model, str_enum};

model! {
    /// A CPE title in a specific language.
    pub struct Title {
        pub title: String,
        pub lang: String,
    }
}

str_enum! {
    /// What a CPE reference links to.
    pub enum ReferenceType {
        Advisory = "Advisory",
        Changelog = "Change Log",
        Product = "Product",
        Project = "Project",
        Vendor = "Vendor",
        Version = "Version",
    }
}

model! {
    /// A link to additional data about a CPE.
    pub struct Reference {
        pub r#ref: String,
        pub r#type: Option<ReferenceType>,
    }
}

model! {
    /// The CPE that deprecates another one.
    pub struct DeprecatedBy {
        pub cpe_name: Option<String>,
        pub cpe_name_id: Option<Uuid>,
    }
}

model! {
    /// A product identifier in the CPE dictionary.
    pub struct Cpe {
        pub cpe_name: String,
        pub cpe_name_id: Uuid,
        pub deprecated: bool,
        pub last_modified: DateTime<Utc>,
        pub created: DateTime<Utc>,
        pub titles: Vec<Title>,
        pub refs: Vec<Reference>,
        pub deprecated_by: Vec<DeprecatedBy>,
    }
}
