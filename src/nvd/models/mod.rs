//! Typed records for the vulnerability database API.
//!
//! Names that collide across endpoint families (`Reference`, `CpeMatch`)
//! stay in their submodule and are addressed through it.

pub mod cpe;
pub mod cpe_match_string;
pub mod cve;
pub mod cve_change;
pub mod cvss_v2;
pub mod cvss_v3;
pub mod source;

pub use cpe::Cpe;
pub use cpe_match_string::CpeMatchString;
pub use cve::{
    Configuration, CpeMatch, Cve, CvssType, CvssV2Metric, CvssV3Metric, Description, Metrics,
    Node, Operator, Reference, VendorComment, Weakness,
};
pub use cve_change::{CveChange, EventName};
pub use source::Source;
