//! GitHub REST API resources.
//!
//! Only the payload models live here; requesting, paginating, and
//! authenticating is the consuming client's job.

pub mod models;
