#![recursion_limit = "256"]
//! Typed models for the GitHub REST API and the NVD vulnerability database.
//!
//! The crate has one engine and two schema families:
//!
//! - [`model`] - the materialization engine that turns decoded JSON
//!   payloads into typed instances, keeping undeclared keys reachable
//! - [`github`] - models for GitHub resources (users, repositories, pull
//!   requests, releases, alerts, workflows, billing, ...)
//! - [`nvd`] - models for NVD records: CVEs with their CVSS metric
//!   blocks, CPEs, match strings, data sources, and change history
//!
//! HTTP clients, pagination, and authentication are deliberately out of
//! scope; callers decode a response body to [`serde_json::Value`] and hand
//! it to a model's `from_value`.
//!
//! # Example
//!
//! ```
//! use octomodels::github::models::Team;
//! use octomodels::github::models::base::TeamPrivacy;
//! use serde_json::json;
//!
//! let team = Team::from_value(json!({
//!     "id": 1,
//!     "node_id": "MDQ6VGVhbTE=",
//!     "url": "https://api.github.com/teams/1",
//!     "html_url": "https://github.com/orgs/github/teams/justice-league",
//!     "name": "Justice League",
//!     "slug": "justice-league",
//!     "description": "A great team.",
//!     "privacy": "closed",
//!     "permission": "admin",
//!     "members_url": "https://api.github.com/teams/1/members{/member}",
//!     "repositories_url": "https://api.github.com/teams/1/repos",
//! })).unwrap();
//!
//! assert_eq!(team.privacy, TeamPrivacy::Closed);
//! ```

pub mod github;
pub mod model;
pub mod nvd;

pub use model::{Extra, FromPayload, ModelError};
