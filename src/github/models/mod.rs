//! Models for GitHub REST API payloads.
//!
//! One file per resource family, mirroring the REST API surface. Field
//! names match the upstream JSON keys exactly; there is no renaming layer.
//! Names that collide across families (each alert kind has its own
//! `AlertState`, for example) stay in their submodule and are addressed
//! through it.

pub mod artifact;
pub mod base;
pub mod billing;
pub mod branch;
pub mod code_scanning;
pub mod dependabot;
pub mod organization;
pub mod packages;
pub mod pull_request;
pub mod release;
pub mod secret_scanning;
pub mod tag;
pub mod user;
pub mod workflow;

pub use artifact::{Artifact, ArtifactWorkflowRun};
pub use base::{App, Event, FileStatus, Permission, SortOrder, Team, TeamPrivacy, TeamRole, User};
pub use billing::{ActionsBilling, ActionsMinutesUsedBreakdown, PackagesBilling, StorageBilling};
pub use branch::BranchProtection;
pub use code_scanning::CodeScanningAlert;
pub use dependabot::DependabotAlert;
pub use organization::{License, Repository};
pub use packages::{Package, PackageType, PackageVersion, PackageVisibility};
pub use pull_request::{PullRequest, PullRequestCommit, PullRequestRef};
pub use release::{Release, ReleaseAsset, ReleaseAssetState, ReleaseReactions};
pub use secret_scanning::SecretScanningAlert;
pub use tag::Tag;
pub use user::{EmailInformation, SshPublicKey, SshPublicKeyExtended};
pub use workflow::{Workflow, WorkflowRun};

/// A complete user payload, shared by tests across the resource files.
#[cfg(test)]
pub(crate) fn user_payload_for_tests() -> serde_json::Value {
    serde_json::json!({
        "login": "octocat",
        "id": 1,
        "node_id": "MDQ6VXNlcjE=",
        "avatar_url": "https://github.com/images/error/octocat_happy.gif",
        "gravatar_id": "",
        "url": "https://api.github.com/users/octocat",
        "html_url": "https://github.com/octocat",
        "followers_url": "https://api.github.com/users/octocat/followers",
        "following_url": "https://api.github.com/users/octocat/following{/other_user}",
        "gists_url": "https://api.github.com/users/octocat/gists{/gist_id}",
        "starred_url": "https://api.github.com/users/octocat/starred{/owner}{/repo}",
        "subscriptions_url": "https://api.github.com/users/octocat/subscriptions",
        "organizations_url": "https://api.github.com/users/octocat/orgs",
        "repos_url": "https://api.github.com/users/octocat/repos",
        "events_url": "https://api.github.com/users/octocat/events{/privacy}",
        "received_events_url": "https://api.github.com/users/octocat/received_events",
        "type": "User",
        "site_admin": false,
    })
}
