//! Branch protection settings.

use crate::github::models::base::{App, Team, User};
use crate::model::macros::model;

model! {
    /// Who may dismiss pull request reviews on a protected branch.
    pub struct DismissalRestrictions {
        pub url: String,
        pub users_url: String,
        pub teams_url: String,
        pub users: Vec<User>,
        pub teams: Vec<Team>,
        pub apps: Vec<App>,
    }
}

model! {
    /// Who may bypass required pull request reviews.
    pub struct BypassPullRequestAllowances {
        pub users: Vec<User>,
        pub teams: Vec<Team>,
        pub apps: Vec<App>,
    }
}

model! {
    pub struct RequiredPullRequestReviews {
        pub url: String,
        pub dismiss_stale_reviews: bool,
        pub require_code_owner_reviews: bool,
        pub required_approving_review_count: u64,
        pub require_last_push_approval: bool,
        pub dismissal_restrictions: Option<DismissalRestrictions>,
        pub bypass_pull_request_allowances: Option<BypassPullRequestAllowances>,
    }
}

model! {
    pub struct StatusCheck {
        pub context: String,
        pub app_id: Option<u64>,
    }
}

model! {
    pub struct RequiredStatusChecks {
        pub url: String,
        pub strict: bool,
        pub checks: Vec<StatusCheck>,
        pub enforcement_level: Option<String>,
    }
}

model! {
    /// Who may push to a protected branch.
    pub struct Restrictions {
        pub url: String,
        pub users_url: String,
        pub teams_url: String,
        pub apps_url: String,
        pub users: Vec<User>,
        pub teams: Vec<Team>,
        pub apps: Vec<App>,
    }
}

model! {
    /// A single on/off protection toggle.
    pub struct BranchProtectionFeature {
        pub enabled: bool,
        pub url: Option<String>,
    }
}

model! {
    /// Full protection rule set for a branch.
    pub struct BranchProtection {
        pub url: String,
        pub required_status_checks: Option<RequiredStatusChecks>,
        pub required_pull_request_reviews: Option<RequiredPullRequestReviews>,
        pub restrictions: Option<Restrictions>,
        pub enforce_admins: Option<BranchProtectionFeature>,
        pub required_linear_history: Option<BranchProtectionFeature>,
        pub allow_force_pushes: Option<BranchProtectionFeature>,
        pub allow_deletions: Option<BranchProtectionFeature>,
        pub block_creations: Option<BranchProtectionFeature>,
        pub required_conversation_resolution: Option<BranchProtectionFeature>,
        pub lock_branch: Option<BranchProtectionFeature>,
        pub allow_fork_syncing: Option<BranchProtectionFeature>,
        pub required_signatures: Option<BranchProtectionFeature>,
    }
}
