//! Repositories and their licenses.

use crate::github::models::base::User;
use crate::model::macros::model;

model! {
    /// A repository license.
    pub struct License {
        pub key: String,
        pub name: String,
        pub url: String,
        pub spdx_id: String,
        pub node_id: String,
        pub html_url: Option<String>,
    }
}

model! {
    /// A GitHub repository.
    pub struct Repository {
        pub id: u64,
        pub node_id: String,
        pub name: String,
        pub full_name: String,
        pub private: bool,
        pub owner: User,
        pub html_url: String,
        pub description: String,
        pub fork: bool,
        pub url: String,
        pub forks_url: String,
        pub keys_url: String,
        pub collaborators_url: String,
        pub teams_url: String,
        pub hooks_url: String,
        pub issue_events_url: String,
        pub events_url: String,
        pub assignees_url: String,
        pub branches_url: String,
        pub tags_url: String,
        pub blobs_url: String,
        pub git_tags_url: String,
        pub git_refs_url: String,
        pub trees_url: String,
        pub statuses_url: String,
        pub languages_url: String,
        pub stargazers_url: String,
        pub contributors_url: String,
        pub subscribers_url: String,
        pub subscription_url: String,
        pub commits_url: String,
        pub git_commits_url: String,
        pub comments_url: String,
        pub issue_comment_url: String,
        pub contents_url: String,
        pub compare_url: String,
        pub merges_url: String,
        pub archive_url: String,
        pub downloads_url: String,
        pub issues_url: String,
        pub pulls_url: String,
        pub milestones_url: String,
        pub notifications_url: String,
        pub labels_url: String,
        pub releases_url: String,
        pub deployments_url: String,
        pub created_at: String,
        pub updated_at: String,
        pub pushed_at: String,
        pub git_url: String,
        pub ssh_url: String,
        pub clone_url: String,
        pub svn_url: String,
        pub homepage: Option<String>,
        pub stargazers_count: u64,
        pub watchers_count: u64,
        pub language: Option<String>,
        pub has_issues: bool,
        pub has_projects: bool,
        pub has_downloads: bool,
        pub has_wiki: bool,
        pub has_pages: bool,
        pub has_discussions: bool,
        pub forks_count: u64,
        pub mirror_url: Option<String>,
        pub archived: bool,
        pub disabled: bool,
        pub open_issues_count: u64,
        pub license: Option<License>,
        pub is_template: bool,
        pub topics: Vec<String>,
        pub visibility: String,
        pub forks: u64,
        pub open_issues: u64,
        pub watchers: u64,
        pub default_branch: String,
        pub allow_forking: Option<bool>,
        pub allow_rebase_merge: Option<bool>,
        pub allow_squash_merge: Option<bool>,
        pub allow_auto_merge: Option<bool>,
        pub delete_branch_on_merge: Option<bool>,
        pub allow_merge_commit: Option<bool>,
        pub web_commit_signoff_required: Option<bool>,
        pub subscribers_count: Option<u64>,
        pub network_count: Option<u64>,
        pub size: Option<u64>,
    }
}
