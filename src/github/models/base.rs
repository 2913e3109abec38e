//! Models shared across GitHub resource families: users, teams, apps, and
//! the enumerations that show up throughout the API.

use crate::model::macros::{model, str_enum};

str_enum! {
    /// Status of a file in a commit or pull request.
    pub enum FileStatus {
        Added = "added",
        Deleted = "deleted",
        Modified = "modified",
        Renamed = "renamed",
        Copied = "copied",
        Changed = "changed",
        Unchanged = "unchanged",
    }
}

model! {
    /// A GitHub user.
    pub struct User {
        pub login: String,
        pub id: u64,
        pub node_id: String,
        pub avatar_url: String,
        pub gravatar_id: String,
        pub url: String,
        pub html_url: String,
        pub followers_url: String,
        pub following_url: String,
        pub gists_url: String,
        pub starred_url: String,
        pub subscriptions_url: String,
        pub organizations_url: String,
        pub repos_url: String,
        pub events_url: String,
        pub received_events_url: String,
        pub r#type: String,
        pub site_admin: bool,
    }
}

str_enum! {
    /// Privacy scope of a team.
    pub enum TeamPrivacy {
        Secret = "secret",
        Closed = "closed",
    }
}

str_enum! {
    /// A user's role within a team.
    pub enum TeamRole {
        Member = "member",
        Maintainer = "maintainer",
    }
}

str_enum! {
    /// Permission on a repository.
    pub enum Permission {
        Pull = "pull",
        Push = "push",
        Triage = "triage",
        Maintain = "maintain",
        Admin = "admin",
    }
}

model! {
    /// A GitHub team.
    pub struct Team {
        pub id: u64,
        pub node_id: String,
        pub url: String,
        pub html_url: String,
        pub name: String,
        pub slug: String,
        pub description: String,
        pub privacy: TeamPrivacy,
        pub permission: Permission,
        pub members_url: String,
        pub repositories_url: String,
        /// The parent team, for nested team hierarchies.
        pub parent: Option<Box<Team>>,
    }
}

model! {
    /// A GitHub App.
    pub struct App {
        pub id: u64,
        pub slug: String,
        pub node_id: String,
        pub owner: User,
        pub name: String,
        pub description: String,
        pub external_url: String,
        pub html_url: String,
        pub created_at: String,
        pub updated_at: String,
        pub events: Vec<String>,
    }
}

str_enum! {
    /// An event type that can trigger a workflow.
    pub enum Event {
        BranchProtectionRule = "branch_protection_rule",
        CheckRun = "check_run",
        CheckSuite = "check_suite",
        Create = "create",
        Delete = "delete",
        Deployment = "deployment",
        DeploymentStatus = "deployment_status",
        Discussion = "discussion",
        DiscussionComment = "discussion_comment",
        Dynamic = "dynamic",
        Fork = "fork",
        Gollum = "gollum",
        IssueComment = "issue_comment",
        Issues = "issues",
        Label = "label",
        MergeGroup = "merge_group",
        Milestone = "milestone",
        PageBuild = "page_build",
        Project = "project",
        ProjectCard = "project_card",
        ProjectColumn = "project_column",
        Public = "public",
        PullRequest = "pull_request",
        PullRequestComment = "pull_request_comment",
        PullRequestReview = "pull_request_review",
        PullRequestReviewComment = "pull_request_review_comment",
        PullRequestTarget = "pull_request_target",
        Push = "push",
        RegistryPackage = "registry_package",
        Release = "release",
        RepositoryDispatch = "repository_dispatch",
        Schedule = "schedule",
        Status = "status",
        Watch = "watch",
        WorkflowCall = "workflow_call",
        WorkflowDispatch = "workflow_dispatch",
        WorkflowRun = "workflow_run",
    }
}

str_enum! {
    /// Sort order for list requests.
    pub enum SortOrder {
        Asc = "asc",
        Desc = "desc",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FromPayload, ModelError};
    use serde_json::json;

    #[test]
    fn user_from_payload() {
        let user =
            User::from_value(crate::github::models::user_payload_for_tests()).unwrap();

        assert_eq!(user.login, "octocat");
        assert_eq!(user.id, 1);
        assert_eq!(user.r#type, "User");
        assert!(!user.site_admin);
    }

    #[test]
    fn team_with_parent_team() {
        let team = Team::from_value(json!({
            "id": 2,
            "node_id": "MDQ6VGVhbTI=",
            "url": "https://api.github.com/teams/2",
            "html_url": "https://github.com/orgs/github/teams/core",
            "name": "Core",
            "slug": "core",
            "description": "",
            "privacy": "secret",
            "permission": "push",
            "members_url": "https://api.github.com/teams/2/members{/member}",
            "repositories_url": "https://api.github.com/teams/2/repos",
            "parent": {
                "id": 1,
                "node_id": "MDQ6VGVhbTE=",
                "url": "https://api.github.com/teams/1",
                "html_url": "https://github.com/orgs/github/teams/justice-league",
                "name": "Justice League",
                "slug": "justice-league",
                "description": "A great team.",
                "privacy": "closed",
                "permission": "admin",
                "members_url": "https://api.github.com/teams/1/members{/member}",
                "repositories_url": "https://api.github.com/teams/1/repos",
            },
        }))
        .unwrap();

        assert_eq!(team.privacy, TeamPrivacy::Secret);
        let parent = team.parent.expect("parent team");
        assert_eq!(parent.name, "Justice League");
        assert_eq!(parent.privacy, TeamPrivacy::Closed);
        assert_eq!(parent.parent, None);
    }

    #[test]
    fn unknown_privacy_literal_fails() {
        let err = TeamPrivacy::from_value(json!("hidden")).unwrap_err();
        assert!(matches!(
            err,
            ModelError::UnknownLiteral {
                name: "TeamPrivacy",
                ..
            }
        ));
    }

    #[test]
    fn event_literals() {
        assert_eq!(
            Event::from_value(json!("pull_request_target")).unwrap(),
            Event::PullRequestTarget
        );
        assert_eq!(Event::WorkflowDispatch.as_str(), "workflow_dispatch");
    }
}
