//! Releases and their attached assets.

use chrono::{DateTime, Utc};

use crate::github::models::base::User;
use crate::model::macros::{model, str_enum};

str_enum! {
    pub enum ReleaseAssetState {
        Uploaded = "uploaded",
        Open = "open",
    }
}

model! {
    /// A downloadable file attached to a release.
    pub struct ReleaseAsset {
        pub url: String,
        pub browser_download_url: String,
        pub id: u64,
        pub node_id: String,
        pub name: String,
        pub state: ReleaseAssetState,
        pub content_type: String,
        pub size: u64,
        pub download_count: u64,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
        pub label: Option<String>,
        pub uploader: Option<User>,
    }
}

model! {
    /// Emoji reaction counts on a release.
    pub struct ReleaseReactions {
        pub url: String,
        pub total_count: u64,
        pub laugh: u64,
        pub confused: u64,
        pub heart: u64,
        pub hooray: u64,
        pub eyes: u64,
        pub rocket: u64,
    }
}

model! {
    /// A published, draft or pre-release version of a repository.
    pub struct Release {
        pub assets_url: String,
        pub created_at: DateTime<Utc>,
        pub draft: bool,
        pub html_url: String,
        pub id: u64,
        pub node_id: String,
        pub prerelease: bool,
        pub tag_name: String,
        pub target_commitish: String,
        pub upload_url: String,
        pub url: String,
        pub assets: Vec<ReleaseAsset>,
        pub author: Option<User>,
        pub body_html: Option<String>,
        pub body_text: Option<String>,
        pub body: Option<String>,
        pub discussion_url: Option<String>,
        pub mentions_count: Option<u64>,
        pub name: Option<String>,
        pub published_at: Option<DateTime<Utc>>,
        pub reactions: Option<ReleaseReactions>,
        pub tarball_url: Option<String>,
        pub zipball_url: Option<String>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn release_from_payload() {
        let release = Release::from_value(json!({
            "url": "https://api.github.com/repos/octocat/Hello-World/releases/1",
            "html_url": "https://github.com/octocat/Hello-World/releases/v1.0.0",
            "assets_url": "https://api.github.com/repos/octocat/Hello-World/releases/1/assets",
            "upload_url": "https://uploads.github.com/repos/octocat/Hello-World/releases/1/assets{?name,label}",
            "tarball_url": "https://api.github.com/repos/octocat/Hello-World/tarball/v1.0.0",
            "zipball_url": "https://api.github.com/repos/octocat/Hello-World/zipball/v1.0.0",
            "id": 1,
            "node_id": "MDc6UmVsZWFzZTE=",
            "tag_name": "v1.0.0",
            "target_commitish": "master",
            "name": "v1.0.0",
            "body": "Description of the release",
            "draft": false,
            "prerelease": false,
            "created_at": "2013-02-27T19:35:32Z",
            "published_at": "2013-02-27T19:35:32Z",
            "author": crate::github::models::user_payload_for_tests(),
            "assets": [
                {
                    "url": "https://api.github.com/repos/octocat/Hello-World/releases/assets/1",
                    "browser_download_url": "https://github.com/octocat/Hello-World/releases/download/v1.0.0/example.zip",
                    "id": 1,
                    "node_id": "MDEyOlJlbGVhc2VBc3NldDE=",
                    "name": "example.zip",
                    "label": "short description",
                    "state": "uploaded",
                    "content_type": "application/zip",
                    "size": 1024,
                    "download_count": 42,
                    "created_at": "2013-02-27T19:35:32Z",
                    "updated_at": "2013-02-27T19:35:32Z",
                    "uploader": crate::github::models::user_payload_for_tests(),
                }
            ],
        }))
        .unwrap();

        assert_eq!(release.tag_name, "v1.0.0");
        assert!(!release.draft);
        assert_eq!(
            release.created_at,
            Utc.with_ymd_and_hms(2013, 2, 27, 19, 35, 32).unwrap()
        );
        assert_eq!(release.assets.len(), 1);
        assert_eq!(release.assets[0].state, ReleaseAssetState::Uploaded);
        assert_eq!(release.assets[0].download_count, 42);
        assert_eq!(release.reactions, None);
    }

    #[test]
    fn release_without_assets_gets_empty_list() {
        let release = Release::from_value(json!({
            "url": "https://api.github.com/repos/octocat/Hello-World/releases/2",
            "html_url": "https://github.com/octocat/Hello-World/releases/v1.0.1",
            "assets_url": "https://api.github.com/repos/octocat/Hello-World/releases/2/assets",
            "upload_url": "https://uploads.github.com/repos/octocat/Hello-World/releases/2/assets",
            "id": 2,
            "node_id": "MDc6UmVsZWFzZTI=",
            "tag_name": "v1.0.1",
            "target_commitish": "master",
            "draft": true,
            "prerelease": false,
            "created_at": "2013-03-01T10:00:00Z",
        }))
        .unwrap();

        assert!(release.assets.is_empty());
        assert_eq!(release.published_at, None);
        assert_eq!(release.author, None);
    }
}
