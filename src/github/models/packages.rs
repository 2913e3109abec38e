//! Packages published to the platform registry.

use crate::github::models::base::User;
use crate::model::macros::{model, str_enum};

str_enum! {
    /// Registry ecosystem a package belongs to.
    pub enum PackageType {
        Container = "container",
        Docker = "docker",
        Maven = "maven",
        Npm = "npm",
        Nuget = "nuget",
        Rubygems = "rubygems",
    }
}

str_enum! {
    pub enum PackageVisibility {
        Public = "public",
        Private = "private",
    }
}

model! {
    /// A package owned by a user or organization.
    pub struct Package {
        pub id: u64,
        pub name: String,
        pub package_type: PackageType,
        pub owner: User,
        pub version_count: u64,
        pub visibility: PackageVisibility,
        pub url: String,
        pub tags: Vec<String>,
        pub created_at: String,
        pub updated_at: String,
        pub html_url: String,
    }
}

model! {
    /// A single published version of a package.
    pub struct PackageVersion {
        pub id: u64,
        pub name: String,
        pub url: String,
        pub package_html_url: String,
        pub created_at: String,
        pub updated_at: String,
        pub html_url: String,
        pub package_type: PackageType,
        pub tags: Vec<String>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn package_from_payload() {
        let package = Package::from_value(json!({
            "id": 197,
            "name": "hello_docker",
            "package_type": "container",
            "owner": crate::github::models::user_payload_for_tests(),
            "version_count": 1,
            "visibility": "private",
            "url": "https://api.github.com/orgs/github/packages/container/hello_docker",
            "tags": [],
            "created_at": "2020-05-19T22:19:11Z",
            "updated_at": "2020-05-19T22:19:11Z",
            "html_url": "https://github.com/orgs/github/packages/container/package/hello_docker",
        }))
        .unwrap();

        assert_eq!(package.package_type, PackageType::Container);
        assert_eq!(package.visibility, PackageVisibility::Private);
        assert!(package.tags.is_empty());
    }

    #[test]
    fn package_version_from_payload() {
        let version = PackageVersion::from_value(json!({
            "id": 245301,
            "name": "1.0.4",
            "url": "https://api.github.com/orgs/octo-org/packages/npm/hello-world-npm/versions/245301",
            "package_html_url": "https://github.com/octo-org/hello-world-npm/packages/43752",
            "created_at": "2019-11-05T22:49:04Z",
            "updated_at": "2019-11-05T22:49:04Z",
            "html_url": "https://github.com/octo-org/hello-world-npm/packages/43752?version=1.0.4",
            "package_type": "npm",
            "tags": ["latest"],
        }))
        .unwrap();

        assert_eq!(version.package_type, PackageType::Npm);
        assert_eq!(version.tags, vec!["latest"]);
    }
}
