//! Dependabot security alerts.

use chrono::{DateTime, Utc};

use crate::github::models::base::User;
use crate::github::models::organization::Repository;
use crate::model::macros::{model, str_enum};

str_enum! {
    /// Property by which alert listings are sorted.
    pub enum AlertSort {
        Created = "created",
        Updated = "updated",
    }
}

str_enum! {
    pub enum AlertState {
        AutoDismissed = "auto_dismissed",
        Dismissed = "dismissed",
        Fixed = "fixed",
        Open = "open",
    }
}

str_enum! {
    pub enum DismissedReason {
        FixStarted = "fix_started",
        Inaccurate = "inaccurate",
        NoBandwidth = "no_bandwidth",
        NotUsed = "not_used",
        TolerableRisk = "tolerable_risk",
    }
}

str_enum! {
    /// Execution scope of the vulnerable dependency.
    pub enum DependencyScope {
        Development = "development",
        Runtime = "runtime",
    }
}

str_enum! {
    pub enum Severity {
        Low = "low",
        Medium = "medium",
        High = "high",
        Critical = "critical",
    }
}

str_enum! {
    pub enum IdentifierType {
        Cve = "CVE",
        Ghsa = "GHSA",
    }
}

model! {
    pub struct VulnerablePackage {
        pub ecosystem: String,
        pub name: String,
    }
}

model! {
    pub struct PatchedVersion {
        pub identifier: String,
    }
}

model! {
    /// One vulnerable version range of an advisory.
    pub struct Vulnerability {
        pub package: VulnerablePackage,
        pub severity: Severity,
        pub vulnerable_version_range: String,
        pub first_patched_version: Option<PatchedVersion>,
    }
}

model! {
    /// The dependency an alert was raised for.
    pub struct Dependency {
        pub package: VulnerablePackage,
        pub manifest_path: String,
        pub scope: Option<DependencyScope>,
    }
}

model! {
    /// CVSS scoring attached to an advisory.
    pub struct Cvss {
        pub score: f64,
        pub vector_string: Option<String>,
    }
}

model! {
    pub struct Cwe {
        pub cwe_id: String,
        pub name: String,
    }
}

model! {
    pub struct Identifier {
        pub r#type: IdentifierType,
        pub value: String,
    }
}

model! {
    pub struct Reference {
        pub url: String,
    }
}

model! {
    /// The security advisory backing a Dependabot alert.
    pub struct SecurityAdvisory {
        pub ghsa_id: String,
        pub summary: String,
        pub description: String,
        pub vulnerabilities: Vec<Vulnerability>,
        pub severity: Severity,
        pub cvss: Cvss,
        pub cwes: Vec<Cwe>,
        pub identifiers: Vec<Identifier>,
        pub references: Vec<Reference>,
        pub published_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
        pub cve_id: Option<String>,
        pub withdrawn_at: Option<DateTime<Utc>>,
    }
}

model! {
    /// A Dependabot security alert.
    pub struct DependabotAlert {
        pub number: u64,
        pub state: AlertState,
        pub dependency: Dependency,
        pub security_advisory: SecurityAdvisory,
        pub security_vulnerability: Vulnerability,
        pub url: String,
        pub html_url: String,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
        pub repository: Option<Repository>,
        pub dismissed_at: Option<DateTime<Utc>>,
        pub dismissed_by: Option<User>,
        pub dismissed_reason: Option<DismissedReason>,
        pub dismissed_comment: Option<String>,
        pub fixed_at: Option<DateTime<Utc>>,
        pub auto_dismissed_at: Option<DateTime<Utc>>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vulnerability_payload() -> serde_json::Value {
        json!({
            "package": {"ecosystem": "pip", "name": "django"},
            "severity": "high",
            "vulnerable_version_range": ">= 2.0.0, < 2.0.2",
            "first_patched_version": {"identifier": "2.0.2"},
        })
    }

    #[test]
    fn dependabot_alert_from_payload() {
        let alert = DependabotAlert::from_value(json!({
            "number": 2,
            "state": "dismissed",
            "dependency": {
                "package": {"ecosystem": "pip", "name": "django"},
                "manifest_path": "path/to/requirements.txt",
                "scope": "runtime",
            },
            "security_advisory": {
                "ghsa_id": "GHSA-rf4j-j272-fj86",
                "cve_id": "CVE-2018-6188",
                "summary": "Django allows remote attackers to obtain potentially sensitive information",
                "description": "django.contrib.auth.forms.AuthenticationForm in Django allows remote attackers.",
                "vulnerabilities": [vulnerability_payload()],
                "severity": "high",
                "cvss": {
                    "vector_string": "CVSS:3.0/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:N/A:N",
                    "score": 7.5,
                },
                "cwes": [
                    {"cwe_id": "CWE-200", "name": "Exposure of Sensitive Information to an Unauthorized Actor"},
                ],
                "identifiers": [
                    {"type": "GHSA", "value": "GHSA-rf4j-j272-fj86"},
                    {"type": "CVE", "value": "CVE-2018-6188"},
                ],
                "references": [
                    {"url": "https://nvd.nist.gov/vuln/detail/CVE-2018-6188"},
                ],
                "published_at": "2018-10-03T21:13:54Z",
                "updated_at": "2022-04-26T18:35:37Z",
                "withdrawn_at": null,
            },
            "security_vulnerability": vulnerability_payload(),
            "url": "https://api.github.com/repos/octo-org/octo-repo/dependabot/alerts/2",
            "html_url": "https://github.com/octo-org/octo-repo/security/dependabot/2",
            "created_at": "2022-06-15T07:43:03Z",
            "updated_at": "2022-08-23T14:29:47Z",
            "dismissed_at": "2022-08-23T14:29:47Z",
            "dismissed_by": crate::github::models::user_payload_for_tests(),
            "dismissed_reason": "tolerable_risk",
            "dismissed_comment": "This alert is accurate but we use a sanitizer.",
            "fixed_at": null,
        }))
        .unwrap();

        assert_eq!(alert.state, AlertState::Dismissed);
        assert_eq!(alert.dependency.scope, Some(DependencyScope::Runtime));
        assert_eq!(alert.dismissed_reason, Some(DismissedReason::TolerableRisk));
        let advisory = &alert.security_advisory;
        assert_eq!(advisory.cvss.score, 7.5);
        assert_eq!(advisory.identifiers[0].r#type, IdentifierType::Ghsa);
        assert_eq!(advisory.cwes[0].cwe_id, "CWE-200");
        assert_eq!(advisory.withdrawn_at, None);
        assert_eq!(
            alert.security_vulnerability.first_patched_version,
            Some(PatchedVersion {
                identifier: "2.0.2".to_string(),
                extra: Default::default(),
            })
        );
        assert_eq!(alert.fixed_at, None);
        assert_eq!(alert.repository, None);
    }
}
