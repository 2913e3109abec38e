//! CVE records as served by the vulnerability database API.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::macros::{model, str_enum};
use crate::nvd::models::cvss_v2::CvssData as CvssV2Data;
use crate::nvd::models::cvss_v3::CvssData as CvssV3Data;

str_enum! {
    /// Whether a metric was contributed by the primary source.
    pub enum CvssType {
        Primary = "Primary",
        Secondary = "Secondary",
    }
}

model! {
    /// A description in a specific language.
    pub struct Description {
        pub lang: String,
        pub value: String,
    }
}

model! {
    /// A CVSSv2 score contributed by one source.
    pub struct CvssV2Metric {
        pub source: String,
        pub r#type: CvssType,
        pub cvss_data: CvssV2Data,
        pub base_severity: Option<String>,
        pub exploitability_score: Option<f64>,
        pub impact_score: Option<f64>,
        pub ac_insuf_info: Option<bool>,
        pub obtain_all_privilege: Option<bool>,
        pub obtain_user_privilege: Option<bool>,
        pub obtain_other_privilege: Option<bool>,
        pub user_interaction_required: Option<bool>,
    }
}

model! {
    /// A CVSSv3.0 or v3.1 score contributed by one source.
    pub struct CvssV3Metric {
        pub source: String,
        pub r#type: CvssType,
        pub cvss_data: CvssV3Data,
        pub exploitability_score: Option<f64>,
        pub impact_score: Option<f64>,
    }
}

model! {
    /// All CVSS scores attached to a CVE, grouped by version.
    pub struct Metrics {
        pub cvss_metric_v31: Vec<CvssV3Metric>,
        pub cvss_metric_v30: Vec<CvssV3Metric>,
        pub cvss_metric_v2: Vec<CvssV2Metric>,
    }
}

model! {
    /// A link to additional information about a CVE.
    pub struct Reference {
        pub url: String,
        pub source: Option<String>,
        pub tags: Vec<String>,
    }
}

model! {
    /// A weakness classification contributed by one source.
    pub struct Weakness {
        pub source: String,
        pub r#type: String,
        pub description: Vec<Description>,
    }
}

model! {
    pub struct VendorComment {
        pub organization: String,
        pub comment: String,
        pub last_modified: DateTime<Utc>,
    }
}

str_enum! {
    pub enum Operator {
        And = "AND",
        Or = "OR",
    }
}

model! {
    /// A product match expression with an optional version range.
    pub struct CpeMatch {
        pub vulnerable: bool,
        pub criteria: String,
        pub match_criteria_id: String,
        pub version_start_excluding: Option<String>,
        pub version_start_including: Option<String>,
        pub version_end_excluding: Option<String>,
        pub version_end_including: Option<String>,
    }
}

model! {
    /// One node of a configuration expression.
    ///
    /// The upstream API requires a match list per node, but served data
    /// contains nodes without one, so it stays optional here.
    pub struct Node {
        pub operator: Operator,
        pub cpe_match: Option<Vec<CpeMatch>>,
        pub negate: Option<bool>,
    }
}

model! {
    /// A boolean combination of product matches a CVE applies to.
    pub struct Configuration {
        pub nodes: Vec<Node>,
        pub operator: Option<Operator>,
        pub negate: Option<bool>,
    }
}

model! {
    /// A full CVE record.
    pub struct Cve {
        pub id: String,
        pub published: DateTime<Utc>,
        pub last_modified: DateTime<Utc>,
        pub descriptions: Vec<Description>,
        pub references: Vec<Reference>,
        pub source_identifier: Option<String>,
        pub vuln_status: Option<String>,
        pub weaknesses: Vec<Weakness>,
        pub configurations: Vec<Configuration>,
        pub vendor_comments: Vec<VendorComment>,
        pub metrics: Option<Metrics>,
        pub evaluator_comment: Option<String>,
        pub evaluator_solution: Option<String>,
        pub evaluator_impact: Option<String>,
        pub cisa_exploit_add: Option<NaiveDate>,
        pub cisa_action_due: Option<NaiveDate>,
        pub cisa_required_action: Option<String>,
        pub cisa_vulnerability_name: Option<String>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    pub(crate) fn cve_payload() -> serde_json::Value {
        json!({
            "id": "CVE-2022-45536",
            "source_identifier": "cve@mitre.org",
            "published": "2022-11-22T21:15:11.103",
            "last_modified": "2022-11-23T16:02:07.367",
            "vuln_status": "Analyzed",
            "descriptions": [
                {
                    "lang": "en",
                    "value": "AeroCMS v0.0.1 was discovered to contain a SQL Injection vulnerability.",
                },
            ],
            "metrics": {
                "cvss_metric_v31": [
                    {
                        "source": "nvd@nist.gov",
                        "type": "Primary",
                        "cvss_data": {
                            "version": "3.1",
                            "vector_string": "CVSS:3.1/AV:N/AC:L/PR:H/UI:N/S:U/C:H/I:H/A:H",
                            "base_score": 7.2,
                            "base_severity": "HIGH",
                            "attack_vector": "NETWORK",
                            "attack_complexity": "LOW",
                            "privileges_required": "HIGH",
                            "user_interaction": "NONE",
                            "scope": "UNCHANGED",
                            "confidentiality_impact": "HIGH",
                            "integrity_impact": "HIGH",
                            "availability_impact": "HIGH",
                        },
                        "exploitability_score": 1.2,
                        "impact_score": 5.9,
                    },
                ],
            },
            "weaknesses": [
                {
                    "source": "nvd@nist.gov",
                    "type": "Primary",
                    "description": [{"lang": "en", "value": "CWE-89"}],
                },
            ],
            "configurations": [
                {
                    "nodes": [
                        {
                            "operator": "OR",
                            "negate": false,
                            "cpe_match": [
                                {
                                    "vulnerable": true,
                                    "criteria": "cpe:2.3:a:aerocms_project:aerocms:0.0.1:*:*:*:*:*:*:*",
                                    "match_criteria_id": "A942E6FE-B20C-4AE6-A2F9-559A0D9F4D0C",
                                },
                            ],
                        },
                    ],
                },
            ],
            "references": [
                {
                    "url": "https://github.com/MegaTKC/AeroCMS/issues/7",
                    "source": "cve@mitre.org",
                    "tags": ["Exploit", "Issue Tracking", "Third Party Advisory"],
                },
            ],
        })
    }

    #[test]
    fn cve_from_payload() {
        let cve = Cve::from_value(cve_payload()).unwrap();

        assert_eq!(cve.id, "CVE-2022-45536");
        assert_eq!(
            cve.published,
            Utc.with_ymd_and_hms(2022, 11, 22, 21, 15, 11).unwrap()
                + chrono::Duration::milliseconds(103)
        );
        assert_eq!(cve.vuln_status.as_deref(), Some("Analyzed"));
        let metrics = cve.metrics.unwrap();
        assert_eq!(metrics.cvss_metric_v31.len(), 1);
        assert!(metrics.cvss_metric_v30.is_empty());
        assert!(metrics.cvss_metric_v2.is_empty());
        let metric = &metrics.cvss_metric_v31[0];
        assert_eq!(metric.r#type, CvssType::Primary);
        assert_eq!(metric.cvss_data.base_score, 7.2);
        let matches = cve.configurations[0].nodes[0].cpe_match.as_ref().unwrap();
        assert!(matches[0].vulnerable);
        assert_eq!(matches[0].version_end_excluding, None);
        assert_eq!(cve.cisa_exploit_add, None);
    }

    #[test]
    fn cisa_dates_are_calendar_dates() {
        let mut payload = cve_payload();
        payload["cisa_exploit_add"] = json!("2022-03-25");
        payload["cisa_action_due"] = json!("2022-04-15");

        let cve = Cve::from_value(payload).unwrap();

        assert_eq!(
            cve.cisa_exploit_add,
            Some(NaiveDate::from_ymd_opt(2022, 3, 25).unwrap())
        );
        assert_eq!(
            cve.cisa_action_due,
            Some(NaiveDate::from_ymd_opt(2022, 4, 15).unwrap())
        );
    }
}
