//! CVSS version 3.0 and 3.1 scoring data.

use crate::model::macros::{model, str_enum};

str_enum! {
    pub enum Severity {
        None = "NONE",
        Low = "LOW",
        Medium = "MEDIUM",
        High = "HIGH",
        Critical = "CRITICAL",
    }
}

str_enum! {
    pub enum AttackVector {
        Network = "NETWORK",
        AdjacentNetwork = "ADJACENT_NETWORK",
        Local = "LOCAL",
        Physical = "PHYSICAL",
    }
}

str_enum! {
    pub enum ModifiedAttackVector {
        Network = "NETWORK",
        AdjacentNetwork = "ADJACENT_NETWORK",
        Local = "LOCAL",
        Physical = "PHYSICAL",
        NotDefined = "NOT_DEFINED",
    }
}

str_enum! {
    pub enum AttackComplexity {
        High = "HIGH",
        Low = "LOW",
    }
}

str_enum! {
    pub enum ModifiedAttackComplexity {
        High = "HIGH",
        Low = "LOW",
        NotDefined = "NOT_DEFINED",
    }
}

str_enum! {
    pub enum PrivilegesRequired {
        High = "HIGH",
        Low = "LOW",
        None = "NONE",
    }
}

str_enum! {
    pub enum ModifiedPrivilegesRequired {
        High = "HIGH",
        Low = "LOW",
        None = "NONE",
        NotDefined = "NOT_DEFINED",
    }
}

str_enum! {
    pub enum UserInteraction {
        None = "NONE",
        Required = "REQUIRED",
    }
}

str_enum! {
    pub enum ModifiedUserInteraction {
        None = "NONE",
        Required = "REQUIRED",
        NotDefined = "NOT_DEFINED",
    }
}

str_enum! {
    pub enum Scope {
        Unchanged = "UNCHANGED",
        Changed = "CHANGED",
    }
}

str_enum! {
    pub enum ModifiedScope {
        Unchanged = "UNCHANGED",
        Changed = "CHANGED",
        NotDefined = "NOT_DEFINED",
    }
}

str_enum! {
    pub enum Impact {
        None = "NONE",
        Low = "LOW",
        High = "HIGH",
    }
}

str_enum! {
    pub enum ModifiedImpact {
        None = "NONE",
        Low = "LOW",
        High = "HIGH",
        NotDefined = "NOT_DEFINED",
    }
}

str_enum! {
    pub enum ExploitCodeMaturity {
        Unproven = "UNPROVEN",
        ProofOfConcept = "PROOF_OF_CONCEPT",
        Functional = "FUNCTIONAL",
        High = "HIGH",
        NotDefined = "NOT_DEFINED",
    }
}

str_enum! {
    pub enum RemediationLevel {
        OfficialFix = "OFFICIAL_FIX",
        TemporaryFix = "TEMPORARY_FIX",
        Workaround = "WORKAROUND",
        Unavailable = "UNAVAILABLE",
        NotDefined = "NOT_DEFINED",
    }
}

str_enum! {
    pub enum Confidence {
        Unknown = "UNKNOWN",
        Reasonable = "REASONABLE",
        Confirmed = "CONFIRMED",
        NotDefined = "NOT_DEFINED",
    }
}

str_enum! {
    pub enum Requirement {
        Low = "LOW",
        Medium = "MEDIUM",
        High = "HIGH",
        NotDefined = "NOT_DEFINED",
    }
}

model! {
    /// Base, temporal and environmental CVSSv3 vector components.
    pub struct CvssData {
        pub version: String,
        pub vector_string: String,
        pub base_score: f64,
        pub base_severity: Severity,
        pub attack_vector: Option<AttackVector>,
        pub attack_complexity: Option<AttackComplexity>,
        pub privileges_required: Option<PrivilegesRequired>,
        pub user_interaction: Option<UserInteraction>,
        pub scope: Option<Scope>,
        pub confidentiality_impact: Option<Impact>,
        pub integrity_impact: Option<Impact>,
        pub availability_impact: Option<Impact>,
        pub exploit_code_maturity: Option<ExploitCodeMaturity>,
        pub remediation_level: Option<RemediationLevel>,
        pub report_confidence: Option<Confidence>,
        pub temporal_score: Option<f64>,
        pub temporal_severity: Option<Severity>,
        pub confidentiality_requirement: Option<Requirement>,
        pub integrity_requirement: Option<Requirement>,
        pub availability_requirement: Option<Requirement>,
        pub modified_attack_vector: Option<ModifiedAttackVector>,
        pub modified_attack_complexity: Option<ModifiedAttackComplexity>,
        pub modified_privileges_required: Option<ModifiedPrivilegesRequired>,
        pub modified_user_interaction: Option<ModifiedUserInteraction>,
        pub modified_scope: Option<ModifiedScope>,
        pub modified_confidentiality_impact: Option<ModifiedImpact>,
        pub modified_integrity_impact: Option<ModifiedImpact>,
        pub modified_availability_impact: Option<ModifiedImpact>,
        pub environmental_score: Option<f64>,
        pub environmental_severity: Option<Severity>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cvss_data_from_payload() {
        let data = CvssData::from_value(json!({
            "version": "3.1",
            "vector_string": "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H",
            "base_score": 9.8,
            "base_severity": "CRITICAL",
            "attack_vector": "NETWORK",
            "attack_complexity": "LOW",
            "privileges_required": "NONE",
            "user_interaction": "NONE",
            "scope": "UNCHANGED",
            "confidentiality_impact": "HIGH",
            "integrity_impact": "HIGH",
            "availability_impact": "HIGH",
        }))
        .unwrap();

        assert_eq!(data.base_severity, Severity::Critical);
        assert_eq!(data.attack_vector, Some(AttackVector::Network));
        assert_eq!(data.scope, Some(Scope::Unchanged));
        assert_eq!(data.modified_scope, None);
        assert_eq!(data.environmental_score, None);
    }

    #[test]
    fn missing_base_severity_is_an_error() {
        let err = CvssData::from_value(json!({
            "version": "3.1",
            "vector_string": "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:N/I:N/A:N",
            "base_score": 0.0,
        }))
        .unwrap_err();

        assert!(err.to_string().contains("base_severity"));
    }
}
