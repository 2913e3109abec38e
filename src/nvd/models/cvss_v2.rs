//! CVSS version 2 scoring data.

use crate::model::macros::{model, str_enum};

str_enum! {
    pub enum Severity {
        Low = "LOW",
        Medium = "MEDIUM",
        High = "HIGH",
    }
}

str_enum! {
    pub enum AccessVector {
        Network = "NETWORK",
        AdjacentNetwork = "ADJACENT_NETWORK",
        Local = "LOCAL",
    }
}

str_enum! {
    pub enum AccessComplexity {
        High = "HIGH",
        Medium = "MEDIUM",
        Low = "LOW",
    }
}

str_enum! {
    pub enum Authentication {
        Multiple = "MULTIPLE",
        Single = "SINGLE",
        None = "NONE",
    }
}

str_enum! {
    pub enum Impact {
        None = "NONE",
        Partial = "PARTIAL",
        Complete = "COMPLETE",
    }
}

str_enum! {
    pub enum Exploitability {
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
    pub enum ReportConfidence {
        Unconfirmed = "UNCONFIRMED",
        Uncorroborated = "UNCORROBORATED",
        Confirmed = "CONFIRMED",
        NotDefined = "NOT_DEFINED",
    }
}

str_enum! {
    pub enum CollateralDamagePotential {
        None = "NONE",
        Low = "LOW",
        LowMedium = "LOW_MEDIUM",
        MediumHigh = "MEDIUM_HIGH",
        High = "HIGH",
        NotDefined = "NOT_DEFINED",
    }
}

str_enum! {
    pub enum TargetDistribution {
        None = "NONE",
        Low = "LOW",
        Medium = "MEDIUM",
        High = "HIGH",
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
    /// Base, temporal and environmental CVSSv2 vector components.
    pub struct CvssData {
        pub version: String,
        pub vector_string: String,
        pub base_score: f64,
        pub access_vector: Option<AccessVector>,
        pub access_complexity: Option<AccessComplexity>,
        pub authentication: Option<Authentication>,
        pub confidentiality_impact: Option<Impact>,
        pub integrity_impact: Option<Impact>,
        pub availability_impact: Option<Impact>,
        pub exploitability: Option<Exploitability>,
        pub remediation_level: Option<RemediationLevel>,
        pub report_confidence: Option<ReportConfidence>,
        pub temporal_score: Option<f64>,
        pub collateral_damage_potential: Option<CollateralDamagePotential>,
        pub target_distribution: Option<TargetDistribution>,
        pub confidentiality_requirement: Option<Requirement>,
        pub integrity_requirement: Option<Requirement>,
        pub availability_requirement: Option<Requirement>,
        pub environmental_score: Option<f64>,
    }
}
