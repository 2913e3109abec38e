//! Git tags and their verification status.

use chrono::{DateTime, Utc};

use crate::model::macros::{model, str_enum};

str_enum! {
    /// A git object type.
    pub enum GitObjectType {
        Commit = "commit",
        Tree = "tree",
        Blob = "blob",
    }
}

model! {
    /// A git object referenced by a tag.
    pub struct GitObject {
        pub sha: String,
        pub r#type: GitObjectType,
        pub url: String,
    }
}

model! {
    /// The user who created a tag.
    pub struct Tagger {
        pub date: DateTime<Utc>,
        pub email: String,
        pub name: String,
    }
}

str_enum! {
    /// Why a signature verification ended in its state.
    pub enum VerificationReason {
        ExpiredKey = "expired_key",
        NotSigningKey = "not_signing_key",
        GpgverifyError = "gpgverify_error",
        GpgverifyUnavailable = "gpgverify_unavailable",
        Unsigned = "unsigned",
        UnknownSignatureType = "unknown_signature_type",
        NoUser = "no_user",
        UnverifiedEmail = "unverified_email",
        BadEmail = "bad_email",
        UnknownKey = "unknown_key",
        MalformedSignature = "malformed_signature",
        Invalid = "invalid",
        Valid = "valid",
    }
}

model! {
    /// Signature verification details of a tag.
    pub struct Verification {
        pub verified: bool,
        pub reason: VerificationReason,
        pub payload: Option<String>,
        pub signature: Option<String>,
    }
}

model! {
    /// An annotated git tag.
    pub struct Tag {
        pub node_id: String,
        pub tag: String,
        pub sha: String,
        pub url: String,
        pub message: String,
        pub tagger: Tagger,
        pub object: GitObject,
        pub verification: Option<Verification>,
    }
}
