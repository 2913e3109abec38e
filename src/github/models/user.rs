//! User account details: SSH keys and email addresses.

use chrono::{DateTime, Utc};

use crate::model::macros::model;

model! {
    /// A public SSH key of a user.
    pub struct SshPublicKey {
        pub id: u64,
        pub key: String,
    }
}

model! {
    /// Extended details of a public SSH key.
    pub struct SshPublicKeyExtended {
        pub id: u64,
        pub key: String,
        pub url: String,
        pub title: String,
        pub created_at: DateTime<Utc>,
        pub verified: bool,
        pub read_only: bool,
    }
}

model! {
    /// An email address stored for a user.
    pub struct EmailInformation {
        pub email: String,
        /// Whether this is the account's primary address.
        pub primary: bool,
        pub verified: bool,
        // the upstream schema leaves the possible values open, so this
        // stays a plain string instead of an enumeration
        pub visibility: Option<String>,
    }
}
