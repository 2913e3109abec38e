//! Billing usage for Actions, Packages, and shared storage.

use crate::model::macros::model;

model! {
    /// Actions minutes split by runner operating system.
    ///
    /// The upstream payload uses uppercase OS keys.
    pub struct ActionsMinutesUsedBreakdown {
        #[allow(non_snake_case)]
        pub UBUNTU: Option<u64>,
        #[allow(non_snake_case)]
        pub MACOS: Option<u64>,
        #[allow(non_snake_case)]
        pub WINDOWS: Option<u64>,
        pub total: Option<u64>,
    }
}

model! {
    /// Billing information for GitHub Actions usage.
    pub struct ActionsBilling {
        /// Sum of free and paid minutes used.
        pub total_minutes_used: u64,
        pub total_paid_minutes_used: u64,
        /// Free minutes available in the current cycle.
        pub included_minutes: u64,
        pub minutes_used_breakdown: ActionsMinutesUsedBreakdown,
    }
}

model! {
    /// Billing information for GitHub Packages bandwidth.
    pub struct PackagesBilling {
        pub total_gigabytes_bandwidth_used: u64,
        pub total_paid_gigabytes_bandwidth_used: u64,
        pub included_gigabytes_bandwidth: u64,
    }
}

model! {
    /// Billing information for shared storage.
    pub struct StorageBilling {
        pub days_left_in_billing_cycle: u64,
        pub estimated_paid_storage_for_month: u64,
        pub estimated_storage_for_month: u64,
    }
}
