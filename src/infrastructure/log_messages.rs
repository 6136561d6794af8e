//! Log message constants
//!
//! This module centralizes the log messages used throughout the crate to keep
//! wording consistent between components.

/// Application startup and lifecycle messages
pub mod application {
    pub const STARTING: &str = "Starting drink tally";
    pub const STARTED_SUCCESSFULLY: &str = "Drink tally started successfully";
    pub const SEEDING_STORES: &str = "Seeding in-memory stores";
    pub const LEDGER_SUMMARY: &str = "Ledger summary";
    pub const TOP_MEMBER: &str = "Leaderboard entry";
    pub const TOP_STORE: &str = "Top store";
}

/// Record store messages
pub mod store {
    pub const RECORD_CREATED: &str = "Record created";
    pub const RECORD_DELETED: &str = "Record deleted";
    pub const UNAVAILABLE: &str = "store is not accepting mutations";
    pub const MUTATION_FAILED: &str = "Store mutation did not take effect";
}

/// Order composer messages
pub mod composer {
    pub const INCOMPLETE_DRAFT: &str = "Draft needs a store and at least one participant";
    pub const ORDER_SUBMITTED: &str = "Order submitted";
    pub const ORDER_REJECTED: &str = "Order store rejected the draft; keeping it for retry";
}

/// Member roster messages
pub mod roster {
    pub const SKIPPED_NAME: &str = "Skipping name that is not a valid member name";
    pub const MEMBERS_ADDED: &str = "Members added";
    pub const MEMBER_REMOVED: &str = "Member removed";
}

/// View refresher messages
pub mod refresher {
    pub const STARTED: &str = "View refresher started";
    pub const RECOMPUTED: &str = "Views recomputed";
    pub const UPSTREAM_CLOSED: &str = "Upstream snapshot channel closed; view refresher stopping";
}

/// Configuration messages
pub mod configuration {
    pub const LOADING_SEED: &str = "Loading seed document";
    pub const SKIPPED_RECORD: &str = "Skipping seed record that does not fit the ledger";
    pub const CONFIG_LOADED: &str = "Configuration loaded successfully";
}
