//! Validation constants for domain types
//!
//! This module centralizes the limits and defaults used throughout the domain
//! layer so that configuration defaults and tests agree on them.

/// Order time constants
pub mod order_time {
    /// Registration time stamped on every new draft
    pub const DEFAULT: &str = "12:00";
}

/// Cup count constants
pub mod cups {
    /// Smallest cup count a participant can hold
    pub const DEFAULT_MIN: u32 = 1;

    /// Largest cup count in the constrained policy
    pub const DEFAULT_MAX: u32 = 3;

    /// Cup count given to a participant when first added to a draft
    pub const NEW_PARTICIPANT: u32 = 1;

    /// Configured maximum meaning "no upper bound"
    pub const UNBOUNDED_MAX: u32 = 0;
}

/// Leaderboard constants
pub mod leaderboard {
    /// Number of stores kept in the frequency ranking
    pub const TOP_STORE_LIMIT: usize = 5;

    /// Display label for participants whose member record no longer exists
    pub const UNKNOWN_MEMBER_LABEL: &str = "unknown member";
}

/// History filter constants
pub mod history {
    /// Month selector value that disables month filtering
    pub const ALL_MONTHS: &str = "all";
}

/// Batch member intake constants
pub mod roster {
    /// Runs of whitespace, ASCII commas and full-width commas separate names
    pub const NAME_SEPARATOR_PATTERN: &str = r"[\s,，]+";
}
