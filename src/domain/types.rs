//! Validated text types for ledger records
//!
//! This module provides newtypes for the text fields of orders and members so
//! that blank names never make it past the record boundary.

use nutype::nutype;
#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};

use super::validation_constants::order_time;

/// Name of the shop an order was placed with
///
/// Matched exactly (case and spacing preserved) when counting store
/// frequency; only the suggestion index compares case-insensitively.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 200),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct StoreName(String);

/// Display name of a member
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 100),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct MemberName(String);

/// Wall-clock time an order is registered for, `HH:MM`
#[nutype(
    sanitize(trim),
    validate(regex = r"^([01][0-9]|2[0-3]):[0-5][0-9]$"),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct OrderTime(String);

impl OrderTime {
    /// The fixed registration time used when nothing else is configured
    pub fn noon() -> Self {
        Self::try_new(order_time::DEFAULT.to_string())
            .unwrap_or_else(|_| unreachable!("the default order time is well formed"))
    }
}

impl Default for OrderTime {
    fn default() -> Self {
        Self::noon()
    }
}

/// Error message carried by [`crate::Error`]
#[nutype(
    sanitize(trim),
    derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsRef, Display)
)]
pub struct ErrorMessage(String);

/// Name of an input field that failed validation
#[nutype(
    sanitize(trim),
    derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsRef, Display)
)]
pub struct FieldName(String);

/// Description of a resource that could not be found
#[nutype(
    sanitize(trim),
    derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsRef, Display)
)]
pub struct ResourceId(String);
