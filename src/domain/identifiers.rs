//! Record identifiers
//!
//! Identifiers are opaque to the ledger: the record stores assign them and the
//! views only compare them. Stores that generate their own ids use UUID v7 so
//! freshly created records sort by creation time.

use nutype::nutype;
use uuid::Uuid;

/// Identifier of an order, assigned by the order store
#[nutype(
    sanitize(trim),
    validate(not_empty),
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
        Display,
        AsRef
    )
)]
pub struct OrderId(String);

/// Identifier of a member, assigned by the member store
#[nutype(
    sanitize(trim),
    validate(not_empty),
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
        Display,
        AsRef
    )
)]
pub struct MemberId(String);

/// Opaque identity of whoever created an order
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        Display,
        AsRef
    )
)]
pub struct CreatorId(String);

/// An identifier a store can mint for a new record
pub trait RecordId:
    Clone + Eq + std::hash::Hash + std::fmt::Display + std::fmt::Debug + Send + Sync + 'static
{
    /// Generate a fresh, time-ordered identifier
    fn generate() -> Self;
}

/// Build a non-empty identifier string from a fresh UUID v7
fn fresh_uuid() -> String {
    Uuid::now_v7().simple().to_string()
}

impl RecordId for OrderId {
    fn generate() -> Self {
        Self::try_new(fresh_uuid()).unwrap_or_else(|_| unreachable!("uuid text is never empty"))
    }
}

impl RecordId for MemberId {
    fn generate() -> Self {
        Self::try_new(fresh_uuid()).unwrap_or_else(|_| unreachable!("uuid text is never empty"))
    }
}

impl CreatorId {
    /// Generate an anonymous creator identity
    pub fn anonymous() -> Self {
        Self::try_new(format!("anon-{}", fresh_uuid()))
            .unwrap_or_else(|_| unreachable!("prefixed uuid text is never empty"))
    }
}
