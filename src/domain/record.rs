//! Records held by the external collections
//!
//! Both collections are append/delete only: a record is created from a draft,
//! receives its id from the store, and is never edited in place.

use super::identifiers::RecordId;
use std::sync::Arc;

/// A record type stored in one of the external collections
pub trait StoredRecord: Clone + Send + Sync + 'static {
    /// Identifier assigned by the store
    type Id: RecordId;

    /// Fields supplied by the caller when creating the record
    type Draft: Send + 'static;

    /// Collection name, used in logs and errors
    const COLLECTION: &'static str;

    /// Combine a draft with the id the store assigned to it
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    fn id(&self) -> &Self::Id;
}

/// Immutable view of a whole collection at one instant
pub type Snapshot<R> = Arc<Vec<R>>;
