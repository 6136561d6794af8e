//! Boundary with the external record stores
//!
//! The ledger never owns its data. Orders and members live in document
//! collections that publish whole-collection snapshots and accept create and
//! delete mutations. Mutations are not read-after-write consistent: a created
//! record becomes visible only when the store publishes its next snapshot.

use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::{Member, Order, Snapshot, StoredRecord};
use crate::error::Result;

/// A live, append/delete-only collection of records
#[async_trait]
pub trait RecordStore<R: StoredRecord>: Send + Sync {
    /// Receiver for the latest snapshot of the whole collection
    fn subscribe(&self) -> watch::Receiver<Snapshot<R>>;

    /// Persist a new record, returning the id the store assigned
    async fn create(&self, draft: R::Draft) -> Result<R::Id>;

    /// Remove one record
    async fn delete(&self, id: &R::Id) -> Result<()>;
}

/// The `orders` collection
pub type OrderStore = dyn RecordStore<Order>;

/// The `members` collection
pub type MemberStore = dyn RecordStore<Member>;
