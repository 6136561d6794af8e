//! In-memory record store
//!
//! Stands in for the document store in tests, benches and the demo binary.
//! Every mutation publishes a fresh snapshot on a watch channel, so
//! subscribers always see the whole collection rather than deltas.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, instrument};

use crate::application::record_store::RecordStore;
use crate::domain::{RecordId, Snapshot, StoredRecord};
use crate::error::{Error, Result};
use crate::infrastructure::log_messages::store as log;

/// A collection held in process memory
pub struct InMemoryRecordStore<R: StoredRecord> {
    records: Mutex<Vec<R>>,
    snapshots: watch::Sender<Snapshot<R>>,
    rejecting: AtomicBool,
}

impl<R: StoredRecord> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: StoredRecord> InMemoryRecordStore<R> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// A store that already holds `records`
    pub fn with_records(records: Vec<R>) -> Self {
        let (snapshots, _) = watch::channel(Arc::new(records.clone()));
        Self {
            records: Mutex::new(records),
            snapshots,
            rejecting: AtomicBool::new(false),
        }
    }

    /// The collection as last published
    pub fn snapshot(&self) -> Snapshot<R> {
        self.snapshots.borrow().clone()
    }

    /// Make every following mutation fail, as an unavailable store would
    pub fn set_rejecting(&self, rejecting: bool) {
        self.rejecting.store(rejecting, Ordering::SeqCst);
    }

    /// Insert records published by someone else, e.g. another client
    pub fn insert_external(&self, record: R) {
        let mut records = self.records.lock();
        records.push(record);
        self.publish(&records);
    }

    fn check_available(&self) -> Result<()> {
        if self.rejecting.load(Ordering::SeqCst) {
            Err(Error::store(R::COLLECTION, log::UNAVAILABLE))
        } else {
            Ok(())
        }
    }

    fn publish(&self, records: &[R]) {
        self.snapshots.send_replace(Arc::new(records.to_vec()));
    }
}

#[async_trait]
impl<R: StoredRecord> RecordStore<R> for InMemoryRecordStore<R> {
    fn subscribe(&self) -> watch::Receiver<Snapshot<R>> {
        self.snapshots.subscribe()
    }

    #[instrument(skip_all, fields(collection = R::COLLECTION))]
    async fn create(&self, draft: R::Draft) -> Result<R::Id> {
        self.check_available()?;

        let id = R::Id::generate();
        let mut records = self.records.lock();
        records.push(R::from_draft(id.clone(), draft));
        self.publish(&records);

        debug!(%id, "{}", log::RECORD_CREATED);
        Ok(id)
    }

    #[instrument(skip_all, fields(collection = R::COLLECTION, %id))]
    async fn delete(&self, id: &R::Id) -> Result<()> {
        self.check_available()?;

        let mut records = self.records.lock();
        let position = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| Error::not_found(format!("{}/{id}", R::COLLECTION)))?;
        records.remove(position);
        self.publish(&records);

        debug!("{}", log::RECORD_DELETED);
        Ok(())
    }
}
