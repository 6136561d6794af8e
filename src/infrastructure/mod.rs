//! Infrastructure layer for the drink ledger
//!
//! This module contains implementations of the external collaborators the
//! ledger talks to, along with shared log message text.

pub mod log_messages;
pub mod memory_store;
pub mod seed;

pub use memory_store::InMemoryRecordStore;
pub use seed::SeedDocument;
