//! Domain types for the drink ledger
//!
//! This module contains the records exchanged with the external stores and the
//! value types they are built from, following type-driven development
//! principles: names, times and ids are validated once at the boundary.

pub mod cups;
pub mod identifiers;
pub mod member;
pub mod month;
pub mod order;
pub mod record;
pub mod types;
pub mod validation_constants;

pub use cups::*;
pub use identifiers::*;
pub use member::*;
pub use month::*;
pub use order::*;
pub use record::*;
pub use types::*;
