//! Application services and business logic orchestration
//!
//! This module contains the services that coordinate the pure views with the
//! external record stores: draft composition, roster maintenance and the
//! background view refresher.

pub mod app;
pub mod clock;
pub mod composer;
pub mod identity;
pub mod record_store;
pub mod refresher;
pub mod roster;

pub use app::Application;
pub use clock::{Clock, FixedClock, SystemClock};
pub use composer::{OrderComposer, OrderDraft};
pub use identity::{AnonymousIdentity, IdentityProvider, StaticIdentity};
pub use record_store::{MemberStore, OrderStore, RecordStore};
pub use refresher::{ViewRefresher, ViewsReceiver};
pub use roster::{add_members, parse_member_names, remove_member};
