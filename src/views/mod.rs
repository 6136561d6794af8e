//! Derived views over the order and member snapshots
//!
//! Every function here is a pure `snapshot -> view` transform with no retained
//! state, so views are recomputed in full whenever an input changes and can be
//! tested without a live store.

pub mod calendar;
pub mod history;
pub mod leaderboard;
pub mod ledger;
pub mod snapshot;
pub mod store_suggestions;

pub use calendar::{calendar_cells, CalendarCell, CalendarDay};
pub use history::{available_months, today_orders, HistoryFilter, MonthSelector};
pub use leaderboard::{
    Leaderboard, LeaderboardSettings, MemberStanding, ParticipationRate, StoreFrequency,
};
pub use ledger::{LedgerViews, ViewInputs};
pub use snapshot::{MemberDirectory, MemberSnapshot, OrderSnapshot};
pub use store_suggestions::store_suggestions;
