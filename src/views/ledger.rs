//! Complete set of derived views
//!
//! [`LedgerViews::derive`] is the single recomputation step: given the current
//! snapshots and view inputs it rebuilds every read model from scratch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::{calendar_cells, CalendarCell};
use super::history::{available_months, today_orders, HistoryFilter, MonthSelector};
use super::leaderboard::{Leaderboard, LeaderboardSettings};
use super::snapshot::{MemberSnapshot, OrderSnapshot};
use super::store_suggestions::store_suggestions;
use crate::domain::{Member, MonthKey, Order, StoreName};

/// User-controlled inputs the views depend on besides the snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewInputs {
    pub store_search: String,
    pub history: HistoryFilter,
    pub calendar_month: MonthKey,
    pub today: NaiveDate,
}

impl ViewInputs {
    /// Inputs for a fresh session: no filters, calendar on today's month
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            store_search: String::new(),
            history: HistoryFilter::default(),
            calendar_month: MonthKey::of(today),
            today,
        }
    }

    /// Choose a month in the selector; the calendar follows a concrete month
    pub fn select_month(&mut self, selector: MonthSelector) {
        if let Some(month) = self.history.select_month(selector) {
            self.calendar_month = month;
        }
    }

    /// Click a calendar day
    pub fn toggle_date(&mut self, date: NaiveDate) {
        self.history.toggle_date(date);
    }

    pub fn clear_date(&mut self) {
        self.history.clear_date();
    }

    /// Page the calendar by whole months
    pub fn shift_calendar(&mut self, offset: i32) {
        self.calendar_month = self.calendar_month.shift(offset);
    }
}

/// Every read model derived from one pair of snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerViews {
    pub orders: Vec<Order>,
    pub members: Vec<Member>,
    pub store_suggestions: Vec<StoreName>,
    pub available_months: Vec<MonthKey>,
    pub calendar_month: MonthKey,
    pub calendar: Vec<CalendarCell>,
    pub history: Vec<Order>,
    pub today: Vec<Order>,
    pub leaderboard: Leaderboard,
}

impl LedgerViews {
    pub fn derive(
        orders: &OrderSnapshot,
        members: &MemberSnapshot,
        inputs: &ViewInputs,
        settings: &LeaderboardSettings,
    ) -> Self {
        Self {
            orders: orders.as_slice().to_vec(),
            members: members.as_slice().to_vec(),
            store_suggestions: store_suggestions(orders, &inputs.store_search),
            available_months: available_months(orders),
            calendar_month: inputs.calendar_month,
            calendar: calendar_cells(inputs.calendar_month, orders),
            history: inputs.history.apply(orders).into_iter().cloned().collect(),
            today: today_orders(orders, inputs.today).into_iter().cloned().collect(),
            leaderboard: Leaderboard::compute(orders, &members.directory(), settings),
        }
    }

    /// Views over empty collections
    pub fn empty(inputs: &ViewInputs, settings: &LeaderboardSettings) -> Self {
        Self::derive(
            &OrderSnapshot::default(),
            &MemberSnapshot::default(),
            inputs,
            settings,
        )
    }
}
