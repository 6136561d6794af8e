//! Order history filtering
//!
//! The history list can be narrowed by month (from the month selector) and by
//! a single day (from the calendar). Both filters apply together.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::snapshot::OrderSnapshot;
use crate::domain::validation_constants::history;
use crate::domain::{MonthKey, MonthKeyError, Order};

/// Value of the month selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MonthSelector {
    #[default]
    All,
    Month(MonthKey),
}

impl MonthSelector {
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Month(month) => month.contains(date),
        }
    }
}

impl fmt::Display for MonthSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(history::ALL_MONTHS),
            Self::Month(month) => fmt::Display::fmt(month, f),
        }
    }
}

impl FromStr for MonthSelector {
    type Err = MonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == history::ALL_MONTHS {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Month)
        }
    }
}

impl TryFrom<String> for MonthSelector {
    type Error = MonthKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthSelector> for String {
    fn from(value: MonthSelector) -> Self {
        value.to_string()
    }
}

impl From<MonthKey> for MonthSelector {
    fn from(value: MonthKey) -> Self {
        Self::Month(value)
    }
}

/// Month and day filters for the history list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryFilter {
    pub month: MonthSelector,
    pub selected_date: Option<NaiveDate>,
}

impl HistoryFilter {
    pub fn matches(&self, order: &Order) -> bool {
        self.month.matches(order.date) && self.selected_date.is_none_or(|date| order.date == date)
    }

    /// Orders passing both filters, newest first
    pub fn apply<'a>(&self, orders: &'a OrderSnapshot) -> Vec<&'a Order> {
        orders.iter().filter(|order| self.matches(order)).collect()
    }

    /// Choose a month; the day selection is cleared
    ///
    /// Returns the month the calendar should jump to, if any.
    pub fn select_month(&mut self, selector: MonthSelector) -> Option<MonthKey> {
        self.month = selector;
        self.selected_date = None;
        match selector {
            MonthSelector::All => None,
            MonthSelector::Month(month) => Some(month),
        }
    }

    /// Select `date`, or clear the selection when it is already selected
    pub fn toggle_date(&mut self, date: NaiveDate) {
        self.selected_date = if self.selected_date == Some(date) {
            None
        } else {
            Some(date)
        };
    }

    pub fn clear_date(&mut self) {
        self.selected_date = None;
    }
}

/// Months that have at least one order, most recent first
pub fn available_months(orders: &OrderSnapshot) -> Vec<MonthKey> {
    let months: BTreeSet<MonthKey> = orders.iter().map(Order::month).collect();
    months.into_iter().rev().collect()
}

/// Orders registered for `today`, newest first
pub fn today_orders(orders: &OrderSnapshot, today: NaiveDate) -> Vec<&Order> {
    orders.iter().filter(|order| order.date == today).collect()
}
