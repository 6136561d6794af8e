//! Record builders for integration tests
//!
//! These builders make it easy to create orders and members with sensible
//! defaults while allowing customization for specific test scenarios.

#![allow(dead_code)]

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use drink_tally::domain::{
    CupValue, Member, MemberId, MemberName, Order, OrderId, OrderTime, StoreName,
};
use serde_json::Value;
use std::collections::BTreeMap;

pub fn member_id(id: &str) -> MemberId {
    MemberId::try_new(id.to_string()).unwrap()
}

pub fn date(text: &str) -> NaiveDate {
    text.parse().unwrap()
}

pub fn member(id: &str, name: &str) -> Member {
    Member {
        id: member_id(id),
        name: MemberName::try_new(name.to_string()).unwrap(),
        active: true,
    }
}

/// Builder for stored orders
#[derive(Debug, Clone)]
pub struct OrderBuilder {
    id: OrderId,
    store: StoreName,
    date: NaiveDate,
    participants: BTreeMap<MemberId, CupValue>,
    total_cups: Option<u32>,
    timestamp: DateTime<Utc>,
}

impl OrderBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: OrderId::try_new(id.to_string()).unwrap(),
            store: StoreName::try_new("A Tea".to_string()).unwrap(),
            date: date("2024-06-01"),
            participants: BTreeMap::new(),
            total_cups: None,
            timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 4, 0, 0).unwrap(),
        }
    }

    pub fn store(mut self, store: &str) -> Self {
        self.store = StoreName::try_new(store.to_string()).unwrap();
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn cups(mut self, member: &str, count: u32) -> Self {
        self.participants
            .insert(member_id(member), CupValue::from_count(count));
        self
    }

    /// A participant whose stored count is an arbitrary JSON value
    pub fn raw_cups(mut self, member: &str, value: Value) -> Self {
        self.participants.insert(member_id(member), CupValue::new(value));
        self
    }

    /// Override the stored total instead of summing the participants
    pub fn total(mut self, total: u32) -> Self {
        self.total_cups = Some(total);
        self
    }

    pub fn created_after(mut self, offset: Duration) -> Self {
        self.timestamp += offset;
        self
    }

    pub fn build(self) -> Order {
        let total_cups = self.total_cups.unwrap_or_else(|| {
            self.participants
                .values()
                .map(|value| u32::try_from(value.parse_or(0)).unwrap_or(0))
                .sum()
        });
        Order {
            id: self.id,
            store: self.store,
            date: self.date,
            time: OrderTime::noon(),
            participants: self.participants,
            total_cups,
            timestamp: self.timestamp,
            created_by: None,
        }
    }
}
