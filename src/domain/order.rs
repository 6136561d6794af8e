//! Orders
//!
//! An order records one group purchase: which store, which day, and how many
//! cups each participating member had.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::cups::CupValue;
use super::identifiers::{CreatorId, MemberId, OrderId};
use super::month::MonthKey;
use super::record::StoredRecord;
use super::types::{OrderTime, StoreName};

/// A persisted order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub store: StoreName,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: OrderTime,
    #[serde(default)]
    pub participants: BTreeMap<MemberId, CupValue>,
    /// Sum of the participant counts when the order was created. Never
    /// recomputed, so it may drift from `participants` after external edits.
    #[serde(default)]
    pub total_cups: u32,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub created_by: Option<CreatorId>,
}

impl Order {
    /// The month this order is filed under
    pub fn month(&self) -> MonthKey {
        MonthKey::of(self.date)
    }

    /// Leniently parsed cup count for `member`, zero when absent or not numeric
    pub fn cups_for(&self, member: &MemberId) -> i64 {
        self.participants
            .get(member)
            .map_or(0, |value| value.parse_or(0))
    }

    pub fn includes(&self, member: &MemberId) -> bool {
        self.participants.contains_key(member)
    }
}

/// Fields of an order before the store assigns an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub store: StoreName,
    pub date: NaiveDate,
    pub time: OrderTime,
    pub participants: BTreeMap<MemberId, u32>,
    pub total_cups: u32,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub created_by: Option<CreatorId>,
}

impl StoredRecord for Order {
    type Id = OrderId;
    type Draft = NewOrder;

    const COLLECTION: &'static str = "orders";

    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self {
        Self {
            id,
            store: draft.store,
            date: draft.date,
            time: draft.time,
            participants: draft
                .participants
                .into_iter()
                .map(|(member, count)| (member, CupValue::from_count(count)))
                .collect(),
            total_cups: draft.total_cups,
            timestamp: draft.timestamp,
            created_by: draft.created_by,
        }
    }

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn member(id: &str) -> MemberId {
        MemberId::try_new(id.to_string()).unwrap()
    }

    fn sample_document() -> serde_json::Value {
        json!({
            "id": "o1",
            "store": "A Tea",
            "date": "2024-06-01",
            "time": "12:00",
            "participants": { "m1": 2, "m2": "1", "m3": "many" },
            "totalCups": 3,
            "timestamp": 1717200000000_i64,
            "createdBy": "user-1"
        })
    }

    #[test]
    fn orders_deserialize_from_store_documents() {
        let order: Order = serde_json::from_value(sample_document()).unwrap();

        assert_eq!(order.store.as_ref(), "A Tea");
        assert_eq!(order.month().to_string(), "2024-06");
        assert_eq!(order.total_cups, 3);
        assert_eq!(order.timestamp.timestamp_millis(), 1_717_200_000_000);
        assert_eq!(order.created_by.unwrap().as_ref(), "user-1");
    }

    #[test]
    fn participant_counts_parse_leniently() {
        let order: Order = serde_json::from_value(sample_document()).unwrap();

        assert_eq!(order.cups_for(&member("m1")), 2);
        assert_eq!(order.cups_for(&member("m2")), 1);
        assert_eq!(order.cups_for(&member("m3")), 0);
        assert_eq!(order.cups_for(&member("m4")), 0);
        assert!(order.includes(&member("m3")));
        assert!(!order.includes(&member("m4")));
    }

    #[test]
    fn documents_with_blank_store_are_rejected() {
        let mut document = sample_document();
        document["store"] = json!("  ");
        assert!(serde_json::from_value::<Order>(document).is_err());
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let order: Order = serde_json::from_value(json!({
            "id": "o2",
            "store": "B Juice",
            "date": "2024-06-02",
            "timestamp": 0
        }))
        .unwrap();

        assert_eq!(order.time, OrderTime::noon());
        assert!(order.participants.is_empty());
        assert_eq!(order.total_cups, 0);
        assert!(order.created_by.is_none());
    }

    #[test]
    fn drafts_become_orders_with_integer_counts() {
        let draft = NewOrder {
            store: StoreName::try_new("A Tea".to_string()).unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            time: OrderTime::noon(),
            participants: BTreeMap::from([(member("m1"), 2)]),
            total_cups: 2,
            timestamp: Utc::now(),
            created_by: None,
        };

        let order = Order::from_draft(OrderId::try_new("o9".to_string()).unwrap(), draft);

        assert_eq!(order.id.as_ref(), "o9");
        assert_eq!(order.participants[&member("m1")], CupValue::from_count(2));
        assert_eq!(order.total_cups, 2);
    }
}
