//! Order composition
//!
//! The composer holds the one in-progress draft. Edits are synchronous; only
//! [`OrderComposer::submit`] touches the order store, and the draft is reset
//! only after the store accepted the new order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

use super::clock::Clock;
use super::identity::IdentityProvider;
use super::record_store::OrderStore;
use crate::domain::validation_constants::cups;
use crate::domain::{CupPolicy, MemberId, NewOrder, OrderId, OrderTime, StoreName};
use crate::error::Result;
use crate::infrastructure::log_messages::composer as log;

/// The uncommitted order being put together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    /// Store name as typed or picked
    pub store_text: String,
    /// Text driving the store suggestions
    pub store_search: String,
    pub date: NaiveDate,
    pub time: OrderTime,
    pub participants: BTreeMap<MemberId, u32>,
    pub suggestions_open: bool,
}

impl OrderDraft {
    pub fn empty(today: NaiveDate, time: OrderTime) -> Self {
        Self {
            store_text: String::new(),
            store_search: String::new(),
            date: today,
            time,
            participants: BTreeMap::new(),
            suggestions_open: false,
        }
    }

    /// The store name, if the typed text is a valid one
    pub fn store_name(&self) -> Option<StoreName> {
        StoreName::try_new(self.store_text.clone()).ok()
    }

    pub fn total_cups(&self) -> u32 {
        self.participants
            .values()
            .fold(0_u32, |total, count| total.saturating_add(*count))
    }
}

/// Stages new orders before they are written to the order store
#[derive(Debug, Clone)]
pub struct OrderComposer {
    draft: OrderDraft,
    policy: CupPolicy,
    default_time: OrderTime,
}

impl OrderComposer {
    pub fn new(policy: CupPolicy, default_time: OrderTime, today: NaiveDate) -> Self {
        Self {
            draft: OrderDraft::empty(today, default_time.clone()),
            policy,
            default_time,
        }
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn policy(&self) -> CupPolicy {
        self.policy
    }

    /// Typing in the store box edits both the store and the search text
    pub fn set_store_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.draft.store_search.clone_from(&text);
        self.draft.store_text = text;
        self.draft.suggestions_open = true;
    }

    /// Accept one of the store suggestions
    pub fn choose_suggestion(&mut self, store: &StoreName) {
        self.draft.store_text = store.to_string();
        self.draft.store_search = store.to_string();
        self.draft.suggestions_open = false;
    }

    pub fn close_suggestions(&mut self) {
        self.draft.suggestions_open = false;
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.draft.date = date;
    }

    pub fn set_time(&mut self, time: OrderTime) {
        self.draft.time = time;
    }

    pub fn is_selected(&self, member: &MemberId) -> bool {
        self.draft.participants.contains_key(member)
    }

    pub fn cup_count(&self, member: &MemberId) -> Option<u32> {
        self.draft.participants.get(member).copied()
    }

    /// Add `member` with one cup, or drop them entirely if already added
    pub fn toggle_participant(&mut self, member: &MemberId) {
        if self.draft.participants.remove(member).is_none() {
            self.draft
                .participants
                .insert(member.clone(), cups::NEW_PARTICIPANT);
        }
    }

    /// Step a participant's cups by `delta`; a member not yet on the draft
    /// counts as holding one cup
    pub fn update_cup_count(&mut self, member: &MemberId, delta: i64) {
        let current = self.cup_count(member).unwrap_or(cups::NEW_PARTICIPANT);
        let next = self.policy.step(current, delta);
        self.draft.participants.insert(member.clone(), next);
    }

    /// Free-text cup entry; text that is not a number leaves the count alone
    pub fn set_cup_count_text(&mut self, member: &MemberId, text: &str) {
        let next = self.policy.parse_text(text, self.cup_count(member));
        self.draft.participants.insert(member.clone(), next);
    }

    /// A draft needs a store and at least one participant
    pub fn can_submit(&self) -> bool {
        self.draft.store_name().is_some() && !self.draft.participants.is_empty()
    }

    /// The order that [`Self::submit`] would create right now
    pub fn prepare(&self, identity: &dyn IdentityProvider, clock: &dyn Clock) -> Option<NewOrder> {
        if self.draft.participants.is_empty() {
            return None;
        }
        let store = self.draft.store_name()?;

        Some(NewOrder {
            store,
            date: self.draft.date,
            time: self.draft.time.clone(),
            participants: self.draft.participants.clone(),
            total_cups: self.draft.total_cups(),
            timestamp: clock.now(),
            created_by: identity.current_identity(),
        })
    }

    /// Commit the draft as a new order
    ///
    /// Returns `Ok(None)` without touching the store when the draft is
    /// incomplete. When the store rejects the order the draft is kept so the
    /// commit can be retried.
    #[instrument(skip_all, fields(store = %self.draft.store_text, participants = self.draft.participants.len()))]
    pub async fn submit(
        &mut self,
        orders: &OrderStore,
        identity: &dyn IdentityProvider,
        clock: &dyn Clock,
    ) -> Result<Option<OrderId>> {
        let Some(order) = self.prepare(identity, clock) else {
            debug!("{}", log::INCOMPLETE_DRAFT);
            return Ok(None);
        };

        match orders.create(order).await {
            Ok(id) => {
                info!(order_id = %id, "{}", log::ORDER_SUBMITTED);
                self.reset(clock.today());
                Ok(Some(id))
            }
            Err(error) => {
                warn!(%error, "{}", log::ORDER_REJECTED);
                Err(error)
            }
        }
    }

    /// Back to an empty draft dated `today`
    pub fn reset(&mut self, today: NaiveDate) {
        self.draft = OrderDraft::empty(today, self.default_time.clone());
    }
}
