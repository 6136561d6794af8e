use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

use super::clock::{Clock, SystemClock};
use super::composer::OrderComposer;
use super::identity::{AnonymousIdentity, IdentityProvider};
use super::record_store::{MemberStore, OrderStore};
use super::refresher::{ViewRefresher, ViewsReceiver};
use super::roster;
use crate::config::Settings;
use crate::domain::{MemberId, OrderId};
use crate::error::Error;
use crate::infrastructure::log_messages::{application as log, configuration, store};
use crate::infrastructure::{InMemoryRecordStore, SeedDocument};
use crate::views::{LedgerViews, ViewInputs};
use crate::Result;

/// Main application struct that coordinates all components
///
/// The facade owns the order draft and the view inputs, keeps a
/// [`ViewRefresher`] running against both stores, and turns failed store
/// mutations into logged "did not take effect" results.
pub struct Application {
    settings: Settings,
    orders: Arc<OrderStore>,
    members: Arc<MemberStore>,
    identity: Arc<dyn IdentityProvider>,
    clock: Arc<dyn Clock>,
    composer: OrderComposer,
    inputs: watch::Sender<ViewInputs>,
    views: ViewsReceiver,
    refresher: JoinHandle<()>,
}

impl Application {
    /// Load settings and start against in-memory stores, seeded when a seed
    /// document is configured
    #[instrument]
    pub async fn new() -> Result<Self> {
        let settings = Settings::new()?;
        info!(environment = %settings.application.environment, "{}", configuration::CONFIG_LOADED);

        let seed = match &settings.ledger.seed_path {
            Some(path) => SeedDocument::load(path)?,
            None => SeedDocument::default(),
        };
        info!(
            orders = seed.orders.len(),
            members = seed.members.len(),
            "{}",
            log::SEEDING_STORES
        );

        Self::with_collaborators(
            settings,
            Arc::new(InMemoryRecordStore::with_records(seed.orders)),
            Arc::new(InMemoryRecordStore::with_records(seed.members)),
            Arc::new(AnonymousIdentity::new()),
            Arc::new(SystemClock),
        )
    }

    /// Assemble the facade from explicit collaborators and start refreshing
    /// views. Must be called from within a Tokio runtime.
    pub fn with_collaborators(
        settings: Settings,
        orders: Arc<OrderStore>,
        members: Arc<MemberStore>,
        identity: Arc<dyn IdentityProvider>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let today = clock.today();
        let composer = OrderComposer::new(
            settings.ledger.cup_policy(),
            settings.ledger.default_time()?,
            today,
        );

        let (inputs, inputs_rx) = watch::channel(ViewInputs::starting(today));
        let (refresher, views) = ViewRefresher::new(
            orders.subscribe(),
            members.subscribe(),
            inputs_rx,
            settings.ledger.leaderboard(),
        );

        Ok(Self {
            settings,
            orders,
            members,
            identity,
            clock,
            composer,
            inputs,
            views,
            refresher: refresher.spawn(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn composer(&self) -> &OrderComposer {
        &self.composer
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// The most recently published views
    pub fn current_views(&self) -> Arc<LedgerViews> {
        self.views.borrow().clone()
    }

    /// Wait for the next recomputation and return its views
    pub async fn next_views(&mut self) -> Result<Arc<LedgerViews>> {
        self.views
            .changed()
            .await
            .map_err(|_| Error::StoreClosed("views"))?;
        Ok(self.views.borrow_and_update().clone())
    }

    /// Edit the draft; the store search text follows the draft
    pub fn edit_draft(&mut self, edit: impl FnOnce(&mut OrderComposer)) {
        edit(&mut self.composer);
        self.sync_store_search();
        self.sync_today();
    }

    /// Edit the month selector, selected date or calendar page
    pub fn update_inputs(&self, edit: impl FnOnce(&mut ViewInputs)) {
        self.inputs.send_modify(|inputs| {
            edit(inputs);
            inputs.today = self.clock.today();
        });
    }

    /// Commit the draft; `None` when it was incomplete or the store refused it
    #[instrument(skip(self))]
    pub async fn submit_order(&mut self) -> Option<OrderId> {
        let result = self
            .composer
            .submit(
                self.orders.as_ref(),
                self.identity.as_ref(),
                self.clock.as_ref(),
            )
            .await;
        self.sync_store_search();
        self.sync_today();

        match result {
            Ok(id) => id,
            Err(error) => {
                warn!(%error, "{}", store::MUTATION_FAILED);
                None
            }
        }
    }

    /// Delete an order; `false` when the store refused
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: &OrderId) -> bool {
        self.sync_today();
        Self::took_effect(self.orders.delete(id).await)
    }

    /// Batch-add members from free text; `None` when the store refused
    #[instrument(skip(self, text))]
    pub async fn add_members(&self, text: &str) -> Option<Vec<MemberId>> {
        self.sync_today();
        match roster::add_members(self.members.as_ref(), text).await {
            Ok(ids) => Some(ids),
            Err(error) => {
                warn!(%error, "{}", store::MUTATION_FAILED);
                None
            }
        }
    }

    /// Remove a member; their past orders are left alone
    #[instrument(skip(self))]
    pub async fn remove_member(&self, id: &MemberId) -> bool {
        self.sync_today();
        Self::took_effect(roster::remove_member(self.members.as_ref(), id).await)
    }

    /// Log a summary of the current ledger
    #[instrument(skip(self))]
    pub async fn run(self) -> Result<()> {
        info!("{}", log::STARTING);

        let views = self.current_views();
        let board = &views.leaderboard;
        info!(
            orders = board.total_orders,
            cups = board.total_cups,
            members = views.members.len(),
            "{}",
            log::LEDGER_SUMMARY
        );
        for standing in &board.ranking {
            info!(
                name = %standing.name,
                orders = standing.count,
                cups = standing.cups,
                rate = standing.participation_rate.percent(),
                "{}",
                log::TOP_MEMBER
            );
        }
        for store in &board.top_stores {
            info!(name = %store.name, orders = store.count, "{}", log::TOP_STORE);
        }

        info!("{}", log::STARTED_SUCCESSFULLY);
        self.refresher.abort();
        Ok(())
    }

    fn sync_store_search(&self) {
        let search = &self.composer.draft().store_search;
        self.inputs.send_if_modified(|inputs| {
            if inputs.store_search == *search {
                false
            } else {
                inputs.store_search.clone_from(search);
                true
            }
        });
    }

    /// Move the "today" view to the clock's date once midnight has passed
    fn sync_today(&self) {
        let today = self.clock.today();
        self.inputs.send_if_modified(|inputs| {
            if inputs.today == today {
                false
            } else {
                inputs.today = today;
                true
            }
        });
    }

    fn took_effect(result: Result<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(error) => {
                warn!(%error, "{}", store::MUTATION_FAILED);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::clock::FixedClock;
    use crate::application::identity::StaticIdentity;
    use crate::domain::{Member, Order};
    use chrono::{TimeZone, Utc};
    use std::time::Duration;

    struct Harness {
        app: Application,
        orders: Arc<InMemoryRecordStore<Order>>,
        members: Arc<InMemoryRecordStore<Member>>,
        clock: Arc<FixedClock>,
    }

    fn harness() -> Harness {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load("test", dir.path()).unwrap();
        let orders = Arc::new(InMemoryRecordStore::<Order>::new());
        let members = Arc::new(InMemoryRecordStore::<Member>::new());
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 6, 1, 23, 0, 0).unwrap(),
        ));

        let app = Application::with_collaborators(
            settings,
            orders.clone(),
            members.clone(),
            Arc::new(StaticIdentity(None)),
            clock.clone(),
        )
        .unwrap();
        Harness {
            app,
            orders,
            members,
            clock,
        }
    }

    async fn settle(app: &mut Application) -> Arc<LedgerViews> {
        tokio::time::timeout(Duration::from_secs(1), app.next_views())
            .await
            .unwrap()
            .unwrap()
    }

    #[tokio::test]
    async fn test_added_members_appear_in_views() {
        let Harness { mut app, .. } = harness();

        let ids = app.add_members("Bob, Alice").await.unwrap();
        assert_eq!(ids.len(), 2);

        let mut views = app.current_views();
        while views.members.len() < 2 {
            views = settle(&mut app).await;
        }
        assert_eq!(views.members[0].name.as_ref(), "Alice");
    }

    #[tokio::test]
    async fn test_submitted_orders_reach_the_leaderboard() {
        let Harness { mut app, orders, .. } = harness();
        let ids = app.add_members("Alice").await.unwrap();

        app.edit_draft(|composer| {
            composer.set_store_text("A Tea");
            composer.toggle_participant(&ids[0]);
            composer.update_cup_count(&ids[0], 1);
        });
        let order_id = app.submit_order().await.unwrap();

        assert_eq!(orders.snapshot()[0].id, order_id);
        assert!(app.composer().draft().participants.is_empty());

        let mut views = app.current_views();
        while views.leaderboard.total_orders == 0 || views.members.is_empty() {
            views = settle(&mut app).await;
        }
        assert_eq!(views.leaderboard.total_cups, 2);
        assert_eq!(views.leaderboard.ranking[0].name, "Alice");
        assert_eq!(views.today.len(), 1);
    }

    #[tokio::test]
    async fn test_store_search_follows_the_draft() {
        let Harness { mut app, .. } = harness();

        app.edit_draft(|composer| composer.set_store_text("tea"));

        let views = settle(&mut app).await;
        assert!(views.store_suggestions.is_empty());
        assert_eq!(app.inputs.borrow().store_search, "tea");
    }

    #[tokio::test]
    async fn test_rejected_mutations_did_not_take_effect() {
        let Harness {
            mut app,
            orders,
            members,
            ..
        } = harness();
        members.set_rejecting(true);
        orders.set_rejecting(true);

        assert!(app.add_members("Alice").await.is_none());

        let missing = MemberId::try_new("m1".to_string()).unwrap();
        app.edit_draft(|composer| {
            composer.set_store_text("A Tea");
            composer.toggle_participant(&missing);
        });
        assert!(app.submit_order().await.is_none());
        assert!(app.composer().can_submit());
        assert!(!app.remove_member(&missing).await);
    }

    #[tokio::test]
    async fn test_deleting_unknown_orders_reports_failure() {
        let Harness { app, .. } = harness();
        let missing = OrderId::try_new("o404".to_string()).unwrap();

        assert!(!app.delete_order(&missing).await);
    }

    #[tokio::test]
    async fn test_today_follows_the_clock_past_midnight() {
        let Harness {
            mut app, clock, ..
        } = harness();
        let ids = app.add_members("Alice").await.unwrap();
        app.edit_draft(|composer| {
            composer.set_store_text("A Tea");
            composer.toggle_participant(&ids[0]);
        });
        let late_order = app.submit_order().await.unwrap();

        clock.advance_by(chrono::Duration::hours(2));
        let next_day = app.today();
        app.edit_draft(|composer| {
            composer.set_store_text("Milk Bar");
            composer.set_date(next_day);
            composer.toggle_participant(&ids[0]);
        });
        let early_order = app.submit_order().await.unwrap();

        let mut views = app.current_views();
        while views.today.first().map(|order| &order.id) != Some(&early_order) {
            views = settle(&mut app).await;
        }
        assert_eq!(next_day.to_string(), "2024-06-02");
        assert_eq!(views.today.len(), 1);
        assert!(views.orders.iter().any(|order| order.id == late_order));
    }

    #[tokio::test]
    async fn test_input_edits_pick_up_a_new_day() {
        let Harness { app, clock, .. } = harness();

        clock.advance_by(chrono::Duration::hours(1));
        app.update_inputs(|inputs| inputs.clear_date());

        assert_eq!(app.inputs.borrow().today.to_string(), "2024-06-02");
    }
}
