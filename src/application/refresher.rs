//! Keeps the derived views in step with the stores
//!
//! The refresher watches both collection snapshots and the user's view
//! inputs. Any change triggers a full recomputation and the new
//! [`LedgerViews`] replace the old ones on an output watch channel, so a
//! reader never sees views built from two different snapshots.

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

use crate::domain::{Member, Order, Snapshot};
use crate::infrastructure::log_messages::refresher as log;
use crate::views::{LeaderboardSettings, LedgerViews, MemberSnapshot, OrderSnapshot, ViewInputs};

/// Receiver side of the published views
pub type ViewsReceiver = watch::Receiver<Arc<LedgerViews>>;

pub struct ViewRefresher {
    orders: watch::Receiver<Snapshot<Order>>,
    members: watch::Receiver<Snapshot<Member>>,
    inputs: watch::Receiver<ViewInputs>,
    settings: LeaderboardSettings,
    views: watch::Sender<Arc<LedgerViews>>,
}

impl ViewRefresher {
    /// Build a refresher and the receiver its views are published on
    ///
    /// The receiver already holds views derived from the current snapshots.
    pub fn new(
        mut orders: watch::Receiver<Snapshot<Order>>,
        mut members: watch::Receiver<Snapshot<Member>>,
        mut inputs: watch::Receiver<ViewInputs>,
        settings: LeaderboardSettings,
    ) -> (Self, ViewsReceiver) {
        let initial = derive_views(&mut orders, &mut members, &mut inputs, &settings);
        let (views, receiver) = watch::channel(initial);
        let refresher = Self {
            orders,
            members,
            inputs,
            settings,
            views,
        };
        (refresher, receiver)
    }

    /// Recompute on every upstream change until an upstream channel closes
    /// or nobody is listening for views any more
    #[instrument(skip_all)]
    pub async fn run(mut self) {
        info!("{}", log::STARTED);
        loop {
            let changed = tokio::select! {
                changed = self.orders.changed() => changed,
                changed = self.members.changed() => changed,
                changed = self.inputs.changed() => changed,
                () = self.views.closed() => return,
            };
            if changed.is_err() {
                info!("{}", log::UPSTREAM_CLOSED);
                return;
            }

            let views = derive_views(
                &mut self.orders,
                &mut self.members,
                &mut self.inputs,
                &self.settings,
            );
            self.views.send_replace(views);
        }
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
}

/// Rebuild every view from the latest values and mark them seen
fn derive_views(
    orders: &mut watch::Receiver<Snapshot<Order>>,
    members: &mut watch::Receiver<Snapshot<Member>>,
    inputs: &mut watch::Receiver<ViewInputs>,
    settings: &LeaderboardSettings,
) -> Arc<LedgerViews> {
    let orders = OrderSnapshot::new(orders.borrow_and_update().as_ref().clone());
    let members = MemberSnapshot::new(members.borrow_and_update().as_ref().clone());
    let inputs = inputs.borrow_and_update().clone();

    debug!(
        orders = orders.len(),
        members = members.len(),
        "{}",
        log::RECOMPUTED
    );
    Arc::new(LedgerViews::derive(&orders, &members, &inputs, settings))
}
