//! Leaderboard aggregation
//!
//! Folds the order log, joined against the member directory, into per-member
//! cup totals and participation rates plus a ranking of the most visited
//! stores. Every figure comes from the same pass over the same snapshot.

use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::snapshot::{MemberDirectory, OrderSnapshot};
use crate::domain::validation_constants::leaderboard;
use crate::domain::{MemberId, StoreName};

/// Share of all orders a member took part in, as a whole percentage
#[nutype(
    sanitize(with = |rate: u8| rate.min(100)),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct ParticipationRate(u8);

impl ParticipationRate {
    /// `count / total_orders * 100`, rounded half up; zero when there are no orders
    pub fn of(count: usize, total_orders: usize) -> Self {
        if total_orders == 0 {
            return Self::new(0);
        }
        let count = count.min(total_orders) as u128;
        let total = total_orders as u128;
        let percent = (count * 200 + total) / (total * 2);
        Self::new(u8::try_from(percent).unwrap_or(100))
    }

    pub fn percent(&self) -> u8 {
        self.into_inner()
    }
}

/// Tuning for the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardSettings {
    pub top_store_limit: usize,
    pub unknown_member_label: String,
}

impl Default for LeaderboardSettings {
    fn default() -> Self {
        Self {
            top_store_limit: leaderboard::TOP_STORE_LIMIT,
            unknown_member_label: leaderboard::UNKNOWN_MEMBER_LABEL.to_string(),
        }
    }
}

/// One member's line on the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStanding {
    pub member_id: MemberId,
    /// Member name, or the fallback label when the member no longer exists
    pub name: String,
    /// Orders the member appears in
    pub count: usize,
    /// Cups across those orders
    pub cups: i64,
    pub participation_rate: ParticipationRate,
}

/// How often a store was ordered from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreFrequency {
    pub name: StoreName,
    pub count: usize,
}

/// Aggregated statistics for one order snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    /// Members by cups, descending; ties keep first-seen order
    pub ranking: Vec<MemberStanding>,
    /// Stores by order count, descending, truncated to the configured limit
    pub top_stores: Vec<StoreFrequency>,
    /// Sum of each order's stored total
    pub total_cups: u64,
    pub total_orders: usize,
}

struct Tally<'a> {
    member_id: &'a MemberId,
    count: usize,
    cups: i64,
}

impl Leaderboard {
    pub fn compute(
        orders: &OrderSnapshot,
        directory: &MemberDirectory<'_>,
        settings: &LeaderboardSettings,
    ) -> Self {
        let total_orders = orders.len();
        let mut total_cups = 0_u64;

        let mut tallies: Vec<Tally<'_>> = Vec::new();
        let mut tally_index: HashMap<&MemberId, usize> = HashMap::new();
        let mut stores: Vec<(&StoreName, usize)> = Vec::new();
        let mut store_index: HashMap<&StoreName, usize> = HashMap::new();

        for order in orders {
            total_cups += u64::from(order.total_cups);

            let slot = *store_index.entry(&order.store).or_insert_with(|| {
                stores.push((&order.store, 0));
                stores.len() - 1
            });
            stores[slot].1 += 1;

            for (member_id, cups) in &order.participants {
                let slot = *tally_index.entry(member_id).or_insert_with(|| {
                    tallies.push(Tally {
                        member_id,
                        count: 0,
                        cups: 0,
                    });
                    tallies.len() - 1
                });
                let tally = &mut tallies[slot];
                tally.count += 1;
                tally.cups = tally.cups.saturating_add(cups.parse_or(0));
            }
        }

        let mut ranking: Vec<MemberStanding> = tallies
            .into_iter()
            .map(|tally| MemberStanding {
                member_id: tally.member_id.clone(),
                name: directory
                    .display_name(tally.member_id, &settings.unknown_member_label)
                    .to_string(),
                count: tally.count,
                cups: tally.cups,
                participation_rate: ParticipationRate::of(tally.count, total_orders),
            })
            .collect();
        ranking.sort_by(|a, b| b.cups.cmp(&a.cups));

        let mut top_stores: Vec<StoreFrequency> = stores
            .into_iter()
            .map(|(name, count)| StoreFrequency {
                name: name.clone(),
                count,
            })
            .collect();
        top_stores.sort_by(|a, b| b.count.cmp(&a.count));
        top_stores.truncate(settings.top_store_limit);

        Self {
            ranking,
            top_stores,
            total_cups,
            total_orders,
        }
    }

    pub fn standing_for(&self, member_id: &MemberId) -> Option<&MemberStanding> {
        self.ranking
            .iter()
            .find(|standing| &standing.member_id == member_id)
    }

    /// Cups summed over the ranking, from the parsed participant counts
    pub fn ranked_cups(&self) -> i64 {
        self.ranking.iter().map(|standing| standing.cups).sum()
    }
}
