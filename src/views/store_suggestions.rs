//! Store-name autocomplete
//!
//! Suggestions come from the stores already present in the order log, so a
//! name typed once is offered again the next time someone starts an order.

use std::collections::HashSet;

use super::snapshot::OrderSnapshot;
use crate::domain::StoreName;

/// Distinct store names whose lowercase form contains `search`, lowercased
///
/// Names keep their original casing and appear in first-seen order (newest
/// order first). An empty search yields nothing rather than the whole history.
pub fn store_suggestions(orders: &OrderSnapshot, search: &str) -> Vec<StoreName> {
    if search.is_empty() {
        return Vec::new();
    }
    let needle = search.to_lowercase();

    let mut seen = HashSet::new();
    orders
        .iter()
        .map(|order| &order.store)
        .filter(|store| seen.insert(*store))
        .filter(|store| store.as_ref().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
