//! First-occurrence deduplication by restaurant identifier.

use std::collections::HashSet;

use crate::domain::{Restaurant, RestaurantId};

/// Concatenate `lists` in order, keeping the first record seen for each
/// identifier.
pub(crate) fn merge_unique<I>(lists: I) -> Vec<Restaurant>
where
    I: IntoIterator<Item = Vec<Restaurant>>,
{
    let mut seen: HashSet<RestaurantId> = HashSet::new();
    let mut merged = Vec::new();
    for restaurant in lists.into_iter().flatten() {
        if seen.insert(restaurant.id().clone()) {
            merged.push(restaurant);
        }
    }
    merged
}

/// Identifiers in first-occurrence order with repeats removed.
pub(crate) fn unique_ids<I>(ids: I) -> Vec<RestaurantId>
where
    I: IntoIterator<Item = RestaurantId>,
{
    let mut seen = HashSet::new();
    ids.into_iter()
        .filter(|id| seen.insert(id.clone()))
        .collect()
}
