//! Review load index - per-day counts of scheduled items
//!
//! Read-only view over an item snapshot answering "how many items already
//! have their next review on day D". Precomputed once per scheduling pass so
//! window scans are O(1) per candidate day.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::item::ReviewItem;

/// Precomputed `day -> scheduled item count` map over an item snapshot
///
/// Items without a review date are excluded. Dates are normalized to their
/// day on the way in, so a stray non-midnight timestamp still lands in the
/// right bucket.
#[derive(Debug, Clone, Default)]
pub struct ReviewLoadIndex {
    counts: HashMap<NaiveDate, usize>,
}

impl ReviewLoadIndex {
    /// Build the index from the current item snapshot
    pub fn new(items: &[ReviewItem]) -> Self {
        let mut counts = HashMap::new();
        for day in items.iter().filter_map(ReviewItem::review_day) {
            *counts.entry(day).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of items already scheduled on `day`
    pub fn load_on(&self, day: NaiveDate) -> usize {
        self.counts.get(&day).copied().unwrap_or(0)
    }
}
