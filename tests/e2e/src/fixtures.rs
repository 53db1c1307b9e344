//! Test Data Factory
//!
//! Builders for deterministic scheduling scenarios:
//! - Stores pinned to a fixed day
//! - Seeded backlogs with overdue / due-today / future mixes

use chrono::NaiveDate;
use prepdeck_core::{
    FixedClock, ItemKind, ItemStore, NewItemInput, ReviewItem, SchedulerConfig,
};

/// The pinned "today" shared by the journey tests
pub fn anchor_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

/// Empty store pinned to [`anchor_day`] with the default configuration
pub fn fixed_store() -> ItemStore<FixedClock> {
    ItemStore::with_clock(SchedulerConfig::default(), FixedClock(anchor_day()))
        .expect("default configuration is valid")
}

/// Add a practice problem
pub fn add_problem(store: &mut ItemStore<FixedClock>, name: &str, topic: &str) -> ReviewItem {
    store.add(NewItemInput {
        name: name.to_string(),
        kind: ItemKind::Problem,
        topic: topic.to_string(),
        ..Default::default()
    })
}

/// Add a standalone concept
pub fn add_concept(store: &mut ItemStore<FixedClock>, name: &str, topic: &str) -> ReviewItem {
    store.add(NewItemInput {
        name: name.to_string(),
        kind: ItemKind::Concept,
        topic: topic.to_string(),
        ..Default::default()
    })
}

/// Seed `count` problems all scheduled on the same day via manual override
pub fn seed_scheduled(
    store: &mut ItemStore<FixedClock>,
    count: usize,
    day: NaiveDate,
    prefix: &str,
) -> Vec<ReviewItem> {
    (0..count)
        .map(|i| {
            let item = add_problem(store, &format!("{prefix}-{i}"), "seeded");
            store
                .set_manual_review_date(&item.id, day)
                .expect("item just added")
        })
        .collect()
}
