//! Journey: a study session from first attempt to mastered
//!
//! Walks the full item lifecycle through the store surface: create, rate,
//! change status, override the date manually, and read back stats.

use chrono::Days;
use prepdeck_e2e_tests::fixtures::{add_concept, add_problem, anchor_day, fixed_store};
use prepdeck_core::{ItemStatus, StoreError};

#[test]
fn rating_drives_status_and_window() {
    let mut store = fixed_store();
    let today = anchor_day();

    let problem = add_problem(&mut store, "two-sum", "arrays");
    assert!(problem.next_review.is_none());

    // Shaky first attempt: short window, in-progress
    let rated = store.rate_confidence(&problem.id, 1).unwrap();
    assert_eq!(rated.status, ItemStatus::InProgress);
    let offset = (rated.review_day().unwrap() - today).num_days();
    assert!((3..=7).contains(&offset));

    // Much better a week later (same session clock): long window, mastered
    let rated = store.rate_confidence(&problem.id, 5).unwrap();
    assert_eq!(rated.status, ItemStatus::Mastered);
    assert_eq!(rated.attempts, 2);
    let offset = (rated.review_day().unwrap() - today).num_days();
    assert!((14..=21).contains(&offset));
}

#[test]
fn concepts_follow_the_same_lifecycle() {
    let mut store = fixed_store();

    let concept = add_concept(&mut store, "union-find", "graphs");
    let rated = store.rate_confidence(&concept.id, 3).unwrap();
    assert_eq!(rated.status, ItemStatus::Completed);
    assert!(rated.next_review.is_some());

    // Flagging for another pass reschedules from current confidence
    let flagged = store.set_status(&concept.id, ItemStatus::NeedsReview).unwrap();
    assert_eq!(flagged.attempts, 2);
    let offset = (flagged.review_day().unwrap() - anchor_day()).num_days();
    assert!((7..=14).contains(&offset));
}

#[test]
fn manual_override_bypasses_window_logic() {
    let mut store = fixed_store();
    let problem = add_problem(&mut store, "word-ladder", "graphs");
    store.rate_confidence(&problem.id, 2).unwrap();

    let target = anchor_day() + Days::new(60);
    let overridden = store.set_manual_review_date(&problem.id, target).unwrap();
    assert_eq!(overridden.review_day(), Some(target));
    // The override is store-level only: no attempt, no status change
    assert_eq!(overridden.attempts, 1);
    assert_eq!(overridden.status, ItemStatus::InProgress);
}

#[test]
fn placement_spreads_load_within_the_window() {
    let mut store = fixed_store();

    // Rate more low-confidence items than the [3, 7] window has days;
    // each lands on a least-loaded day, so no day outgrows the others by
    // more than one before the window wraps.
    for i in 0..10 {
        let item = add_problem(&mut store, &format!("drill-{i}"), "dp");
        store.rate_confidence(&item.id, 1).unwrap();
    }

    let mut per_day = std::collections::HashMap::new();
    for item in store.items() {
        *per_day.entry(item.review_day().unwrap()).or_insert(0usize) += 1;
    }
    let max = per_day.values().max().copied().unwrap();
    let min = per_day.values().min().copied().unwrap();
    assert!(max - min <= 1, "uneven spread: min {min}, max {max}");
}

#[test]
fn stats_reflect_the_session() {
    let mut store = fixed_store();

    let solved = add_problem(&mut store, "two-sum", "arrays");
    let strong = add_problem(&mut store, "binary-search", "search");
    add_concept(&mut store, "untouched", "theory");

    store.rate_confidence(&solved.id, 3).unwrap();
    store.rate_confidence(&strong.id, 5).unwrap();

    let stats = store.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.mastered, 1);
    assert_eq!(stats.unscheduled, 1);
    assert_eq!(stats.due_today, 0);

    assert_eq!(store.topics(), vec!["arrays", "search", "theory"]);
}

#[test]
fn unknown_ids_and_bad_ratings_error() {
    let mut store = fixed_store();
    let problem = add_problem(&mut store, "two-sum", "arrays");

    assert!(matches!(
        store.rate_confidence("no-such-id", 3),
        Err(StoreError::NotFound(_))
    ));
    assert!(matches!(
        store.rate_confidence(&problem.id, 7),
        Err(StoreError::InvalidConfidence(7))
    ));
}
