//! Journey: digging out of a review backlog
//!
//! A learner returns after two weeks away: everything is overdue. The
//! rebalancing passes must absorb the backlog under the per-day cap, keep
//! urgency order, and push catch-up work out without touching late items.

use chrono::{Days, NaiveDate};
use prepdeck_e2e_tests::fixtures::{add_problem, anchor_day, fixed_store, seed_scheduled};
use prepdeck_core::{ReviewItem, ReviewLoadIndex, DEFAULT_DAILY_CAP};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn redistribute_absorbs_a_two_week_backlog() {
    let mut store = fixed_store();
    let today = anchor_day();

    seed_scheduled(&mut store, 4, day(2026, 2, 16), "old");
    seed_scheduled(&mut store, 3, day(2026, 2, 23), "recent");
    seed_scheduled(&mut store, 2, today, "due");
    seed_scheduled(&mut store, 3, today + Days::new(5), "ahead");
    add_problem(&mut store, "never-rated", "misc");

    let rescheduled = store.redistribute();
    assert_eq!(rescheduled, 12);

    // Cap holds on every assigned day
    let index = ReviewLoadIndex::new(store.items());
    for offset in 0..10 {
        assert!(index.load_on(today + Days::new(offset)) <= DEFAULT_DAILY_CAP);
    }
    assert!(store.overdue().is_empty());

    // Oldest backlog lands first; originally-future items never jump ahead
    let day_of = |name: &str| {
        store
            .items()
            .iter()
            .find(|i| i.name == name)
            .and_then(ReviewItem::review_day)
            .unwrap()
    };
    assert_eq!(day_of("old-0"), today);
    assert!(day_of("old-3") <= day_of("due-0"));
    assert!(day_of("due-1") <= day_of("ahead-0"));

    // The unrated item is inert
    let unrated = store.items().iter().find(|i| i.name == "never-rated").unwrap();
    assert!(unrated.next_review.is_none());
}

#[test]
fn redistribute_twice_is_a_no_op() {
    let mut store = fixed_store();
    seed_scheduled(&mut store, 5, day(2026, 2, 20), "backlog");
    seed_scheduled(&mut store, 4, anchor_day() + Days::new(2), "ahead");

    store.redistribute();
    let first: Vec<_> = store
        .items()
        .iter()
        .map(|i| (i.id.clone(), i.review_day()))
        .collect();

    store.redistribute();
    let second: Vec<_> = store
        .items()
        .iter()
        .map(|i| (i.id.clone(), i.review_day()))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn buffer_days_push_out_catch_up_work_only() {
    let mut store = fixed_store();
    let today = anchor_day();

    seed_scheduled(&mut store, 2, day(2026, 2, 25), "late");
    seed_scheduled(&mut store, 2, today, "due");
    seed_scheduled(&mut store, 2, today + Days::new(4), "ahead");
    add_problem(&mut store, "never-rated", "misc");

    let shifted = store.add_buffer_days(3).unwrap();
    assert_eq!(shifted, 4);

    for item in store.items() {
        match item.name.split('-').next().unwrap() {
            "late" => assert_eq!(item.review_day(), Some(day(2026, 2, 25))),
            "due" => assert_eq!(item.review_day(), Some(today + Days::new(3))),
            "ahead" => assert_eq!(item.review_day(), Some(today + Days::new(7))),
            _ => assert!(item.next_review.is_none()),
        }
    }
}

#[test]
fn buffer_then_redistribute_round_trip() {
    let mut store = fixed_store();
    let today = anchor_day();

    seed_scheduled(&mut store, 6, day(2026, 2, 20), "backlog");
    seed_scheduled(&mut store, 4, today + Days::new(1), "ahead");

    // Push the catch-up-able work out, then rebalance everything
    store.add_buffer_days(2).unwrap();
    store.redistribute();

    let index = ReviewLoadIndex::new(store.items());
    let mut assigned = 0usize;
    for offset in 0..10 {
        let load = index.load_on(today + Days::new(offset));
        assert!(load <= DEFAULT_DAILY_CAP);
        assigned += load;
    }
    assert_eq!(assigned, 10);
    assert!(store.overdue().is_empty());
}
