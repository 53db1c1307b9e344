//! # Prepdeck Core
//!
//! Spaced-repetition review scheduling for an interview-prep tracker.
//!
//! Given a learner's self-rated confidence (0-5) in a practice item, the
//! scheduler picks a future review date so that:
//!
//! - **Weak recall comes back sooner**: low confidence maps to a short review
//!   window, high confidence to a long one.
//! - **No day gets overloaded**: within a window the least-loaded day wins,
//!   and a global redistribution pass enforces a hard per-day cap.
//! - **Rebalancing never reorders urgency**: redistribution and buffer
//!   insertion keep overdue items ahead of future ones and never touch items
//!   without a review date.
//!
//! The scheduler itself is pure and stateless: all three operations compute
//! new dates over an immutable snapshot of the collection plus a single
//! "today" read through the [`Clock`] seam. The mutable collection lives in
//! [`ItemStore`], the external collaborator that persists returned dates.
//!
//! ## Quick Start
//!
//! ```rust
//! use prepdeck_core::{ItemStore, NewItemInput};
//!
//! let mut store = ItemStore::new();
//! let item = store.add(NewItemInput {
//!     name: "two-sum".to_string(),
//!     topic: "arrays".to_string(),
//!     ..Default::default()
//! });
//!
//! // Items start unscheduled; the first rating picks the first review date.
//! let rated = store.rate_confidence(&item.id, 2).unwrap();
//! assert!(rated.next_review.is_some());
//!
//! // Rebalance the whole set under the per-day cap, then push everything
//! // that is not already late out by one day.
//! store.redistribute();
//! let shifted = store.add_buffer_days(1).unwrap();
//! assert_eq!(shifted, 1);
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULES
// ============================================================================

pub mod item;
pub mod schedule;
pub mod store;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Item model
pub use item::{ItemKind, ItemStatus, NewItemInput, ReviewItem, TrackerStats};

// Scheduling core
pub use schedule::{
    BufferOutcome, Clock, FixedClock, ReviewLoadIndex, ReviewScheduler, ReviewWindow,
    SchedulerConfig, SchedulerError, SystemClock, DEFAULT_DAILY_CAP, HIGH_CONFIDENCE_WINDOW,
    LOW_CONFIDENCE_WINDOW, MAX_CONFIDENCE, MEDIUM_CONFIDENCE_WINDOW,
};

// Item store (the mutable collaborator)
pub use store::{ItemStore, StoreError};

// ============================================================================
// VERSION INFO
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// PRELUDE
// ============================================================================

/// Convenient imports for common usage
pub mod prelude {
    pub use crate::{
        Clock, ItemKind, ItemStatus, ItemStore, NewItemInput, ReviewItem, ReviewScheduler,
        SchedulerConfig, SchedulerError, StoreError, TrackerStats,
    };
}
