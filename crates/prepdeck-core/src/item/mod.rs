//! Item module - Core types for reviewable practice items
//!
//! One shared shape covers problems and concepts: both carry a confidence
//! rating, a status, and an optional day-aligned next-review date.

mod record;

pub use record::{ItemKind, ItemStatus, NewItemInput, ReviewItem};

use serde::{Deserialize, Serialize};

// ============================================================================
// TRACKER STATISTICS
// ============================================================================

/// Aggregate counts over the tracked collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerStats {
    /// Total number of items
    pub total: usize,
    /// Items completed or mastered
    pub completed: usize,
    /// Items mastered
    pub mastered: usize,
    /// Items due today (includes overdue)
    pub due_today: usize,
    /// Items strictly past their review day
    pub overdue: usize,
    /// Items without a review date
    pub unscheduled: usize,
}
