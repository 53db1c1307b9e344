//! In-memory item store
//!
//! The mutable collaborator around the pure scheduler. Owns the item
//! collection, delegates every date decision to [`ReviewScheduler`] over a
//! snapshot, and swaps in the returned collection. Single logical actor;
//! callers in a shared context must serialize the bulk operations
//! themselves (they read-then-write the whole collection).

use chrono::{Local, NaiveDate};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::item::{ItemStatus, NewItemInput, ReviewItem, TrackerStats};
use crate::schedule::{
    Clock, ReviewScheduler, SchedulerConfig, SchedulerError, SystemClock, MAX_CONFIDENCE,
};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Store error type
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Unknown item id
    #[error("item not found: {0}")]
    NotFound(String),
    /// Confidence rating outside 0..=5
    #[error("confidence must be in 0..=5, got {0}")]
    InvalidConfidence(u8),
    /// Scheduler rejected the operation
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
}

/// Store result type
pub type Result<T> = std::result::Result<T, StoreError>;

// ============================================================================
// ITEM STORE
// ============================================================================

/// In-memory collection of review items plus its scheduler
///
/// Ratings and status changes route through the scheduler's window logic;
/// the manual date override deliberately does not - it writes the given day
/// verbatim.
#[derive(Debug)]
pub struct ItemStore<C: Clock = SystemClock> {
    items: Vec<ReviewItem>,
    scheduler: ReviewScheduler<C>,
}

impl ItemStore<SystemClock> {
    /// Empty store with the default scheduler configuration
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            scheduler: ReviewScheduler::new(),
        }
    }

    /// Empty store with custom scheduling parameters, validated up front
    pub fn with_config(config: SchedulerConfig) -> Result<Self> {
        Ok(Self {
            items: Vec::new(),
            scheduler: ReviewScheduler::with_config(config)?,
        })
    }
}

impl Default for ItemStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ItemStore<C> {
    /// Store with an explicit clock (deterministic tests)
    pub fn with_clock(config: SchedulerConfig, clock: C) -> Result<Self> {
        Ok(Self {
            items: Vec::new(),
            scheduler: ReviewScheduler::with_clock(config, clock)?,
        })
    }

    /// The full collection, in insertion order
    pub fn items(&self) -> &[ReviewItem] {
        &self.items
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&ReviewItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn item_mut(&mut self, id: &str) -> Result<&mut ReviewItem> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Add a new item in the unscheduled lifecycle state
    pub fn add(&mut self, input: NewItemInput) -> ReviewItem {
        let item = ReviewItem {
            id: Uuid::new_v4().to_string(),
            kind: input.kind,
            name: input.name,
            topic: input.topic,
            link: input.link,
            difficulty: input.difficulty,
            tags: input.tags,
            ..Default::default()
        };
        self.items.push(item.clone());
        item
    }

    /// Update descriptive fields only; scheduling state is untouched
    pub fn update_details(&mut self, id: &str, input: NewItemInput) -> Result<ReviewItem> {
        let item = self.item_mut(id)?;
        item.kind = input.kind;
        item.name = input.name;
        item.topic = input.topic;
        item.link = input.link;
        item.difficulty = input.difficulty;
        item.tags = input.tags;
        Ok(item.clone())
    }

    /// Record a confidence rating
    ///
    /// Derives the status from the rating and stamps `last_reviewed`. A
    /// rating of 1 or higher schedules the next review from the current
    /// collection snapshot and bumps `attempts`; a rating of 0 leaves any
    /// existing review date in place.
    pub fn rate_confidence(&mut self, id: &str, confidence: u8) -> Result<ReviewItem> {
        if confidence > MAX_CONFIDENCE {
            return Err(StoreError::InvalidConfidence(confidence));
        }
        // Snapshot placement before touching the item: the window scan
        // counts the item's own previous date as load.
        let next = (confidence >= 1)
            .then(|| self.scheduler.place_next_review(confidence, &self.items));

        let item = self.item_mut(id)?;
        item.confidence = confidence;
        item.status = ItemStatus::from_confidence(confidence);
        item.last_reviewed = Some(Local::now());
        if let Some(day) = next {
            item.schedule_on(day);
            item.attempts += 1;
        }
        Ok(item.clone())
    }

    /// Move an item to a new status
    ///
    /// `Completed` and `NeedsReview` trigger scheduling from the item's
    /// current confidence and bump `attempts`; other statuses only stamp
    /// `last_reviewed`.
    pub fn set_status(&mut self, id: &str, status: ItemStatus) -> Result<ReviewItem> {
        let confidence = self
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?
            .confidence;
        let next = status
            .triggers_review()
            .then(|| self.scheduler.place_next_review(confidence, &self.items));

        let item = self.item_mut(id)?;
        item.status = status;
        item.last_reviewed = Some(Local::now());
        if let Some(day) = next {
            item.schedule_on(day);
            item.attempts += 1;
        }
        Ok(item.clone())
    }

    /// Set the review date verbatim, bypassing the window logic entirely
    pub fn set_manual_review_date(&mut self, id: &str, day: NaiveDate) -> Result<ReviewItem> {
        let item = self.item_mut(id)?;
        item.schedule_on(day);
        Ok(item.clone())
    }

    /// Remove an item, returning it
    pub fn remove(&mut self, id: &str) -> Result<ReviewItem> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(self.items.remove(position))
    }

    /// Rebalance all review dates under the per-day cap
    ///
    /// Replaces the collection with the scheduler's output and returns how
    /// many items carry a (re)assigned date.
    pub fn redistribute(&mut self) -> usize {
        let rebalanced = self.scheduler.redistribute(&self.items);
        let rescheduled = rebalanced
            .iter()
            .filter(|item| item.next_review.is_some())
            .count();
        self.items = rebalanced;
        rescheduled
    }

    /// Push all non-overdue review dates out by `days`
    ///
    /// Returns the number of items shifted.
    pub fn add_buffer_days(&mut self, days: u32) -> Result<usize> {
        let outcome = self.scheduler.apply_buffer(&self.items, days)?;
        self.items = outcome.items;
        Ok(outcome.shifted)
    }

    /// Items due today, including overdue ones
    pub fn due_today(&self) -> Vec<&ReviewItem> {
        let today = self.scheduler.today();
        self.items.iter().filter(|item| item.is_due(today)).collect()
    }

    /// Items strictly past their review day
    pub fn overdue(&self) -> Vec<&ReviewItem> {
        let today = self.scheduler.today();
        self.items
            .iter()
            .filter(|item| item.is_overdue(today))
            .collect()
    }

    /// Sorted, deduplicated non-empty topics
    pub fn topics(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| !item.topic.is_empty())
            .map(|item| item.topic.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Aggregate counts over the collection
    pub fn stats(&self) -> TrackerStats {
        let today = self.scheduler.today();
        let mut stats = TrackerStats {
            total: self.items.len(),
            ..Default::default()
        };
        for item in &self.items {
            if matches!(item.status, ItemStatus::Completed | ItemStatus::Mastered) {
                stats.completed += 1;
            }
            if item.status == ItemStatus::Mastered {
                stats.mastered += 1;
            }
            if item.is_due(today) {
                stats.due_today += 1;
            }
            if item.is_overdue(today) {
                stats.overdue += 1;
            }
            if item.next_review.is_none() {
                stats.unscheduled += 1;
            }
        }
        stats
    }
}

// ============================================================================
// TESTS
// ============================================================================
