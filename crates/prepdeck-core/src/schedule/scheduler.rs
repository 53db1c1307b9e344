//! Review scheduling algorithms
//!
//! Three operations over an immutable item snapshot:
//!
//! - [`ReviewScheduler::place_next_review`]: least-loaded day inside a
//!   confidence-tier window, earliest day winning ties
//! - [`ReviewScheduler::redistribute`]: global rebalance under a per-day cap,
//!   urgency order preserved (overdue, then due today, then future)
//! - [`ReviewScheduler::apply_buffer`]: uniform forward shift of every
//!   non-overdue item
//!
//! All three are single-pass and deterministic; the caller replaces its
//! stored collection with the returned one.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::item::ReviewItem;
use crate::schedule::clock::{Clock, SystemClock};
use crate::schedule::load::ReviewLoadIndex;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Scheduler error type
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    /// A configured review window is empty or starts today
    #[error("invalid review window [{min_days}, {max_days}]: must satisfy 1 <= min <= max")]
    InvalidWindow {
        /// Configured lower bound (days from today)
        min_days: u32,
        /// Configured upper bound (days from today)
        max_days: u32,
    },
    /// Per-day redistribution cap must be at least 1
    #[error("daily cap must be at least 1")]
    InvalidDailyCap,
    /// Buffer shift must be at least one day
    #[error("buffer days must be at least 1")]
    InvalidBufferDays,
}

/// Scheduler result type
pub type Result<T> = std::result::Result<T, SchedulerError>;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Highest meaningful confidence rating
pub const MAX_CONFIDENCE: u8 = 5;

/// Default per-day cap enforced by redistribution
pub const DEFAULT_DAILY_CAP: usize = 3;

/// Default window for confidence 0..=2 (shaky recall, short interval)
pub const LOW_CONFIDENCE_WINDOW: ReviewWindow = ReviewWindow::new(3, 7);

/// Default window for confidence 3..=4
pub const MEDIUM_CONFIDENCE_WINDOW: ReviewWindow = ReviewWindow::new(7, 14);

/// Default window for confidence 5 (solid recall, long interval)
pub const HIGH_CONFIDENCE_WINDOW: ReviewWindow = ReviewWindow::new(14, 21);

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Inclusive `[min_days, max_days]` day-offset range searched for a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWindow {
    /// Earliest candidate offset, in days from today
    pub min_days: u32,
    /// Latest candidate offset, in days from today
    pub max_days: u32,
}

impl ReviewWindow {
    /// Create a window spanning `[min_days, max_days]` inclusive
    pub const fn new(min_days: u32, max_days: u32) -> Self {
        Self { min_days, max_days }
    }

    fn validate(&self) -> Result<()> {
        if self.min_days == 0 || self.min_days > self.max_days {
            return Err(SchedulerError::InvalidWindow {
                min_days: self.min_days,
                max_days: self.max_days,
            });
        }
        Ok(())
    }
}

/// Tunable scheduling parameters
///
/// Defaults: `[3, 7]` for confidence 0-2, `[7, 14]` for 3-4, `[14, 21]`
/// for 5, and at most 3 reviews per day after redistribution. Custom tiers
/// are validated up front; an empty window is
/// rejected before any scheduling runs rather than producing an out-of-range
/// date later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerConfig {
    /// Window for confidence 0..=2
    pub low_confidence: ReviewWindow,
    /// Window for confidence 3..=4
    pub medium_confidence: ReviewWindow,
    /// Window for confidence 5
    pub high_confidence: ReviewWindow,
    /// Hard per-day cap enforced by redistribution
    pub daily_cap: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            low_confidence: LOW_CONFIDENCE_WINDOW,
            medium_confidence: MEDIUM_CONFIDENCE_WINDOW,
            high_confidence: HIGH_CONFIDENCE_WINDOW,
            daily_cap: DEFAULT_DAILY_CAP,
        }
    }
}

impl SchedulerConfig {
    /// Check windows and cap, failing fast on misconfiguration
    pub fn validate(&self) -> Result<()> {
        self.low_confidence.validate()?;
        self.medium_confidence.validate()?;
        self.high_confidence.validate()?;
        if self.daily_cap == 0 {
            return Err(SchedulerError::InvalidDailyCap);
        }
        Ok(())
    }

    /// The search window for a post-rating confidence value
    pub fn window_for(&self, confidence: u8) -> ReviewWindow {
        match confidence {
            0..=2 => self.low_confidence,
            3..=4 => self.medium_confidence,
            _ => self.high_confidence,
        }
    }
}

// ============================================================================
// SCHEDULER
// ============================================================================

/// Result of a buffer-day pass
#[derive(Debug, Clone)]
pub struct BufferOutcome {
    /// The full collection with shifted dates
    pub items: Vec<ReviewItem>,
    /// How many items were moved
    pub shifted: usize,
}

/// The scheduling engine
///
/// Pure and stateless apart from its configuration and clock: every
/// operation snapshots `today()` once, computes over the given items, and
/// returns new dates without mutating anything.
#[derive(Debug, Clone)]
pub struct ReviewScheduler<C: Clock = SystemClock> {
    config: SchedulerConfig,
    clock: C,
}

impl ReviewScheduler<SystemClock> {
    /// Scheduler with the default tiers and the system clock
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
            clock: SystemClock,
        }
    }

    /// Scheduler with custom tiers/cap, validated up front
    pub fn with_config(config: SchedulerConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for ReviewScheduler<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ReviewScheduler<C> {
    /// Scheduler with an explicit clock (deterministic tests)
    pub fn with_clock(config: SchedulerConfig, clock: C) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, clock })
    }

    /// The active configuration
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Today according to the scheduler's clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Pick the next review day for a freshly rated item
    ///
    /// Scans the confidence tier's window in ascending order and keeps the
    /// first day with the strictly smallest load, biasing placement toward
    /// sooner review when load is equal. Confidence above
    /// [`MAX_CONFIDENCE`] is clamped; callers are expected to validate
    /// beforehand.
    pub fn place_next_review(&self, confidence: u8, items: &[ReviewItem]) -> NaiveDate {
        let confidence = confidence.min(MAX_CONFIDENCE);
        let today = self.clock.today();
        let window = self.config.window_for(confidence);
        let index = ReviewLoadIndex::new(items);

        let mut best_offset = window.min_days;
        let mut best_load = usize::MAX;
        for offset in window.min_days..=window.max_days {
            let load = index.load_on(today + Days::new(u64::from(offset)));
            if load < best_load {
                best_load = load;
                best_offset = offset;
            }
        }

        let chosen = today + Days::new(u64::from(best_offset));
        tracing::debug!(
            confidence,
            offset = best_offset,
            load = best_load,
            day = %chosen,
            "placed next review"
        );
        chosen
    }

    /// Rebalance every scheduled item under the per-day cap
    ///
    /// Scheduled items are bucketed against today (overdue / due today /
    /// future), each bucket stable-sorted by day, then refilled greedily from
    /// today forward, at most `daily_cap` per day. The fill cursor never
    /// moves backward, so the cap holds on every date including the first.
    /// Items without a review date pass through untouched, after the
    /// rescheduled ones.
    pub fn redistribute(&self, items: &[ReviewItem]) -> Vec<ReviewItem> {
        let today = self.clock.today();

        let mut overdue = Vec::new();
        let mut due_today = Vec::new();
        let mut future = Vec::new();
        let mut unscheduled = Vec::new();

        for item in items {
            match item.review_day() {
                None => unscheduled.push(item.clone()),
                Some(day) if day < today => overdue.push(item.clone()),
                Some(day) if day == today => due_today.push(item.clone()),
                Some(_) => future.push(item.clone()),
            }
        }

        // Stable sorts: equal days keep their input order
        overdue.sort_by_key(ReviewItem::review_day);
        due_today.sort_by_key(ReviewItem::review_day);
        future.sort_by_key(ReviewItem::review_day);

        let mut result = Vec::with_capacity(items.len());
        let mut cursor = today;
        let mut filled = 0usize;

        for mut item in overdue.into_iter().chain(due_today).chain(future) {
            if filled >= self.config.daily_cap {
                cursor = cursor + Days::new(1);
                filled = 0;
            }
            item.schedule_on(cursor);
            filled += 1;
            result.push(item);
        }

        let rescheduled = result.len();
        result.extend(unscheduled);

        tracing::info!(
            rescheduled,
            cap = self.config.daily_cap,
            last_day = %cursor,
            "redistributed review dates"
        );
        result
    }

    /// Shift every non-overdue scheduled item forward by `buffer_days`
    ///
    /// Items strictly before today stay where they are; items due today or
    /// later move by exactly `buffer_days`. No cross-item load awareness, by
    /// contrast with [`ReviewScheduler::redistribute`].
    pub fn apply_buffer(&self, items: &[ReviewItem], buffer_days: u32) -> Result<BufferOutcome> {
        if buffer_days == 0 {
            return Err(SchedulerError::InvalidBufferDays);
        }

        let today = self.clock.today();
        let mut shifted = 0usize;
        let mut result = Vec::with_capacity(items.len());

        for item in items {
            let mut item = item.clone();
            if let Some(day) = item.review_day() {
                if day >= today {
                    item.schedule_on(day + Days::new(u64::from(buffer_days)));
                    shifted += 1;
                }
            }
            result.push(item);
        }

        tracing::info!(shifted, buffer_days, "applied buffer days");
        Ok(BufferOutcome {
            items: result,
            shifted,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
