//! Review Item - the unit the scheduler operates on
//!
//! One struct covers both entity families the tracker knows about
//! (practice problems and standalone concepts); they share the same
//! scheduling shape and differ only in [`ItemKind`].

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

// ============================================================================
// ITEM KIND
// ============================================================================

/// Kind of reviewable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A practice problem (coding exercise, system design prompt, ...)
    #[default]
    Problem,
    /// A concept studied on its own (data structure, pattern, theory)
    Concept,
}

impl ItemKind {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Problem => "problem",
            ItemKind::Concept => "concept",
        }
    }

    /// Parse from string name
    pub fn parse_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "concept" => ItemKind::Concept,
            _ => ItemKind::Problem,
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ITEM STATUS
// ============================================================================

/// Progress status of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    /// Never attempted
    #[default]
    NotStarted,
    /// Attempted but not yet solid
    InProgress,
    /// Solved/understood, still in rotation
    Completed,
    /// Flagged for another pass
    NeedsReview,
    /// Solid recall, long review intervals
    Mastered,
}

impl ItemStatus {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::NotStarted => "not-started",
            ItemStatus::InProgress => "in-progress",
            ItemStatus::Completed => "completed",
            ItemStatus::NeedsReview => "needs-review",
            ItemStatus::Mastered => "mastered",
        }
    }

    /// Status implied by a fresh confidence rating
    pub fn from_confidence(confidence: u8) -> Self {
        match confidence {
            c if c >= 4 => ItemStatus::Mastered,
            3 => ItemStatus::Completed,
            1..=2 => ItemStatus::InProgress,
            _ => ItemStatus::NotStarted,
        }
    }

    /// Whether moving to this status (re)schedules a review on its own
    pub fn triggers_review(&self) -> bool {
        matches!(self, ItemStatus::Completed | ItemStatus::NeedsReview)
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// REVIEW ITEM
// ============================================================================

/// A tracked practice item with its scheduling state
///
/// Items are created unscheduled (`next_review = None`, confidence 0). The
/// first confidence rating of 1 or higher, or a status move to
/// [`ItemStatus::Completed`] / [`ItemStatus::NeedsReview`], schedules the
/// first review. Bulk passes (redistribution, buffer days) rewrite
/// `next_review` only and leave everything else untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    /// Unique identifier (UUID v4)
    pub id: String,
    /// Problem or concept
    pub kind: ItemKind,
    /// Display name
    pub name: String,
    /// Topic/category for filtering
    pub topic: String,
    /// Optional link to the problem or resource
    pub link: Option<String>,
    /// Free-form difficulty label
    pub difficulty: Option<String>,
    /// Tags for categorization
    pub tags: Vec<String>,

    // ========== Scheduling ==========
    /// Self-rated recall confidence, 0 (never rated) to 5
    pub confidence: u8,
    /// Progress status
    pub status: ItemStatus,
    /// Number of scheduling-triggering rating/status events
    pub attempts: u32,
    /// Next scheduled review, midnight-aligned when set by this crate
    pub next_review: Option<NaiveDateTime>,
    /// Most recent rating/status event
    pub last_reviewed: Option<DateTime<Local>>,
    /// When the item was created
    pub created: DateTime<Local>,
}

impl Default for ReviewItem {
    fn default() -> Self {
        Self {
            id: String::new(),
            kind: ItemKind::Problem,
            name: String::new(),
            topic: String::new(),
            link: None,
            difficulty: None,
            tags: vec![],
            confidence: 0,
            status: ItemStatus::NotStarted,
            attempts: 0,
            next_review: None,
            last_reviewed: None,
            created: Local::now(),
        }
    }
}

impl ReviewItem {
    /// Create a new unscheduled item with the given kind and name
    pub fn new(kind: ItemKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Normalized review day, if scheduled
    ///
    /// Strips any stray time-of-day so day-equality comparisons stay exact
    /// even for dates written by foreign code.
    pub fn review_day(&self) -> Option<NaiveDate> {
        self.next_review.map(|dt| dt.date())
    }

    /// Set the review date to midnight of the given day
    pub fn schedule_on(&mut self, day: NaiveDate) {
        self.next_review = Some(day.and_time(NaiveTime::MIN));
    }

    /// Due on or before `today`; unscheduled items are never due
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.review_day().is_some_and(|day| day <= today)
    }

    /// Strictly past its review day; unscheduled items are never overdue
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.review_day().is_some_and(|day| day < today)
    }
}

// ============================================================================
// INPUT TYPES
// ============================================================================

/// Input for creating an item (also used for descriptive-field updates)
///
/// Uses `deny_unknown_fields` so scheduling fields cannot be injected
/// through the creation path.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewItemInput {
    /// Display name
    pub name: String,
    /// Problem or concept
    #[serde(default)]
    pub kind: ItemKind,
    /// Topic/category for filtering
    #[serde(default)]
    pub topic: String,
    /// Optional link to the problem or resource
    #[serde(default)]
    pub link: Option<String>,
    /// Free-form difficulty label
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Tags for categorization
    #[serde(default)]
    pub tags: Vec<String>,
}

// ============================================================================
// TESTS
// ============================================================================
