//! Clock seam - the single source of "today"
//!
//! Every scheduling operation reads `today()` exactly once, so a single
//! rebalancing pass stays internally consistent even if wall-clock time
//! advances mid-computation.

use chrono::{Local, NaiveDate};

/// Supplies the current date, normalized to a day boundary
pub trait Clock {
    /// The current date with time-of-day stripped
    fn today(&self) -> NaiveDate;
}

/// Production clock backed by the local wall clock
///
/// Review dates are local-midnight aligned throughout the crate; mixing in
/// UTC days here would shift "overdue vs due today" by one day near timezone
/// boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fixed clock for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
