//! Schedule module - the algorithmic core
//!
//! Pure scheduling over an immutable item snapshot:
//! - Clock seam supplying a single normalized "today" per operation
//! - Review load index (per-day scheduled counts)
//! - Placement, redistribution, and buffer insertion

mod clock;
mod load;
mod scheduler;

pub use clock::{Clock, FixedClock, SystemClock};
pub use load::ReviewLoadIndex;
pub use scheduler::{
    BufferOutcome, Result, ReviewScheduler, ReviewWindow, SchedulerConfig, SchedulerError,
    DEFAULT_DAILY_CAP, HIGH_CONFIDENCE_WINDOW, LOW_CONFIDENCE_WINDOW, MAX_CONFIDENCE,
    MEDIUM_CONFIDENCE_WINDOW,
};
