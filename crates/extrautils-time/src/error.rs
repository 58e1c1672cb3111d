//! Error types for the time crate.

use thiserror::Error;

/// Misuse of a stopwatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StopwatchError {
    /// `start` was called on a running stopwatch.
    #[error("this stopwatch has already been started")]
    AlreadyStarted,

    /// Time was read from a stopwatch that was never started.
    #[error("this stopwatch has not yet been started")]
    NotStarted,
}

/// Errors from calendar calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateError {
    /// Year outside the supported range: `1..=9999` for Easter, chrono's
    /// calendar for [`YearMonth`](crate::YearMonth).
    #[error("year {0} out of bounds")]
    YearOutOfBounds(i32),

    /// Month number outside `1..=12`.
    #[error("invalid month: {0}")]
    InvalidMonth(u32),
}
