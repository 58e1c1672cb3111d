//! Error types for the collections crate.

use thiserror::Error;

/// Reasons summary statistics can't be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    /// No values were given.
    #[error("cannot compute stats for empty data")]
    EmptyData,

    /// The sum of the values doesn't fit in a `Decimal`.
    #[error("sum of values overflows")]
    Overflow,
}
