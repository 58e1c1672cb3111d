//! Summary statistics over decimal values.
//!
//! Averages are rounded half-up (away from zero) to the largest scale among
//! the inputs, so `[1.00, 2.00, 3.00, 4.00]` averages to `2.50` and `[1, 2]`
//! to `2`.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::StatsError;

/// Count, extremes and averages of a set of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsResult {
    pub count: usize,
    pub min: Decimal,
    pub max: Decimal,
    pub mean: Decimal,
    pub median: Decimal,
}

/// Computes [`StatsResult`] for `values`, in any order.
///
/// ```
/// use extrautils_collections::stats;
/// use rust_decimal::Decimal;
///
/// let result = stats([4, 1, 3, 2].map(Decimal::from)).unwrap();
/// assert_eq!(result.count, 4);
/// assert_eq!(result.min, Decimal::from(1));
/// assert_eq!(result.max, Decimal::from(4));
/// // 2.5 rounded half-up at scale 0
/// assert_eq!(result.mean, Decimal::from(3));
/// assert_eq!(result.median, Decimal::from(3));
///
/// assert!(stats(Vec::<Decimal>::new()).is_err());
/// ```
pub fn stats<I>(values: I) -> Result<StatsResult, StatsError>
where
    I: IntoIterator<Item = Decimal>,
{
    let mut sorted: Vec<Decimal> = values.into_iter().collect();
    if sorted.is_empty() {
        return Err(StatsError::EmptyData);
    }
    sorted.sort_unstable();

    let count = sorted.len();
    let sum = sorted
        .iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(*value))
        .ok_or(StatsError::Overflow)?;

    Ok(StatsResult {
        count,
        min: sorted[0],
        max: sorted[count - 1],
        mean: half_up_div(sum, Decimal::from(count))?,
        median: median(&sorted)?,
    })
}

fn median(sorted: &[Decimal]) -> Result<Decimal, StatsError> {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        return Ok(sorted[mid]);
    }
    let (low, high) = (sorted[mid - 1], sorted[mid]);
    if low == high {
        return Ok(low);
    }
    let sum = low.checked_add(high).ok_or(StatsError::Overflow)?;
    half_up_div(sum, Decimal::TWO)
}

// Keeps the dividend's scale.
fn half_up_div(dividend: Decimal, divisor: Decimal) -> Result<Decimal, StatsError> {
    let quotient = dividend
        .checked_div(divisor)
        .ok_or(StatsError::Overflow)?;
    let mut rounded =
        quotient.round_dp_with_strategy(dividend.scale(), RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dividend.scale());
    Ok(rounded)
}
