//! Totals over things that carry a count or a sum, where missing entries count
//! as zero.

/// Something with a count.
pub trait Counted {
    fn count(&self) -> i64;
}

/// Something with a sum.
pub trait Summed {
    fn sum(&self) -> i64;
}

/// The count of `item`, or `0` if there is none.
pub fn count_or_zero<C: Counted + ?Sized>(item: Option<&C>) -> i64 {
    item.map_or(0, Counted::count)
}

/// The sum of `item`, or `0` if there is none.
pub fn sum_or_zero<S: Summed + ?Sized>(item: Option<&S>) -> i64 {
    item.map_or(0, Summed::sum)
}

/// Adds up the counts of all present items.
///
/// ```
/// use extrautils_collections::{total_count, Counted};
///
/// struct Bucket(i64);
///
/// impl Counted for Bucket {
///     fn count(&self) -> i64 {
///         self.0
///     }
/// }
///
/// let buckets = [Some(Bucket(2)), None, Some(Bucket(5))];
/// assert_eq!(total_count(buckets.iter().map(Option::as_ref)), 7);
/// ```
pub fn total_count<'a, C, I>(items: I) -> i64
where
    C: Counted + 'a,
    I: IntoIterator<Item = Option<&'a C>>,
{
    items.into_iter().map(count_or_zero).sum()
}

/// Adds up the sums of all present items.
pub fn sum_total<'a, S, I>(items: I) -> i64
where
    S: Summed + 'a,
    I: IntoIterator<Item = Option<&'a S>>,
{
    items.into_iter().map(sum_or_zero).sum()
}
