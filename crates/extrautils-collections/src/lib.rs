//! Collections - frequency and grouping helpers.
//!
//! - [`FrequencyExt`]: which items (or derived keys) occur once, more than
//!   once, or exactly `n` times in any iterable.
//! - [`Counted`] / [`Summed`]: totals over optional entries where a missing
//!   entry counts as zero.
//! - [`stats`]: count, extremes, mean and median of decimal values.
//! - [`DecimalExt`]: sign checks that treat zero as neither sign.
//!
//! ```rust
//! use extrautils_collections::FrequencyExt;
//!
//! struct User {
//!     email: &'static str,
//! }
//!
//! let users = [
//!     User { email: "a@x.org" },
//!     User { email: "b@x.org" },
//!     User { email: "a@x.org" },
//! ];
//!
//! let duplicates = users.iter().multiple_only_by(|u| u.email);
//! assert!(duplicates.contains("a@x.org"));
//! assert_eq!(duplicates.len(), 1);
//! ```

mod decimal;
mod error;
mod frequency;
mod stats;
mod totals;

pub use decimal::DecimalExt;
pub use error::StatsError;
pub use frequency::FrequencyExt;
pub use stats::{stats, StatsResult};
pub use totals::{count_or_zero, sum_or_zero, sum_total, total_count, Counted, Summed};
