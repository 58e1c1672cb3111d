//! extrautils-time - Stopwatches, date ranges and Czech working days
//!
//! # Timing
//!
//! ```
//! use extrautils_time::{Stopwatch, TaskStopwatch};
//!
//! let watch = TaskStopwatch::started();
//! // ... work ...
//! println!("took {}", watch.formatted().unwrap());
//! ```
//!
//! [`format_nanos`] picks a unit and keeps about four significant digits,
//! so durations from nanoseconds to minutes stay readable.
//!
//! # Calendar
//!
//! - [`DateRange`] and [`MonthRange`] iterate inclusive ranges of days and
//!   months.
//! - [`easter_sunday`] computes Gregorian Easter for years `1..=9999`.
//! - [`is_czech_holiday`], [`next_czech_week_day`] and
//!   [`previous_czech_week_day`] answer working-day questions for Czechia.
//! - [`http_formatted`] renders instants as HTTP dates.

mod error;
mod format;
mod holidays;
mod http;
mod range;
mod stopwatch;

// Re-export public API
pub use error::{DateError, StopwatchError};
pub use format::format_nanos;
pub use holidays::{
    easter_sunday, is_czech_holiday, is_easter_friday, is_easter_monday, is_easter_sunday,
    next_czech_week_day, previous_czech_week_day, EASTER_YEARS,
};
pub use http::{http_formatted, now_http_formatted};
pub use range::{DateRange, MonthRange, YearMonth};
pub use stopwatch::{Stopwatch, SyncTaskStopwatch, TaskStopwatch};
