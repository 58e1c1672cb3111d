//! Easter dates and Czech public holidays.
//!
//! The holiday list reflects Czech law as of 2018. Changes in later years
//! should be added as year-guarded branches so that older dates keep their
//! answers.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use chrono::{Datelike, Days, Duration, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use tracing::trace;

use crate::error::DateError;

/// Years accepted by [`easter_sunday`].
pub const EASTER_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// Computed Easter Sundays, shared by every thread.
static EASTER_CACHE: Lazy<Mutex<HashMap<i32, NaiveDate>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Easter Sunday of `year` in the Gregorian calendar.
///
/// Uses the anonymous Gregorian algorithm. Results are cached per process.
///
/// ```
/// use chrono::NaiveDate;
/// use extrautils_time::easter_sunday;
///
/// assert_eq!(easter_sunday(2018), Ok(NaiveDate::from_ymd_opt(2018, 4, 1).unwrap()));
/// assert!(easter_sunday(0).is_err());
/// ```
pub fn easter_sunday(year: i32) -> Result<NaiveDate, DateError> {
    if !EASTER_YEARS.contains(&year) {
        return Err(DateError::YearOutOfBounds(year));
    }

    let mut cache = EASTER_CACHE
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(date) = cache.get(&year) {
        return Ok(*date);
    }

    let date = compute_easter(year).ok_or(DateError::YearOutOfBounds(year))?;
    trace!(year, %date, "computed easter sunday");
    cache.insert(year, date);
    Ok(date)
}

fn compute_easter(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let g = (8 * b + 13) / 25;
    let h = (19 * a + b - d - g + 15) % 30;
    let j = c / 4;
    let k = c % 4;
    let m = (a + 11 * h) / 319;
    let r = (2 * e + 2 * j - k - h + m + 32) % 7;
    let month = (h - m + r + 90) / 25;
    let day = (h - m + r + month + 19) % 32;
    NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
}

fn easter_offset(date: NaiveDate, days_after_sunday: i64) -> bool {
    easter_sunday(date.year()).map_or(false, |sunday| {
        sunday.checked_add_signed(Duration::days(days_after_sunday)) == Some(date)
    })
}

/// Good Friday, two days before Easter Sunday.
pub fn is_easter_friday(date: NaiveDate) -> bool {
    easter_offset(date, -2)
}

pub fn is_easter_sunday(date: NaiveDate) -> bool {
    easter_offset(date, 0)
}

pub fn is_easter_monday(date: NaiveDate) -> bool {
    easter_offset(date, 1)
}

/// Whether `date` is a non-working day in Czechia: a weekend or a public
/// holiday.
///
/// ```
/// use chrono::NaiveDate;
/// use extrautils_time::is_czech_holiday;
///
/// let day = |m, d| NaiveDate::from_ymd_opt(2019, m, d).unwrap();
/// assert!(is_czech_holiday(day(11, 17)));
/// assert!(is_czech_holiday(day(4, 22)));
/// assert!(!is_czech_holiday(day(4, 23)));
/// ```
pub fn is_czech_holiday(date: NaiveDate) -> bool {
    if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        return true;
    }
    let day = date.day();
    match date.month() {
        1 => day == 1,
        3 | 4 => is_easter_friday(date) || is_easter_monday(date),
        5 => day == 1 || day == 8,
        7 => (5..=6).contains(&day),
        9 | 10 => day == 28,
        11 => day == 17,
        12 => (24..=26).contains(&day),
        _ => false,
    }
}

/// The first working day on or after `date`.
///
/// `None` only if the search runs off the end of the calendar.
pub fn next_czech_week_day(date: NaiveDate) -> Option<NaiveDate> {
    let mut day = date;
    while is_czech_holiday(day) {
        day = day.checked_add_days(Days::new(1))?;
    }
    Some(day)
}

/// The last working day on or before `date`.
pub fn previous_czech_week_day(date: NaiveDate) -> Option<NaiveDate> {
    let mut day = date;
    while is_czech_holiday(day) {
        day = day.checked_sub_days(Days::new(1))?;
    }
    Some(day)
}
