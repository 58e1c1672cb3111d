//! Inclusive day and month ranges.

use std::fmt;
use std::iter::FusedIterator;

use chrono::{Datelike, NaiveDate};

use crate::error::DateError;

/// Every day from `start` to `end`, both inclusive.
///
/// Empty when `start` is after `end`.
///
/// ```
/// use chrono::NaiveDate;
/// use extrautils_time::DateRange;
///
/// let start = NaiveDate::from_ymd_opt(2018, 3, 30).unwrap();
/// let end = NaiveDate::from_ymd_opt(2018, 4, 2).unwrap();
/// assert_eq!(DateRange::new(start, end).count(), 4);
/// assert_eq!(DateRange::new(end, start).count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange {
            next: Some(start),
            end,
        }
    }

    fn empty() -> Self {
        DateRange {
            next: None,
            end: NaiveDate::MIN,
        }
    }

    /// The day the next call to `next` would yield, if any.
    pub fn peek(&self) -> Option<NaiveDate> {
        self.next.filter(|day| *day <= self.end)
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let day = self.peek()?;
        self.next = day.succ_opt();
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.peek().map_or(0, |day| {
            let days = self.end.signed_duration_since(day).num_days() + 1;
            usize::try_from(days).unwrap_or(usize::MAX)
        });
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateRange {}

impl FusedIterator for DateRange {}

/// A month of a particular year.
///
/// Ordered chronologically and shown as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Fails unless `month` is in `1..=12` and `year` is within chrono's
    /// calendar.
    pub fn new(year: i32, month: u32) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        if !(NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(&year) {
            return Err(DateError::YearOutOfBounds(year));
        }
        Ok(YearMonth { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following month, rolling over into the next year.
    ///
    /// `None` past the last month chrono can represent.
    pub fn succ(&self) -> Option<Self> {
        if self.month == 12 {
            YearMonth::new(self.year.checked_add(1)?, 1).ok()
        } else {
            Some(YearMonth {
                year: self.year,
                month: self.month + 1,
            })
        }
    }

    /// The preceding month, rolling back into the previous year.
    ///
    /// `None` before the first month chrono can represent.
    pub fn pred(&self) -> Option<Self> {
        if self.month == 1 {
            YearMonth::new(self.year.checked_sub(1)?, 12).ok()
        } else {
            Some(YearMonth {
                year: self.year,
                month: self.month - 1,
            })
        }
    }

    /// First day of the month.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Every day of the month.
    pub fn days(&self) -> DateRange {
        let Some(first) = self.first_day() else {
            return DateRange::empty();
        };
        let last = self
            .succ()
            .and_then(|next| next.first_day())
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX);
        DateRange::new(first, last)
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Every month from `start` to `end`, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRange {
    next: Option<YearMonth>,
    end: YearMonth,
}

impl MonthRange {
    pub fn new(start: YearMonth, end: YearMonth) -> Self {
        MonthRange {
            next: Some(start),
            end,
        }
    }

    pub fn peek(&self) -> Option<YearMonth> {
        self.next.filter(|month| *month <= self.end)
    }
}

impl Iterator for MonthRange {
    type Item = YearMonth;

    fn next(&mut self) -> Option<YearMonth> {
        let month = self.peek()?;
        self.next = month.succ();
        Some(month)
    }
}

impl FusedIterator for MonthRange {}
