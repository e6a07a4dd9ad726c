//! Calendar dates as the worklog and on-call tools see them.
//!
//! A [`CalendarDate`] is an immutable year/month/day triple. Construction
//! never rejects out-of-range components: month overflow carries into the
//! year and day overflow carries into the month, so `2024-12-32` is
//! `2025-01-01` and `2025-03-00` is `2025-02-28`. Month lengths and leap
//! years come from `chrono`; nothing here reimplements them.
//!
//! All arithmetic is done in whole calendar days on the local calendar, so
//! daylight-saving transitions cannot move a date across midnight.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate, TimeDelta, Weekday};
use serde::Serialize;

use crate::error::{Result, WorklogError};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Sentinel returned by [`month_abbrev`] for months outside 1-12.
pub const UNKNOWN_MONTH: &str = "Unknown";

/// Three-letter English abbreviation for a month ordinal (1 = January).
///
/// Total: any value outside 1-12 yields [`UNKNOWN_MONTH`].
///
/// # Examples
///
/// ```
/// use worklog_engine::calendar::month_abbrev;
///
/// assert_eq!(month_abbrev(1), "Jan");
/// assert_eq!(month_abbrev(12), "Dec");
/// assert_eq!(month_abbrev(13), "Unknown");
/// ```
pub fn month_abbrev(month: i64) -> &'static str {
    match month
        .checked_sub(1)
        .and_then(|idx| usize::try_from(idx).ok())
        .and_then(|idx| MONTH_ABBREVIATIONS.get(idx))
    {
        Some(name) => name,
        None => {
            log::warn!("Got an unexpected month, which is weird. m={month}");
            UNKNOWN_MONTH
        }
    }
}

/// A single day on the local calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "DateParts")]
pub struct CalendarDate {
    date: NaiveDate,
}

/// Serialized shape of a [`CalendarDate`].
#[derive(Debug, Clone, Copy, Serialize)]
struct DateParts {
    year: i32,
    month: u32,
    day: u32,
}

impl From<CalendarDate> for DateParts {
    fn from(d: CalendarDate) -> Self {
        DateParts {
            year: d.year(),
            month: d.month(),
            day: d.day(),
        }
    }
}

impl CalendarDate {
    /// Build a date from possibly out-of-range components, normalizing them.
    ///
    /// # Errors
    ///
    /// Returns [`WorklogError::InvalidDate`] only when the normalized date
    /// falls outside the range `chrono` can represent.
    ///
    /// # Examples
    ///
    /// ```
    /// use worklog_engine::CalendarDate;
    ///
    /// let d = CalendarDate::new(2024, 12, 32).unwrap();
    /// assert_eq!((d.year(), d.month(), d.day()), (2025, 1, 1));
    /// ```
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self> {
        let out_of_range =
            || WorklogError::InvalidDate(format!("{year}-{month}-{day} is out of range"));

        let months = i64::from(year) * 12 + i64::from(month) - 1;
        let norm_year = i32::try_from(months.div_euclid(12)).map_err(|_| out_of_range())?;
        let norm_month = months.rem_euclid(12) as u32 + 1;

        let first = NaiveDate::from_ymd_opt(norm_year, norm_month, 1).ok_or_else(out_of_range)?;
        let date = TimeDelta::try_days(i64::from(day) - 1)
            .and_then(|delta| first.checked_add_signed(delta))
            .ok_or_else(out_of_range)?;

        Ok(CalendarDate { date })
    }

    /// Today's date on the local calendar.
    pub fn today() -> Self {
        CalendarDate {
            date: Local::now().date_naive(),
        }
    }

    /// A new date `days` calendar days away (negative goes backwards).
    ///
    /// # Errors
    ///
    /// Returns [`WorklogError::InvalidDate`] if the result is unrepresentable.
    pub fn add_days(self, days: i64) -> Result<Self> {
        TimeDelta::try_days(days)
            .and_then(|delta| self.date.checked_add_signed(delta))
            .map(|date| CalendarDate { date })
            .ok_or_else(|| WorklogError::InvalidDate(format!("{self} {days:+} days")))
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Abbreviated month name, e.g. `"Feb"`.
    pub fn month_abbrev(&self) -> &'static str {
        month_abbrev(i64::from(self.month()))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year(), self.month_abbrev(), self.day())
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
