//! Weekday-aware resolution of the previous and next workday.
//!
//! Given a reference date, the next workday is normally the following
//! calendar day and the previous workday the preceding one. Two shortcuts
//! skip a weekend: on a Friday the next workday is three days ahead, and on
//! a Monday the previous workday is three days back. The shortcuts are
//! caller assertions; the reference date's real weekday is not consulted.
//!
//! # Partial overrides
//!
//! Any of year, month, or day of a neighbor can be given explicitly. When at
//! least one is given, a single default date (reference ± 1 day, never the
//! shortcut) is computed and each missing component is taken from it
//! independently. The mixed components are then normalized as a whole. No
//! attempt is made to keep an overridden day consistent with a defaulted
//! month.

use chrono::Weekday;
use serde::Serialize;

use crate::calendar::CalendarDate;
use crate::error::{Result, WorklogError};

/// Days jumped by the Friday and Monday shortcuts.
const WEEKEND_SKIP_DAYS: i64 = 3;

/// Explicit components for one neighbor date. `None` means "not provided".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateOverride {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
}

impl DateOverride {
    /// True when no component was provided.
    pub fn is_unset(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }

    /// Substitute each provided component into `default`, one at a time.
    fn overlay(&self, default: CalendarDate) -> Result<CalendarDate> {
        CalendarDate::new(
            self.year.unwrap_or(default.year()),
            self.month.unwrap_or(default.month() as i32),
            self.day.unwrap_or(default.day() as i32),
        )
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Next,
    Previous,
}

impl Direction {
    fn sign(self) -> i64 {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }

    fn noun(self) -> &'static str {
        match self {
            Direction::Next => "next",
            Direction::Previous => "previous",
        }
    }

    fn shortcut_weekday(self) -> Weekday {
        match self {
            Direction::Next => Weekday::Fri,
            Direction::Previous => Weekday::Mon,
        }
    }
}

/// Resolve the next workday after `reference`.
///
/// With no explicit components this is `reference + 3 days` when
/// `friday_shortcut` is set and `reference + 1 day` otherwise. With any
/// explicit component the shortcut is ignored; see the module docs.
///
/// # Examples
///
/// ```
/// use worklog_engine::{resolve_next, CalendarDate, DateOverride};
///
/// let friday = CalendarDate::new(2025, 2, 28).unwrap();
/// let monday = resolve_next(friday, true, &DateOverride::default()).unwrap();
/// assert_eq!(monday.to_string(), "2025-Mar-3");
/// ```
pub fn resolve_next(
    reference: CalendarDate,
    friday_shortcut: bool,
    overrides: &DateOverride,
) -> Result<CalendarDate> {
    resolve_neighbor(reference, Direction::Next, friday_shortcut, overrides)
}

/// Resolve the previous workday before `reference`.
///
/// Mirror image of [`resolve_next`]: `reference - 3 days` when
/// `monday_shortcut` is set and nothing explicit is given, otherwise the
/// overlay of `overrides` onto `reference - 1 day`.
pub fn resolve_previous(
    reference: CalendarDate,
    monday_shortcut: bool,
    overrides: &DateOverride,
) -> Result<CalendarDate> {
    resolve_neighbor(reference, Direction::Previous, monday_shortcut, overrides)
}

fn resolve_neighbor(
    reference: CalendarDate,
    direction: Direction,
    shortcut: bool,
    overrides: &DateOverride,
) -> Result<CalendarDate> {
    let noun = direction.noun();

    if overrides.is_unset() {
        log::debug!("Easy case for {noun} day's calculation");
        if shortcut && reference.weekday() != direction.shortcut_weekday() {
            log::debug!(
                "{noun} day shortcut used but {reference} is a {}",
                reference.weekday()
            );
        }
        let days = if shortcut { WEEKEND_SKIP_DAYS } else { 1 };
        return reference.add_days(direction.sign() * days);
    }

    let default = reference.add_days(direction.sign())?;
    log::debug!(
        "Hard case for {noun} day's (default {noun}={default}) calculation: y: {:?}; m: {:?}; d: {:?}",
        overrides.year,
        overrides.month,
        overrides.day
    );
    overrides.overlay(default)
}

// ── Worklog request ─────────────────────────────────────────────────────────

/// Everything needed to resolve one worklog page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorklogRequest {
    /// The day the worklog page is for.
    pub current: CalendarDate,
    /// Explicit components of the next workday.
    pub next: DateOverride,
    /// Explicit components of the previous workday.
    pub previous: DateOverride,
    /// The current day is a Friday; skip ahead to Monday.
    pub friday: bool,
    /// The current day is a Monday; skip back to Friday.
    pub monday: bool,
}

impl WorklogRequest {
    /// A request for `current` with no overrides and no shortcuts.
    pub fn new(current: CalendarDate) -> Self {
        WorklogRequest {
            current,
            next: DateOverride::default(),
            previous: DateOverride::default(),
            friday: false,
            monday: false,
        }
    }

    /// Reject combinations that cannot mean anything.
    ///
    /// # Errors
    ///
    /// Returns [`WorklogError::ConflictingShortcuts`] when both the Friday
    /// and Monday shortcuts are set.
    pub fn validate(&self) -> Result<()> {
        if self.friday && self.monday {
            return Err(WorklogError::ConflictingShortcuts);
        }
        Ok(())
    }

    /// Combinations that are allowed but probably not what the user meant.
    ///
    /// An explicit day makes the matching shortcut a no-op.
    pub fn warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.friday && self.next.day.is_some() {
            warnings.push("Providing -nd with -friday is weird");
        }
        if self.monday && self.previous.day.is_some() {
            warnings.push("Providing -pd with -monday is weird");
        }
        warnings
    }
}

/// The resolved previous, current and next workdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedWorklog {
    pub previous: CalendarDate,
    pub current: CalendarDate,
    pub next: CalendarDate,
}

impl ResolvedWorklog {
    /// Render as a `{{Worklog|...}}` template; see [`format_wiki_template`].
    pub fn to_wiki(&self) -> String {
        format_wiki_template(&self.previous, &self.current, &self.next)
    }
}

/// Validate `request` and resolve both neighbors of its current day.
///
/// # Errors
///
/// Returns [`WorklogError::ConflictingShortcuts`] for an invalid request and
/// [`WorklogError::InvalidDate`] if a neighbor is unrepresentable.
pub fn resolve_worklog(request: &WorklogRequest) -> Result<ResolvedWorklog> {
    request.validate()?;

    let next = resolve_next(request.current, request.friday, &request.next)?;
    let previous = resolve_previous(request.current, request.monday, &request.previous)?;

    log::debug!("Yesterday is {previous}");
    log::debug!("Today is {}", request.current);
    log::debug!("Tomorrow is {next}");

    Ok(ResolvedWorklog {
        previous,
        current: request.current,
        next,
    })
}

/// Render the worklog wiki template for a resolved triple.
///
/// `currentday` is zero-padded to two digits; `nextday` and `prevday` are
/// not. The result ends with a single newline.
///
/// # Examples
///
/// ```
/// use worklog_engine::{format_wiki_template, CalendarDate};
///
/// let prev = CalendarDate::new(2024, 12, 31).unwrap();
/// let today = CalendarDate::new(2025, 1, 2).unwrap();
/// let next = CalendarDate::new(2025, 1, 3).unwrap();
/// assert_eq!(
///     format_wiki_template(&prev, &today, &next),
///     "{{Worklog|currentyear=2025|currentmonth=Jan|currentday=02|nextyear=2025|nextmonth=Jan|nextday=3|prevyear=2024|prevmonth=Dec|prevday=31}}\n"
/// );
/// ```
pub fn format_wiki_template(
    previous: &CalendarDate,
    current: &CalendarDate,
    next: &CalendarDate,
) -> String {
    format!(
        "{{{{Worklog|currentyear={}|currentmonth={}|currentday={:02}\
         |nextyear={}|nextmonth={}|nextday={}\
         |prevyear={}|prevmonth={}|prevday={}}}}}\n",
        current.year(),
        current.month_abbrev(),
        current.day(),
        next.year(),
        next.month_abbrev(),
        next.day(),
        previous.year(),
        previous.month_abbrev(),
        previous.day(),
    )
}

// ── Tests ───────────────────────────────────────────────────────────────────
