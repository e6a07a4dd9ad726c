//! Argument handling shared by both binaries.
//!
//! The tools take Go-style single-dash long flags (`-cy 2025`, `-friday`).
//! clap only understands those as `--cy`, so [`normalize_args`] rewrites
//! them before parsing. Double-dash spellings pass through untouched.

use std::ffi::OsString;

use clap::Args;
use worklog_engine::{error::Result, CalendarDate};

/// Rewrite `-name` and `-name=value` to `--name` / `--name=value`.
///
/// The program name, short flags such as `-h`, and negative numbers such as
/// `-1` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(i, arg)| if i == 0 { arg } else { normalize_one(arg) })
        .collect()
}

fn normalize_one(arg: OsString) -> OsString {
    match arg.to_str() {
        Some(s) if is_single_dash_long(s) => format!("-{s}").into(),
        _ => arg,
    }
}

fn is_single_dash_long(s: &str) -> bool {
    let Some(rest) = s.strip_prefix('-') else {
        return false;
    };
    let name = rest.split('=').next().unwrap_or(rest);
    name.len() > 1 && name.starts_with(|c: char| c.is_ascii_alphabetic())
}

/// Treat the legacy `-1` sentinel as "not provided".
pub fn explicit(value: Option<i32>) -> Option<i32> {
    value.filter(|&v| v != -1)
}

/// The reference date flags. Each missing component defaults to today's.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct CurrentDateArgs {
    /// Current year
    #[arg(long = "cy", value_name = "YEAR", allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Current workday's month (eg 1-12)
    #[arg(long = "cm", value_name = "MONTH", allow_negative_numbers = true)]
    pub month: Option<i32>,

    /// Current workday's day (eg 1-31)
    #[arg(long = "cd", value_name = "DAY", allow_negative_numbers = true)]
    pub day: Option<i32>,
}

impl CurrentDateArgs {
    /// Fill missing components from `today` and normalize.
    pub fn resolve(&self, today: CalendarDate) -> Result<CalendarDate> {
        CalendarDate::new(
            self.year.unwrap_or(today.year()),
            self.month.unwrap_or(today.month() as i32),
            self.day.unwrap_or(today.day() as i32),
        )
    }
}
