//! Print the `{{Worklog}}` template for a workday.
//!
//! ```text
//! worklog -cy 2025 -cm 2 -cd 28 -friday
//! {{Worklog|currentyear=2025|currentmonth=Feb|currentday=28|nextyear=2025|nextmonth=Mar|nextday=3|prevyear=2025|prevmonth=Feb|prevday=27}}
//! ```

use std::process::ExitCode;

use clap::{ArgAction, Parser};
use worklog_cli::{explicit, logging, normalize_args, CurrentDateArgs};
use worklog_engine::{resolve_worklog, CalendarDate, DateOverride, WorklogError, WorklogRequest};

#[derive(Parser, Debug)]
#[command(
    name = "worklog",
    version,
    about = "Print the worklog wiki template with the previous and next workdays filled in"
)]
struct Cli {
    #[command(flatten)]
    current: CurrentDateArgs,

    /// Next workday's year
    #[arg(long = "ny", value_name = "YEAR", allow_negative_numbers = true)]
    next_year: Option<i32>,

    /// Next workday's month (1-12)
    #[arg(long = "nm", value_name = "MONTH", allow_negative_numbers = true)]
    next_month: Option<i32>,

    /// Next workday's day (eg 1-31)
    #[arg(long = "nd", value_name = "DAY", allow_negative_numbers = true)]
    next_day: Option<i32>,

    /// Previous workday's year
    #[arg(long = "py", value_name = "YEAR", allow_negative_numbers = true)]
    prev_year: Option<i32>,

    /// Previous workday's month (eg 1-12)
    #[arg(long = "pm", value_name = "MONTH", allow_negative_numbers = true)]
    prev_month: Option<i32>,

    /// Previous workday's day (eg 1-31)
    #[arg(long = "pd", value_name = "DAY", allow_negative_numbers = true)]
    prev_day: Option<i32>,

    /// Today is Friday, so the next workday is three days ahead
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false,
        action = ArgAction::Set
    )]
    friday: bool,

    /// Today is Monday, so the previous workday is three days back
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false,
        action = ArgAction::Set
    )]
    monday: bool,

    /// Trace how each date was computed (on stderr)
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false,
        action = ArgAction::Set
    )]
    verbose: bool,

    /// Print the resolved dates as JSON instead of the wiki template
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn request(&self, today: CalendarDate) -> anyhow::Result<WorklogRequest> {
        Ok(WorklogRequest {
            current: self.current.resolve(today)?,
            next: DateOverride {
                year: explicit(self.next_year),
                month: explicit(self.next_month),
                day: explicit(self.next_day),
            },
            previous: DateOverride {
                year: explicit(self.prev_year),
                month: explicit(self.prev_month),
                day: explicit(self.prev_day),
            },
            friday: self.friday,
            monday: self.monday,
        })
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    // The usage conflict wins over any date error.
    if cli.friday && cli.monday {
        return Err(WorklogError::ConflictingShortcuts.into());
    }
    let request = cli.request(CalendarDate::today())?;
    request.validate()?;
    for warning in request.warnings() {
        log::warn!("{warning}");
    }

    let resolved = resolve_worklog(&request)?;
    if cli.json {
        let mut out = serde_json::to_string_pretty(&resolved)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(resolved.to_wiki())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("cannot install logger: {err}");
    }

    match run(&cli) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.downcast_ref::<WorklogError>() {
                Some(WorklogError::ConflictingShortcuts) => println!("{err}"),
                _ => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
