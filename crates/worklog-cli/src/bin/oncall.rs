//! Print the skeleton of an on-call rotation page: category tags followed by
//! a handover block for each weekday.

use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use worklog_cli::{logging, normalize_args, CurrentDateArgs};
use worklog_engine::{render_oncall_page, CalendarDate, RotationRequest};

#[derive(Parser, Debug)]
#[command(
    name = "oncall",
    version,
    about = "Print the on-call wiki page skeleton for a rotation week"
)]
struct Cli {
    #[command(flatten)]
    current: CurrentDateArgs,

    /// On-Call Type (Primary/Secondary/Weekend)
    #[arg(long = "type", value_name = "TYPE", default_value = "primary")]
    kind: String,

    /// Log diagnostics (on stderr)
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false,
        action = ArgAction::Set
    )]
    verbose: bool,
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let reference = cli
        .current
        .resolve(CalendarDate::today())
        .context("resolving the rotation start date")?;
    log::debug!("rotation starts {reference} ({})", reference.weekday());

    let request = RotationRequest::new(reference, cli.kind.as_str());
    Ok(render_oncall_page(&request)?)
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("cannot install logger: {err}");
    }

    match run(&cli) {
        Ok(page) => {
            print!("{page}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
