//! stderr logging for the binaries.
//!
//! stdout carries only the generated markup, so every diagnostic goes to
//! stderr. Warnings are always shown; `-verbose` adds the resolver's trace.

use log::LevelFilter;

/// Level for the given verbosity.
pub fn level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the global logger. Fails only if a logger is already installed.
pub fn init(verbose: bool) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}",
                chrono::Local::now().format("%Y/%m/%d %H:%M:%S"),
                record.level(),
                message
            ))
        })
        .level(level(verbose))
        .chain(std::io::stderr())
        .apply()
}
