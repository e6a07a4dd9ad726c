//! Shared plumbing for the `worklog` and `oncall` binaries.

pub mod args;
pub mod logging;

pub use args::{explicit, normalize_args, CurrentDateArgs};
