//! # worklog-engine
//!
//! Date resolution and wiki markup rendering for a team's daily worklog and
//! on-call rotation pages.
//!
//! Everything here is a pure function of its inputs. Nothing reads the clock
//! except [`CalendarDate::today`], which the binaries call once to fill in
//! defaults.
//!
//! ## Modules
//!
//! - [`calendar`] — normalized calendar dates and month abbreviations
//! - [`workday`] — previous/next workday resolution and the `{{Worklog}}` template
//! - [`oncall`] — on-call category tags and per-day handover blocks
//! - [`error`] — Error types

pub mod calendar;
pub mod error;
pub mod oncall;
pub mod workday;

pub use calendar::{month_abbrev, CalendarDate, UNKNOWN_MONTH};
pub use error::WorklogError;
pub use oncall::{
    category_tags, render_categories, render_day, render_oncall_page, work_type_label,
    RotationKind, RotationRequest,
};
pub use workday::{
    format_wiki_template, resolve_next, resolve_previous, resolve_worklog, DateOverride,
    ResolvedWorklog, WorklogRequest,
};
