//! On-call page generation: category tags plus a handover skeleton for each
//! weekday of the rotation week.
//!
//! The day blocks always cover Monday through Friday in that order, whatever
//! weekday the rotation starts on.

use crate::calendar::CalendarDate;
use crate::error::Result;

/// Root of the category hierarchy.
const CATEGORY_ROOT: &str = "On-Call";

/// Length of an on-call week, starting at the reference date.
const ROTATION_DAYS: i64 = 7;

/// Days that get a handover block, in page order.
pub const ONCALL_DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// The kind of rotation a page is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationKind {
    Primary,
    Secondary,
    Weekend,
}

impl RotationKind {
    /// Case-insensitive parse; `None` for anything unrecognized.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "primary" => Some(RotationKind::Primary),
            "secondary" => Some(RotationKind::Secondary),
            "weekend" => Some(RotationKind::Weekend),
            _ => None,
        }
    }

    /// What the rotation mostly handles during the day.
    pub fn label(self) -> &'static str {
        match self {
            RotationKind::Primary | RotationKind::Weekend => "Pages",
            RotationKind::Secondary => "Tickets",
        }
    }
}

/// Work-type label for a rotation kind string, or `""` if the kind is unknown.
///
/// # Examples
///
/// ```
/// use worklog_engine::oncall::work_type_label;
///
/// assert_eq!(work_type_label("Secondary"), "Tickets");
/// assert_eq!(work_type_label("tertiary"), "");
/// ```
pub fn work_type_label(kind: &str) -> &'static str {
    match RotationKind::parse(kind) {
        Some(k) => k.label(),
        None => {
            log::warn!("unknown on-call type '{kind}', leaving the work type blank");
            ""
        }
    }
}

/// One on-call page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationRequest {
    /// First day of the rotation week.
    pub reference: CalendarDate,
    /// Rotation kind as the user typed it; used verbatim in the category tag.
    pub kind: String,
}

impl RotationRequest {
    pub fn new(reference: CalendarDate, kind: impl Into<String>) -> Self {
        RotationRequest {
            reference,
            kind: kind.into(),
        }
    }
}

/// Hierarchical category tags for the rotation week.
///
/// A month tag for the week's end is added when the week runs into a
/// different month, including a December to January rollover.
///
/// # Errors
///
/// Returns [`crate::WorklogError::InvalidDate`] only if the end of the week
/// is unrepresentable.
pub fn category_tags(request: &RotationRequest) -> Result<Vec<String>> {
    let start = request.reference;
    let end = start.add_days(ROTATION_DAYS)?;

    let mut tags = vec![
        CATEGORY_ROOT.to_string(),
        format!("{CATEGORY_ROOT}/{}", start.year()),
        format!("{CATEGORY_ROOT}/{}/{}", start.year(), start.month_abbrev()),
    ];
    if (end.year(), end.month()) != (start.year(), start.month()) {
        log::debug!("rotation starting {start} runs into {end}");
        tags.push(format!(
            "{CATEGORY_ROOT}/{}/{}",
            end.year(),
            end.month_abbrev()
        ));
    }
    tags.push(format!("{CATEGORY_ROOT}/{}", request.kind));
    Ok(tags)
}

/// Category tags as `[[Category:...]]` lines.
pub fn render_categories(request: &RotationRequest) -> Result<String> {
    let mut out = String::new();
    for tag in category_tags(request)? {
        out.push_str(&format!("[[Category:{tag}]]\n"));
    }
    Ok(out)
}

/// Handover skeleton for a single day.
pub fn render_day(day: &str, work_type: &str) -> String {
    format!(
        "= {day} =\n\
         \n\
         == Handovers ==\n\
         \n\
         === {day} AM Handover ===\n\
         \n\
         === {day} PM Handover ===\n\
         \n\
         == {day} {work_type} ==\n\
         \n"
    )
}

/// The full on-call page: categories, a blank line, then one block per
/// weekday.
pub fn render_oncall_page(request: &RotationRequest) -> Result<String> {
    let mut page = render_categories(request)?;
    page.push('\n');

    let work_type = work_type_label(&request.kind);
    for day in ONCALL_DAYS {
        page.push_str(&render_day(day, work_type));
    }
    Ok(page)
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn request(y: i32, m: i32, d: i32, kind: &str) -> RotationRequest {
        RotationRequest::new(CalendarDate::new(y, m, d).unwrap(), kind)
    }

    #[test]
    fn test_work_type_label_known_kinds() {
        assert_eq!(work_type_label("primary"), "Pages");
        assert_eq!(work_type_label("weekend"), "Pages");
        assert_eq!(work_type_label("secondary"), "Tickets");
    }

    #[test]
    fn test_work_type_label_is_case_insensitive() {
        assert_eq!(work_type_label("PRIMARY"), "Pages");
        assert_eq!(work_type_label("Weekend"), "Pages");
        assert_eq!(work_type_label("SeCoNdArY"), "Tickets");
    }

    #[test]
    fn test_work_type_label_unknown_is_blank() {
        assert_eq!(work_type_label(""), "");
        assert_eq!(work_type_label("tertiary"), "");
    }

    #[test]
    fn test_work_type_label_does_not_trim() {
        // The category tag uses the kind verbatim, so the label must too.
        assert_eq!(work_type_label(" primary"), "");
        assert_eq!(work_type_label("secondary "), "");
        assert_eq!(RotationKind::parse(" weekend"), None);
    }

    #[test]
    fn test_rotation_kind_parse() {
        assert_eq!(RotationKind::parse("Primary"), Some(RotationKind::Primary));
        assert_eq!(RotationKind::parse("nope"), None);
    }

    #[test]
    fn test_categories_within_one_month() {
        let tags = category_tags(&request(2025, 3, 3, "primary")).unwrap();
        assert_eq!(
            tags,
            vec![
                "On-Call",
                "On-Call/2025",
                "On-Call/2025/Mar",
                "On-Call/primary"
            ]
        );
    }

    #[test]
    fn test_categories_crossing_month() {
        let tags = category_tags(&request(2025, 3, 27, "secondary")).unwrap();
        assert_eq!(
            tags,
            vec![
                "On-Call",
                "On-Call/2025",
                "On-Call/2025/Mar",
                "On-Call/2025/Apr",
                "On-Call/secondary"
            ]
        );
    }

    #[test]
    fn test_categories_crossing_year() {
        let tags = category_tags(&request(2024, 12, 30, "weekend")).unwrap();
        assert_eq!(tags[3], "On-Call/2025/Jan");
        assert_eq!(tags.len(), 5);
    }

    #[test]
    fn test_categories_week_ending_on_last_day_stays_in_month() {
        // Mar 24 + 7 = Mar 31
        let tags = category_tags(&request(2025, 3, 24, "primary")).unwrap();
        assert_eq!(tags.len(), 4);
    }

    #[test]
    fn test_categories_keep_kind_verbatim() {
        let tags = category_tags(&request(2025, 3, 3, "Secondary")).unwrap();
        assert_eq!(tags.last().unwrap(), "On-Call/Secondary");
    }

    #[test]
    fn test_render_categories_wraps_tags() {
        let out = render_categories(&request(2025, 3, 3, "primary")).unwrap();
        assert_eq!(
            out,
            "[[Category:On-Call]]\n[[Category:On-Call/2025]]\n[[Category:On-Call/2025/Mar]]\n[[Category:On-Call/primary]]\n"
        );
    }

    #[test]
    fn test_render_day_block() {
        assert_eq!(
            render_day("Tuesday", "Tickets"),
            "= Tuesday =\n\n== Handovers ==\n\n=== Tuesday AM Handover ===\n\n=== Tuesday PM Handover ===\n\n== Tuesday Tickets ==\n\n"
        );
    }

    #[test]
    fn test_page_layout() {
        // Starts on a Wednesday; blocks still run Monday..Friday.
        let page = render_oncall_page(&request(2025, 3, 5, "primary")).unwrap();
        let (categories, days) = page.split_once("\n\n").unwrap();
        assert_eq!(categories.lines().count(), 4);

        let headings: Vec<&str> = days.lines().filter(|l| l.starts_with("= ")).collect();
        assert_eq!(
            headings,
            vec![
                "= Monday =",
                "= Tuesday =",
                "= Wednesday =",
                "= Thursday =",
                "= Friday ="
            ]
        );
        assert!(page.contains("== Friday Pages =="));
        assert!(page.ends_with("== Friday Pages ==\n\n"));
    }

    #[test]
    fn test_page_unknown_kind_does_not_fail() {
        let page = render_oncall_page(&request(2025, 3, 5, "oncall")).unwrap();
        assert!(page.contains("[[Category:On-Call/oncall]]"));
        assert!(page.contains("== Monday  =="));
    }
}
