//! Date and period strings.
//!
//! Periods are always derived from their parts and never stored as parts.
//! Nothing here validates calendars: month `13` passes through unchanged.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::normalize::defaults::DEFAULTS;
use crate::normalize::value::{first_text, flag, Object};

const START_MONTH_KEYS: &[&str] = &["startMonth", "start_month"];
const START_YEAR_KEYS: &[&str] = &["startYear", "start_year"];
const END_MONTH_KEYS: &[&str] = &["endMonth", "end_month"];
const END_YEAR_KEYS: &[&str] = &["endYear", "end_year"];
const EDITOR_ONGOING_KEYS: &[&str] = &["isOngoing"];
const ONGOING_KEYS: &[&str] = &["isOngoing", "isCurrent", "is_current", "current", "ongoing"];

const ONGOING_WORDS: &[&str] = &["present", "current", "now", "ongoing", "today"];

/// Formats `MM/YYYY - MM/YYYY`, `MM/YYYY - Present`, or a single side.
///
/// - ongoing with a start: `"<start> - Present"`; ongoing without a start: `""`
/// - start and end: `"<start> - <end>"`
/// - only start: `"<start>"`; only end: `"<end>"`; neither: `""`
///
/// A side needs its year; the month is optional and zero-padded when numeric.
pub fn format_period(
    start_month: Option<&str>,
    start_year: Option<&str>,
    end_month: Option<&str>,
    end_year: Option<&str>,
    ongoing: bool,
) -> String {
    let start = period_side(start_month, start_year);
    let end = period_side(end_month, end_year);
    join_sides(start, end, ongoing)
}

/// Period for free-text parsed dates ("Jan 2020", "2019-06", "Present").
pub fn format_date_range(start: Option<&str>, end: Option<&str>, ongoing: bool) -> String {
    let start = start.map(str::trim).filter(|s| !s.is_empty());
    let end = end.map(str::trim).filter(|s| !s.is_empty());
    let end_is_ongoing = end.is_some_and(|e| ONGOING_WORDS.contains(&e.to_lowercase().as_str()));
    let (end, ongoing) = if end_is_ongoing {
        (None, true)
    } else {
        (end, ongoing)
    };
    join_sides(
        start.map(reformat_numeric_date),
        end.map(reformat_numeric_date),
        ongoing,
    )
}

/// Period computed from the profile editor's `startMonth`/`startYear`/... fields.
pub(crate) fn period_from_parts(obj: &Object) -> String {
    let start_month = first_text(obj, START_MONTH_KEYS);
    let start_year = first_text(obj, START_YEAR_KEYS);
    let end_month = first_text(obj, END_MONTH_KEYS);
    let end_year = first_text(obj, END_YEAR_KEYS);
    format_period(
        start_month.as_deref(),
        start_year.as_deref(),
        end_month.as_deref(),
        end_year.as_deref(),
        flag(obj, ONGOING_KEYS),
    )
}

/// Whether the object carries any of the editor's period parts, on either side.
pub(crate) fn has_period_parts(obj: &Object) -> bool {
    [
        START_MONTH_KEYS,
        START_YEAR_KEYS,
        END_MONTH_KEYS,
        END_YEAR_KEYS,
        EDITOR_ONGOING_KEYS,
    ]
    .iter()
    .any(|keys| keys.iter().any(|k| obj.contains_key(*k)))
}

fn join_sides(start: Option<String>, end: Option<String>, ongoing: bool) -> String {
    match (start, end, ongoing) {
        (None, _, true) => String::new(),
        (Some(start), _, true) => format!("{start} - {}", DEFAULTS.ongoing_label),
        (Some(start), Some(end), false) => format!("{start} - {end}"),
        (Some(start), None, false) => start,
        (None, Some(end), false) => end,
        (None, None, false) => String::new(),
    }
}

fn period_side(month: Option<&str>, year: Option<&str>) -> Option<String> {
    let year = year.map(str::trim).filter(|y| !y.is_empty())?;
    match month.map(str::trim).filter(|m| !m.is_empty()) {
        Some(month) => Some(format!("{}/{year}", pad_month(month))),
        None => Some(year.to_string()),
    }
}

fn pad_month(month: &str) -> String {
    if month.len() == 1 && month.chars().all(|c| c.is_ascii_digit()) {
        format!("0{month}")
    } else {
        month.to_string()
    }
}

/// `2020-03` and `2020-03-15` become `03/2020`; other text is kept as written.
fn reformat_numeric_date(text: &str) -> String {
    let mut parts = text.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), day, None)
            if y.len() == 4
                && m.len() <= 2
                && y.chars().chain(m.chars()).all(|c| c.is_ascii_digit())
                && day.map_or(true, |d| d.chars().all(|c| c.is_ascii_digit())) =>
        {
            format!("{}/{y}", pad_month(m))
        }
        _ => text.to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Calendar dates
// ────────────────────────────────────────────────────────────────────────────

/// An ISO date plus whether it was substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDate {
    pub iso: String,
    pub defaulted: bool,
}

const FULL_DATE_FORMATS: &[&str] = &[
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

const MONTH_YEAR_FORMATS: &[&str] = &["%B %Y", "%b %Y", "%m/%Y", "%Y-%m", "%m.%Y"];

/// Parses a loose date into ISO `YYYY-MM-DD`.
/// Missing or unreadable input yields today's date with `defaulted = true`,
/// so a bad date never blocks a save.
pub fn parse_date(input: Option<&str>) -> ParsedDate {
    parse_date_on(input, Utc::now().date_naive())
}

/// `parse_date` with an explicit "today".
pub fn parse_date_on(input: Option<&str>, today: NaiveDate) -> ParsedDate {
    let input = input.map(str::trim).filter(|s| !s.is_empty());
    let Some(raw) = input else {
        debug!("No date supplied, defaulting to {today}");
        return defaulted(today);
    };

    if raw.len() == 10 && NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok() {
        return ParsedDate {
            iso: raw.to_string(),
            defaulted: false,
        };
    }

    match parse_loose(raw) {
        Some(date) => ParsedDate {
            iso: date.format("%Y-%m-%d").to_string(),
            defaulted: false,
        },
        None => {
            debug!("Unreadable date '{raw}', defaulting to {today}");
            defaulted(today)
        }
    }
}

fn defaulted(today: NaiveDate) -> ParsedDate {
    ParsedDate {
        iso: today.format("%Y-%m-%d").to_string(),
        defaulted: true,
    }
}

fn parse_loose(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Some(date) = FULL_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
    {
        return Some(date);
    }
    let with_day = format!("1 {raw}");
    if let Some(date) = MONTH_YEAR_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&with_day, &format!("%d {fmt}")).ok())
    {
        return Some(date);
    }
    if raw.len() == 4 {
        return raw
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
    }

    #[test]
    fn test_period_start_and_end() {
        assert_eq!(
            format_period(Some("03"), Some("2020"), Some("11"), Some("2022"), false),
            "03/2020 - 11/2022"
        );
    }

    #[test]
    fn test_period_ongoing() {
        assert_eq!(
            format_period(Some("03"), Some("2020"), None, None, true),
            "03/2020 - Present"
        );
    }

    #[test]
    fn test_period_ongoing_ignores_end() {
        assert_eq!(
            format_period(Some("1"), Some("2019"), Some("5"), Some("2021"), true),
            "01/2019 - Present"
        );
    }

    #[test]
    fn test_period_all_missing() {
        assert_eq!(format_period(None, None, None, None, false), "");
    }

    #[test]
    fn test_period_ongoing_without_start_is_empty() {
        assert_eq!(format_period(None, None, None, None, true), "");
        assert_eq!(format_period(Some("04"), None, None, None, true), "");
    }

    #[test]
    fn test_period_pads_single_digit_month() {
        assert_eq!(format_period(Some("3"), Some("2020"), None, None, false), "03/2020");
    }

    #[test]
    fn test_period_passes_invalid_month_through() {
        assert_eq!(format_period(Some("13"), Some("2020"), None, None, false), "13/2020");
    }

    #[test]
    fn test_period_year_only_sides() {
        assert_eq!(
            format_period(None, Some("2016"), None, Some("2020"), false),
            "2016 - 2020"
        );
        assert_eq!(format_period(None, None, Some("06"), Some("2020"), false), "06/2020");
    }

    #[test]
    fn test_period_from_parts_reads_numbers() {
        let obj = json!({"startMonth": 9, "startYear": 2018, "isCurrent": true});
        assert_eq!(period_from_parts(obj.as_object().unwrap()), "09/2018 - Present");
    }

    #[test]
    fn test_date_range_present_word() {
        assert_eq!(
            format_date_range(Some("Jan 2020"), Some("present"), false),
            "Jan 2020 - Present"
        );
    }

    #[test]
    fn test_date_range_reformats_iso_parts() {
        assert_eq!(
            format_date_range(Some("2019-06"), Some("2021-02-01"), false),
            "06/2019 - 02/2021"
        );
        assert_eq!(format_date_range(Some("2019"), None, false), "2019");
    }

    #[test]
    fn test_parse_date_iso_passes_through() {
        let d = parse_date_on(Some("2021-07-04"), today());
        assert_eq!(d.iso, "2021-07-04");
        assert!(!d.defaulted);
    }

    #[test]
    fn test_parse_date_loose_formats() {
        assert_eq!(parse_date_on(Some("March 2021"), today()).iso, "2021-03-01");
        assert_eq!(parse_date_on(Some("Mar 15, 2021"), today()).iso, "2021-03-15");
        assert_eq!(parse_date_on(Some("2021/03/15"), today()).iso, "2021-03-15");
        assert_eq!(parse_date_on(Some("2019"), today()).iso, "2019-01-01");
        assert_eq!(
            parse_date_on(Some("2020-02-03T10:00:00Z"), today()).iso,
            "2020-02-03"
        );
    }

    #[test]
    fn test_parse_date_missing_defaults_to_today() {
        let d = parse_date_on(None, today());
        assert_eq!(d.iso, "2024-05-17");
        assert!(d.defaulted);
    }

    #[test]
    fn test_parse_date_garbage_defaults_to_today() {
        let d = parse_date_on(Some("sometime last spring"), today());
        assert_eq!(d.iso, "2024-05-17");
        assert!(d.defaulted);
    }

    #[test]
    fn test_parse_date_uses_real_today() {
        let d = parse_date(Some(""));
        assert!(d.defaulted);
        assert_eq!(d.iso, Utc::now().date_naive().format("%Y-%m-%d").to_string());
    }
}
