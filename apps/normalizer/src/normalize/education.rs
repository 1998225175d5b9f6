use serde_json::Value;
use tracing::debug;

use crate::models::Education;
use crate::normalize::classifier::{classify_education, SourceShape};
use crate::normalize::defaults::DEFAULTS;
use crate::normalize::period::{format_date_range, period_from_parts};
use crate::normalize::value::{first_text, first_text_block, flag, list, text_or, Object};

const SCHOOL_KEYS: &[&str] = &["school", "institution", "university", "schoolName"];
const DEGREE_KEYS: &[&str] = &["degree", "degreeName", "degree_type", "qualification"];
const MAJOR_KEYS: &[&str] = &["major", "fieldOfStudy", "field_of_study", "field"];
const LOCATION_KEYS: &[&str] = &["location", "city"];
const DESCRIPTION_KEYS: &[&str] = &["description", "details", "achievements"];
const GPA_KEYS: &[&str] = &["gpa", "grade", "GPA"];

/// Normalizes an education list from any producer. Non-array input yields `[]`.
pub fn normalize_education(source: Option<&Value>) -> Vec<Education> {
    list(source).iter().filter_map(normalize_entry).collect()
}

fn normalize_entry(item: &Value) -> Option<Education> {
    let shape = classify_education(item);
    let obj = item.as_object()?;
    debug!("Education entry shape: {shape:?}");
    let period = match shape {
        SourceShape::Profile => period_from_parts(obj),
        // A canonical entry without `period` may still carry parsed-style dates
        SourceShape::Canonical | SourceShape::Parsed => parsed_period(obj),
        SourceShape::Unknown => {
            debug!("Skipping education entry of unknown shape");
            return None;
        }
    };

    Some(Education {
        school: text_or(obj, SCHOOL_KEYS, DEFAULTS.school),
        degree: text_or(obj, DEGREE_KEYS, DEFAULTS.degree),
        major: text_or(obj, MAJOR_KEYS, DEFAULTS.major),
        period,
        location: text_or(obj, LOCATION_KEYS, ""),
        description: first_text_block(obj, DESCRIPTION_KEYS).unwrap_or_default(),
        gpa: first_text(obj, GPA_KEYS),
    })
}

/// Parsers emit a ready-made `dates` string, a start/end pair, or only a graduation year.
fn parsed_period(obj: &Object) -> String {
    if let Some(dates) = first_text(obj, &["period", "dates", "duration"]) {
        return dates;
    }
    let start = first_text(obj, &["start_date", "startDate", "start"]);
    let end = first_text(
        obj,
        &["end_date", "endDate", "end", "graduation_date", "graduation_year"],
    );
    format_date_range(start.as_deref(), end.as_deref(), flag(obj, &["current", "is_current"]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_shape_builds_period() {
        let out = normalize_education(Some(&json!([{
            "school": "MIT",
            "degree": "BSc",
            "fieldOfStudy": "Computer Science",
            "startMonth": "9",
            "startYear": "2016",
            "endMonth": "06",
            "endYear": "2020"
        }])));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].school, "MIT");
        assert_eq!(out[0].major, "Computer Science");
        assert_eq!(out[0].period, "09/2016 - 06/2020");
    }

    #[test]
    fn test_school_falls_back_to_institution_then_literal() {
        let out = normalize_education(Some(&json!([
            {"institution": "ETH Zurich", "start_date": "2018", "end_date": "2020"},
            {"degree": "MSc", "period": ""}
        ])));
        assert_eq!(out[0].school, "ETH Zurich");
        assert_eq!(out[0].period, "2018 - 2020");
        assert_eq!(out[1].school, DEFAULTS.school);
        assert_eq!(out[1].school, "Unknown School");
    }

    #[test]
    fn test_degree_and_major_defaults() {
        let out = normalize_education(Some(&json!([{"school": "MIT"}])));
        assert_eq!(out[0].degree, DEFAULTS.degree);
        assert_eq!(out[0].major, DEFAULTS.major);
        assert_eq!(out[0].period, "");
    }

    #[test]
    fn test_parsed_dates_text_is_kept() {
        let out = normalize_education(Some(&json!([
            {"institution": "Oxford", "dates": "Sept 2012 – June 2015", "gpa": 3.8}
        ])));
        assert_eq!(out[0].period, "Sept 2012 – June 2015");
        assert_eq!(out[0].gpa.as_deref(), Some("3.8"));
    }

    #[test]
    fn test_non_array_and_junk_items() {
        assert!(normalize_education(None).is_empty());
        assert!(normalize_education(Some(&json!({"school": "MIT"}))).is_empty());
        assert!(normalize_education(Some(&json!(["MIT", 4, null]))).is_empty());
    }

    #[test]
    fn test_end_only_editor_period_is_kept() {
        let out = normalize_education(Some(&json!([
            {"school": "MIT", "endMonth": "06", "endYear": "2020"}
        ])));
        assert_eq!(out[0].period, "06/2020");
    }

    #[test]
    fn test_camel_case_parsed_dates() {
        let out = normalize_education(Some(&json!([
            {"school": "ETH", "startDate": "2016", "endDate": "2020"}
        ])));
        assert_eq!(out[0].period, "2016 - 2020");
    }
}
