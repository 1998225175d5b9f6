use serde_json::Value;
use tracing::debug;

use crate::models::Experience;
use crate::normalize::classifier::{classify_experience, SourceShape};
use crate::normalize::defaults::DEFAULTS;
use crate::normalize::period::{format_date_range, period_from_parts};
use crate::normalize::value::{
    first_list, first_text, first_text_block, flag, list, string_list, text, text_or, Object,
};

const POSITION_KEYS: &[&str] = &["position", "jobTitle", "title", "role", "job_title"];
const COMPANY_KEYS: &[&str] = &["company", "companyName", "organization", "employer"];
const LOCATION_KEYS: &[&str] = &["location", "city"];
const DESCRIPTION_KEYS: &[&str] = &["description", "summary", "responsibilities"];
const ACHIEVEMENT_KEYS: &[&str] = &["achievements", "highlights"];

/// Normalizes a work-experience list from any producer. Non-array input yields `[]`.
pub fn normalize_experience(source: Option<&Value>) -> Vec<Experience> {
    list(source).iter().filter_map(normalize_entry).collect()
}

fn normalize_entry(item: &Value) -> Option<Experience> {
    let shape = classify_experience(item);
    let obj = item.as_object()?;
    debug!("Experience entry shape: {shape:?}");
    let period = match shape {
        SourceShape::Profile => period_from_parts(obj),
        // A canonical entry without `period` may still carry parsed-style dates
        SourceShape::Canonical | SourceShape::Parsed => parsed_period(obj),
        SourceShape::Unknown => {
            debug!("Skipping experience entry of unknown shape");
            return None;
        }
    };

    Some(Experience {
        company: text_or(obj, COMPANY_KEYS, DEFAULTS.company),
        position: text_or(obj, POSITION_KEYS, DEFAULTS.position),
        location: text_or(obj, LOCATION_KEYS, ""),
        period,
        description: first_text_block(obj, DESCRIPTION_KEYS).unwrap_or_default(),
        achievements: achievements(obj),
    })
}

fn parsed_period(obj: &Object) -> String {
    if let Some(dates) = first_text(obj, &["period", "duration", "dates"]) {
        return dates;
    }
    let start = first_text(obj, &["start_date", "startDate", "start"]);
    let end = first_text(obj, &["end_date", "endDate", "end"]);
    format_date_range(start.as_deref(), end.as_deref(), flag(obj, &["current", "is_current"]))
}

/// Supplied achievement lines, plus one synthesized from a `project` field.
/// `None` when neither exists, so the field is omitted rather than empty.
fn achievements(obj: &Object) -> Option<Vec<String>> {
    let supplied = first_list(obj, ACHIEVEMENT_KEYS);
    let mut lines = supplied.map(string_list).unwrap_or_default();

    if let Some(project) = obj.get("project").and_then(project_name) {
        let line = format!("{}{project}", DEFAULTS.achievement_project_prefix);
        if !lines.contains(&line) {
            lines.push(line);
        }
    }

    if lines.is_empty() && supplied.is_none() {
        None
    } else {
        Some(lines)
    }
}

fn project_name(project: &Value) -> Option<String> {
    match project {
        Value::Object(obj) => first_text(obj, &["name", "title"]),
        other => text(other),
    }
}
