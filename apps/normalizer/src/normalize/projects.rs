use serde_json::Value;

use crate::models::Project;
use crate::normalize::period::{format_date_range, has_period_parts, period_from_parts};
use crate::normalize::value::{first_list, first_text, first_text_block, list, string_list};

const NAME_KEYS: &[&str] = &["name", "title", "projectName", "project_name"];
const DESCRIPTION_KEYS: &[&str] = &["description", "summary", "details"];
const TECH_KEYS: &[&str] = &["technologies", "techStack", "tech_stack", "tools"];
const LINK_KEYS: &[&str] = &["link", "url", "github", "repository"];

/// `technologies` only ever comes from an explicit list; it is never mined from descriptions.
pub fn normalize_projects(source: Option<&Value>) -> Vec<Project> {
    list(source)
        .iter()
        .filter_map(|item| {
            let obj = item.as_object()?;
            let period = if has_period_parts(obj) {
                period_from_parts(obj)
            } else {
                first_text(obj, &["period", "duration", "dates"]).unwrap_or_else(|| {
                    let start = first_text(obj, &["start_date", "startDate"]);
                    let end = first_text(obj, &["end_date", "endDate"]);
                    format_date_range(start.as_deref(), end.as_deref(), false)
                })
            };
            Some(Project {
                name: first_text(obj, NAME_KEYS).unwrap_or_default(),
                description: first_text_block(obj, DESCRIPTION_KEYS).unwrap_or_default(),
                technologies: first_list(obj, TECH_KEYS)
                    .map(string_list)
                    .unwrap_or_default(),
                link: first_text(obj, LINK_KEYS).unwrap_or_default(),
                period,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_technologies_default_empty() {
        let out = normalize_projects(Some(&json!([
            {"name": "Tracker", "description": "Built with Rust and Postgres"}
        ])));
        assert!(out[0].technologies.is_empty());
    }

    #[test]
    fn test_parsed_project_fields() {
        let out = normalize_projects(Some(&json!([{
            "project_name": "Search",
            "tech_stack": ["Rust", "Tantivy"],
            "url": "https://example.com",
            "start_date": "2021-04",
            "end_date": "2021-09"
        }])));
        assert_eq!(out[0].name, "Search");
        assert_eq!(out[0].technologies, vec!["Rust", "Tantivy"]);
        assert_eq!(out[0].link, "https://example.com");
        assert_eq!(out[0].period, "04/2021 - 09/2021");
    }

    #[test]
    fn test_profile_project_period() {
        let out = normalize_projects(Some(&json!([
            {"name": "Bot", "startMonth": "2", "startYear": "2023", "isOngoing": true}
        ])));
        assert_eq!(out[0].period, "02/2023 - Present");
    }

    #[test]
    fn test_technologies_string_is_not_split() {
        let out = normalize_projects(Some(&json!([{"name": "X", "technologies": "Rust, Go"}])));
        assert!(out[0].technologies.is_empty());
    }
}
