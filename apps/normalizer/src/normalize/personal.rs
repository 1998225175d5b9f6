use serde_json::Value;

use crate::models::PersonalInfo;
use crate::normalize::value::{first_text, first_text_block, Object};

const NAME_KEYS: &[&str] = &["name", "fullName", "full_name"];
const TITLE_KEYS: &[&str] = &["title", "headline", "jobTitle", "job_title", "position"];
const EMAIL_KEYS: &[&str] = &["email", "emailAddress", "email_address"];
const PHONE_KEYS: &[&str] = &["phone", "phoneNumber", "phone_number", "mobile"];
const LOCATION_KEYS: &[&str] = &["location", "address"];
const SUMMARY_KEYS: &[&str] = &["summary", "about", "aboutMe", "about_me", "bio", "objective"];
const WEBSITE_KEYS: &[&str] = &["website", "portfolio", "url"];
const LINKEDIN_KEYS: &[&str] = &["linkedin", "linkedIn", "linkedin_url"];
const GITHUB_KEYS: &[&str] = &["github", "gitHub", "github_url"];

/// Builds `PersonalInfo` from the section object, falling back to the profile root
/// for fields the section does not carry (parsers often flatten contact data).
pub fn normalize_personal_info(section: Option<&Value>, root: &Object) -> PersonalInfo {
    let section = section.and_then(Value::as_object);
    let lookup = |keys: &[&str]| -> Option<String> {
        section
            .and_then(|s| first_text(s, keys))
            .or_else(|| first_text(root, keys))
    };

    let name = lookup(NAME_KEYS)
        .or_else(|| section.and_then(assembled_name))
        .or_else(|| assembled_name(root))
        .unwrap_or_default();

    let location = lookup(LOCATION_KEYS)
        .or_else(|| section.and_then(city_country))
        .or_else(|| city_country(root))
        .unwrap_or_default();

    let summary = section
        .and_then(|s| first_text_block(s, SUMMARY_KEYS))
        .or_else(|| first_text_block(root, SUMMARY_KEYS))
        .unwrap_or_default();

    PersonalInfo {
        name,
        title: lookup(TITLE_KEYS).unwrap_or_default(),
        email: lookup(EMAIL_KEYS).unwrap_or_default(),
        phone: lookup(PHONE_KEYS).unwrap_or_default(),
        location,
        summary,
        website: lookup(WEBSITE_KEYS),
        linkedin: lookup(LINKEDIN_KEYS),
        github: lookup(GITHUB_KEYS),
    }
}

fn assembled_name(obj: &Object) -> Option<String> {
    let first = first_text(obj, &["firstName", "first_name"]);
    let last = first_text(obj, &["lastName", "last_name"]);
    join_present(&[first, last], " ")
}

fn city_country(obj: &Object) -> Option<String> {
    let city = first_text(obj, &["city"]);
    let country = first_text(obj, &["country"]);
    join_present(&[city, country], ", ")
}

fn join_present(parts: &[Option<String>], sep: &str) -> Option<String> {
    let present: Vec<&str> = parts.iter().flatten().map(String::as_str).collect();
    (!present.is_empty()).then(|| present.join(sep))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(input: Value) -> PersonalInfo {
        let root = input.as_object().cloned().unwrap_or_default();
        let section = ["personalInfo", "personal_info", "contact"]
            .iter()
            .find_map(|k| root.get(*k).cloned());
        normalize_personal_info(section.as_ref(), &root)
    }

    #[test]
    fn test_profile_editor_names_are_joined() {
        let info = run(json!({
            "personalInfo": {"firstName": "Ada", "lastName": "Lovelace", "jobTitle": "Analyst"}
        }));
        assert_eq!(info.name, "Ada Lovelace");
        assert_eq!(info.title, "Analyst");
    }

    #[test]
    fn test_parsed_contact_falls_back_to_root() {
        let info = run(json!({
            "contact": {"email_address": "ada@example.com", "phone_number": "+44 1"},
            "full_name": "Ada Lovelace",
            "summary": ["Mathematician.", "Writes programs."]
        }));
        assert_eq!(info.name, "Ada Lovelace");
        assert_eq!(info.email, "ada@example.com");
        assert_eq!(info.phone, "+44 1");
        assert_eq!(info.summary, "Mathematician.\nWrites programs.");
    }

    #[test]
    fn test_city_and_country_make_location() {
        let info = run(json!({"personalInfo": {"city": "London", "country": "UK"}}));
        assert_eq!(info.location, "London, UK");
    }

    #[test]
    fn test_missing_everything_is_default() {
        assert_eq!(run(json!({})), PersonalInfo::default());
        assert_eq!(run(json!({"personalInfo": "Ada"})), PersonalInfo::default());
    }

    #[test]
    fn test_optional_links_kept_only_when_present() {
        let info = run(json!({"personalInfo": {"name": "Ada", "github": "ada"}}));
        assert_eq!(info.github.as_deref(), Some("ada"));
        assert!(info.linkedin.is_none());
    }
}
