//! Certifications and awards. Both accept bare strings or structured objects.

use serde_json::Value;

use crate::models::Certification;
use crate::normalize::defaults::DEFAULTS;
use crate::normalize::period::{format_period, parse_date, ParsedDate};
use crate::normalize::value::{first_text, flag, list, text, text_or, Object};

const CERT_NAME_KEYS: &[&str] = &["name", "title", "certification", "certificate"];
const ISSUER_KEYS: &[&str] = &["issuer", "organization", "authority", "issuedBy", "issuing_organization"];
const CERT_DATE_KEYS: &[&str] = &["date", "issueDate", "issue_date", "dateIssued", "issued", "year"];
const CREDENTIAL_KEYS: &[&str] = &["credentialId", "credential_id", "licenseNumber"];
const URL_KEYS: &[&str] = &["url", "link", "credentialUrl"];

const AWARD_NAME_KEYS: &[&str] = &["name", "title", "award"];
const AWARD_ORG_KEYS: &[&str] = &["organization", "issuer", "awarder", "by"];

pub fn normalize_certifications(source: Option<&Value>) -> Vec<Certification> {
    list(source)
        .iter()
        .filter_map(|item| certification_with(item, parse_date))
        .collect()
}

/// Date parsing is injected so tests can pin "today".
fn certification_with(
    item: &Value,
    parse: impl Fn(Option<&str>) -> ParsedDate,
) -> Option<Certification> {
    match item {
        Value::Object(obj) => {
            let name = first_text(obj, CERT_NAME_KEYS)?;
            let date = parse(first_text(obj, CERT_DATE_KEYS).as_deref());
            Some(Certification {
                name,
                issuer: text_or(obj, ISSUER_KEYS, DEFAULTS.certification_issuer),
                date: date.iso,
                date_defaulted: date.defaulted || flag(obj, &["dateDefaulted"]),
                credential_id: first_text(obj, CREDENTIAL_KEYS),
                url: first_text(obj, URL_KEYS),
            })
        }
        other => {
            let name = text(other)?;
            let date = parse(None);
            Some(Certification {
                name,
                issuer: DEFAULTS.certification_issuer.to_string(),
                date: date.iso,
                date_defaulted: date.defaulted,
                credential_id: None,
                url: None,
            })
        }
    }
}

/// Awards render as single lines: `name - organization - year-or-month`, empty parts skipped.
pub fn normalize_awards(source: Option<&Value>) -> Vec<String> {
    list(source)
        .iter()
        .filter_map(|item| match item {
            Value::Object(obj) => award_line(obj),
            other => text(other),
        })
        .collect()
}

fn award_line(obj: &Object) -> Option<String> {
    let when = match (first_text(obj, &["month"]), first_text(obj, &["year"])) {
        (Some(month), Some(year)) => Some(format_period(Some(&month), Some(&year), None, None, false)),
        (None, Some(year)) => Some(year),
        (Some(month), None) => Some(month),
        (None, None) => first_text(obj, &["date"]),
    };
    let parts: Vec<String> = [
        first_text(obj, AWARD_NAME_KEYS),
        first_text(obj, AWARD_ORG_KEYS),
        when,
    ]
    .into_iter()
    .flatten()
    .collect();
    (!parts.is_empty()).then(|| parts.join(" - "))
}
