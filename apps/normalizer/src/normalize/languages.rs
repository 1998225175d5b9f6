use serde_json::Value;

use crate::models::{Language, LanguageLevel};
use crate::normalize::defaults::DEFAULTS;
use crate::normalize::value::{first_text, list};

const NAME_KEYS: &[&str] = &["language", "name", "lang"];
const LEVEL_KEYS: &[&str] = &["level", "proficiency", "fluency", "proficiencyLevel"];

/// Ordered substring rules; the first match wins.
const LEVEL_RULES: &[(&[&str], LanguageLevel)] = &[
    (&["native", "fluent"], LanguageLevel::Native),
    (&["advanced", "proficient"], LanguageLevel::Advanced),
    (&["beginner", "basic", "elementary"], LanguageLevel::Beginner),
];

/// Maps free-text proficiency to a level. Lossy: the original wording is discarded.
pub fn classify_language_level(text: &str) -> LanguageLevel {
    let lower = text.to_lowercase();
    LEVEL_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| lower.contains(n)))
        .map(|(_, level)| *level)
        .unwrap_or(DEFAULTS.language_level)
}

pub fn normalize_languages(source: Option<&Value>) -> Vec<Language> {
    list(source).iter().filter_map(normalize_entry).collect()
}

fn normalize_entry(item: &Value) -> Option<Language> {
    match item {
        Value::String(s) => from_text(s),
        Value::Object(obj) => {
            let language = first_text(obj, NAME_KEYS)?;
            let level = first_text(obj, LEVEL_KEYS)
                .map(|l| classify_language_level(&l))
                .unwrap_or(DEFAULTS.language_level);
            Some(Language { language, level })
        }
        _ => None,
    }
}

/// "German (Fluent)", "French - basic", "Spanish: native", or a bare name.
fn from_text(raw: &str) -> Option<Language> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let split = raw
        .split_once('(')
        .map(|(name, rest)| (name, rest.trim_end_matches(')')))
        .or_else(|| raw.split_once(" - "))
        .or_else(|| raw.split_once(':'));

    let (language, level) = match split {
        Some((name, level)) if !name.trim().is_empty() => {
            (name.trim().to_string(), classify_language_level(level))
        }
        _ => (raw.to_string(), classify_language_level(raw)),
    };
    Some(Language { language, level })
}
