//! Schema classifier. Detects which producer shaped a section.
//!
//! Classification runs per category (and per item for list categories), since a
//! single payload can mix canonical and non-canonical sections. Absence of every
//! discriminator falls open to `Canonical`; nothing here fails.

use serde::Serialize;
use serde_json::Value;

use crate::normalize::period::has_period_parts;
use crate::normalize::value::{has_any, has_string, Object};

/// Which producer a section or item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceShape {
    Canonical,
    /// Manual profile editor.
    Profile,
    /// External document-parsing service.
    Parsed,
    Unknown,
}

/// Top-level sections of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    PersonalInfo,
    Experience,
    Education,
    Skills,
    Languages,
    Certifications,
    Awards,
    Projects,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::PersonalInfo,
        Category::Experience,
        Category::Education,
        Category::Skills,
        Category::Languages,
        Category::Certifications,
        Category::Awards,
        Category::Projects,
    ];

    /// Source keys accepted for this category, most preferred first.
    pub fn source_keys(self) -> &'static [&'static str] {
        match self {
            Category::PersonalInfo => &["personalInfo", "personal_info", "contact", "basics"],
            Category::Experience => &[
                "experience",
                "experiences",
                "workExperience",
                "work_experience",
            ],
            Category::Education => &["education"],
            Category::Skills => &["skills"],
            Category::Languages => &["languages"],
            Category::Certifications => &["certifications", "certificates"],
            Category::Awards => &["awards", "honors"],
            Category::Projects => &["projects"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::PersonalInfo => "personal_info",
            Category::Experience => "experience",
            Category::Education => "education",
            Category::Skills => "skills",
            Category::Languages => "languages",
            Category::Certifications => "certifications",
            Category::Awards => "awards",
            Category::Projects => "projects",
        }
    }
}

const PARSED_EDUCATION_KEYS: &[&str] = &[
    "institution",
    "start_date",
    "end_date",
    "startDate",
    "endDate",
    "dates",
    "graduation_year",
    "graduation_date",
    "field_of_study",
];

const PARSED_EXPERIENCE_KEYS: &[&str] = &[
    "title",
    "role",
    "start_date",
    "end_date",
    "startDate",
    "endDate",
    "duration",
    "dates",
    "responsibilities",
];

/// Shape of a single value under `category`. List categories are judged by their first item.
pub fn classify(category: Category, value: &Value) -> SourceShape {
    match category {
        Category::Education => first_item(value).map_or(SourceShape::Unknown, classify_education),
        Category::Experience => {
            first_item(value).map_or(SourceShape::Unknown, classify_experience)
        }
        Category::Skills => classify_skills(value).shape(),
        _ => match value {
            Value::Object(_) | Value::Array(_) => SourceShape::Canonical,
            _ => SourceShape::Unknown,
        },
    }
}

fn first_item(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items.first(),
        Value::Object(_) => Some(value),
        _ => None,
    }
}

pub fn classify_education(item: &Value) -> SourceShape {
    let Some(obj) = item.as_object() else {
        return SourceShape::Unknown;
    };
    if has_string(obj, "period") {
        SourceShape::Canonical
    } else if has_period_parts(obj) {
        SourceShape::Profile
    } else if has_any(obj, PARSED_EDUCATION_KEYS) {
        SourceShape::Parsed
    } else {
        SourceShape::Canonical
    }
}

pub fn classify_experience(item: &Value) -> SourceShape {
    let Some(obj) = item.as_object() else {
        return SourceShape::Unknown;
    };
    if has_string(obj, "position") && has_string(obj, "period") {
        SourceShape::Canonical
    } else if obj.contains_key("jobTitle") || has_period_parts(obj) {
        SourceShape::Profile
    } else if has_any(obj, PARSED_EXPERIENCE_KEYS) {
        SourceShape::Parsed
    } else {
        SourceShape::Canonical
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// Every skills encoding seen in the wild, computed once per profile.
#[derive(Debug, Clone, PartialEq)]
pub enum SkillEncoding<'a> {
    /// `[{category, items: [{id, skill, yearsOfExperience}]}]`
    CanonicalGroups(&'a [Value]),
    /// `[{name: "Backend", skills|items: [...]}]`
    ProfileGroups(&'a [Value]),
    /// `{"Backend": ["Rust", "Go"], "Soft Skills": [...]}`
    ProfileMap(&'a Object),
    /// `{technical_skills: [...], soft_skills: [...]}`
    Buckets {
        technical: &'a [Value],
        soft: &'a [Value],
    },
    /// `["Rust", "Go"]`
    Flat(&'a [Value]),
    /// `[{name: "Go"}, {name: "Teamwork", category: "soft"}]`
    Entries(&'a [Value]),
    Empty,
    Unknown,
}

impl SkillEncoding<'_> {
    pub fn shape(&self) -> SourceShape {
        match self {
            SkillEncoding::CanonicalGroups(_) | SkillEncoding::Empty => SourceShape::Canonical,
            SkillEncoding::ProfileGroups(_) | SkillEncoding::ProfileMap(_) => SourceShape::Profile,
            SkillEncoding::Buckets { .. } | SkillEncoding::Flat(_) | SkillEncoding::Entries(_) => {
                SourceShape::Parsed
            }
            SkillEncoding::Unknown => SourceShape::Unknown,
        }
    }
}

const BUCKET_KEYS: &[&str] = &["technical_skills", "soft_skills", "technicalSkills", "softSkills"];
const NESTED_SKILL_KEYS: &[&str] = &["items", "skills"];

pub fn classify_skills(value: &Value) -> SkillEncoding<'_> {
    match value {
        Value::Null => SkillEncoding::Empty,
        Value::Object(obj) if BUCKET_KEYS.iter().any(|k| obj.contains_key(*k)) => {
            SkillEncoding::Buckets {
                technical: bucket(obj, &["technical_skills", "technicalSkills"]),
                soft: bucket(obj, &["soft_skills", "softSkills"]),
            }
        }
        Value::Object(obj) if obj.values().any(Value::is_array) => SkillEncoding::ProfileMap(obj),
        Value::Object(obj) if obj.is_empty() => SkillEncoding::Empty,
        Value::Array(items) => match items.first() {
            None => SkillEncoding::Empty,
            Some(Value::String(_)) => SkillEncoding::Flat(items),
            Some(Value::Object(first)) => {
                let nested = NESTED_SKILL_KEYS
                    .iter()
                    .any(|k| first.get(*k).is_some_and(Value::is_array));
                if first.contains_key("category") && nested {
                    SkillEncoding::CanonicalGroups(items)
                } else if first.contains_key("name") && nested {
                    SkillEncoding::ProfileGroups(items)
                } else if first.contains_key("name") || first.contains_key("skill") {
                    SkillEncoding::Entries(items)
                } else {
                    SkillEncoding::Unknown
                }
            }
            Some(_) => SkillEncoding::Unknown,
        },
        _ => SkillEncoding::Unknown,
    }
}

fn bucket<'a>(obj: &'a Object, keys: &[&str]) -> &'a [Value] {
    keys.iter()
        .find_map(|k| obj.get(*k).and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
