use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The single normalized profile shape consumed by rendering and persistence.
/// Every list field is always present; mandatory strings default to `""`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalProfile {
    pub personal_info: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<SkillGroup>,
    pub languages: Vec<Language>,
    pub certifications: Vec<Certification>,
    pub awards: Vec<String>,
    pub projects: Vec<Project>,
    /// Flat soft-skills list, only present when no soft group exists in `skills`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soft_skills: Option<Vec<String>>,
}

impl CanonicalProfile {
    /// True when no section carries any data.
    pub fn is_empty(&self) -> bool {
        self.personal_info == PersonalInfo::default()
            && self.experience.is_empty()
            && self.education.is_empty()
            && self.skills.is_empty()
            && self.languages.is_empty()
            && self.certifications.is_empty()
            && self.awards.is_empty()
            && self.projects.is_empty()
            && self.soft_skills.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Free-text "About Me".
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub major: String,
    pub period: String,
    pub location: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub location: String,
    pub period: String,
    pub description: String,
    /// Omitted entirely unless supplied or synthesized from a `project` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,
}

const SOFT_LABEL_WORDS: &[&str] = &["soft", "interpersonal"];

/// Structural tag for a skill group. De-duplication keys on this, never on the label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    #[default]
    Technical,
    Soft,
}

impl SkillKind {
    /// Infers the kind from a free-text category label ("soft", "Soft Skills", "SOFT").
    /// Matches whole words only, so "Software" stays technical.
    pub fn from_label(label: &str) -> Self {
        let is_soft = label
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| SOFT_LABEL_WORDS.iter().any(|w| word.eq_ignore_ascii_case(w)));
        if is_soft {
            SkillKind::Soft
        } else {
            SkillKind::Technical
        }
    }

    pub fn default_label(self) -> &'static str {
        match self {
            SkillKind::Technical => "Technical Skills",
            SkillKind::Soft => "Soft Skills",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    pub category: String,
    #[serde(default)]
    pub kind: SkillKind,
    pub items: Vec<SkillItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillItem {
    pub id: String,
    pub skill: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u32>,
}

impl SkillItem {
    /// Deterministic id so repeated normalization of the same input yields equal profiles.
    pub fn derive_id(category: &str, skill: &str) -> String {
        let key = format!("{}:{}", category.to_lowercase(), skill.to_lowercase());
        Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes()).to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageLevel {
    Native,
    Advanced,
    #[default]
    Intermediate,
    Beginner,
}

impl LanguageLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LanguageLevel::Native => "Native",
            LanguageLevel::Advanced => "Advanced",
            LanguageLevel::Intermediate => "Intermediate",
            LanguageLevel::Beginner => "Beginner",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub language: String,
    pub level: LanguageLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    /// Set when `date` was substituted because the source date was missing or unreadable.
    #[serde(default)]
    pub date_defaulted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
    pub period: String,
}
