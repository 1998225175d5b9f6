//! Fallback values for canonical fields, in one place.

use crate::models::LanguageLevel;

/// Literal used when no source field supplies a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefaults {
    pub school: &'static str,
    pub degree: &'static str,
    pub major: &'static str,
    pub company: &'static str,
    pub position: &'static str,
    pub certification_issuer: &'static str,
    pub language_level: LanguageLevel,
    /// Applied to technical skills only; soft skills carry no years.
    pub technical_years: u32,
    pub ongoing_label: &'static str,
    pub achievement_project_prefix: &'static str,
}

pub const DEFAULTS: FieldDefaults = FieldDefaults {
    school: "Unknown School",
    degree: "Unknown Degree",
    major: "",
    company: "",
    position: "",
    certification_issuer: "Unknown Organization",
    language_level: LanguageLevel::Intermediate,
    technical_years: 1,
    ongoing_label: "Present",
    achievement_project_prefix: "Project: ",
};
