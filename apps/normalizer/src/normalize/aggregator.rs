//! Aggregator. Classifies each section, dispatches to its normalizer, then runs the
//! cross-cutting passes (key aliasing, skill-group merging, soft-skill de-duplication).
//!
//! Sections are independent of each other; `build_section` may run in any order or in
//! parallel and `assemble` yields the same profile.

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::{json_type_name, NormalizeError};
use crate::models::{
    CanonicalProfile, Certification, Education, Experience, Language, PersonalInfo, Project,
    SkillGroup, SkillItem, SkillKind,
};
use crate::normalize::classifier::Category;
use crate::normalize::credentials::{normalize_awards, normalize_certifications};
use crate::normalize::education::normalize_education;
use crate::normalize::experience::normalize_experience;
use crate::normalize::languages::normalize_languages;
use crate::normalize::personal::normalize_personal_info;
use crate::normalize::projects::normalize_projects;
use crate::normalize::skills::normalize_skills;
use crate::normalize::value::{first_list, string_list, Object};

/// Wrapper keys some producers put around the actual profile.
const ENVELOPE_KEYS: &[&str] = &["data", "parsedData", "parsed_data", "profile"];
const FLAT_SOFT_SKILL_KEYS: &[&str] = &["softSkills", "soft_skills"];

/// Output of one category's normalizer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Section {
    PersonalInfo(PersonalInfo),
    Experience(Vec<Experience>),
    Education(Vec<Education>),
    Skills(Vec<SkillGroup>),
    Languages(Vec<Language>),
    Certifications(Vec<Certification>),
    Awards(Vec<String>),
    Projects(Vec<Project>),
}

/// Normalizes any producer's profile into the canonical shape.
///
/// `null` yields an empty profile. Any other non-object root is rejected with
/// `NormalizeError::NotAnObject`; past that guard nothing fails.
pub fn try_normalize(input: &Value) -> Result<CanonicalProfile, NormalizeError> {
    match input {
        Value::Object(root) => Ok(normalize_object(root)),
        Value::Null => Ok(CanonicalProfile::default()),
        other => Err(NormalizeError::NotAnObject {
            found: json_type_name(other),
        }),
    }
}

/// Total variant of `try_normalize`: a rejected root degrades to an empty profile.
pub fn normalize(input: &Value) -> CanonicalProfile {
    try_normalize(input).unwrap_or_else(|e| {
        warn!("Profile input rejected, returning empty profile: {e}");
        CanonicalProfile::default()
    })
}

/// Parses JSON text, then normalizes it.
pub fn normalize_str(json: &str) -> Result<CanonicalProfile, NormalizeError> {
    let value: Value = serde_json::from_str(json)?;
    try_normalize(&value)
}

fn normalize_object(outer: &Object) -> CanonicalProfile {
    let root = unwrap_envelope(outer);
    let sections = Category::ALL.iter().map(|c| build_section(root, *c));
    let profile = assemble(sections, flat_soft_skills_root(root, outer));
    debug!(
        "Normalized profile: {} experience, {} education, {} skill groups, {} languages, {} certifications, {} awards, {} projects",
        profile.experience.len(),
        profile.education.len(),
        profile.skills.len(),
        profile.languages.len(),
        profile.certifications.len(),
        profile.awards.len(),
        profile.projects.len(),
    );
    profile
}

/// Descends into `{"data": {...}}`-style wrappers when the root has no section of its own.
fn unwrap_envelope(root: &Object) -> &Object {
    let has_section = Category::ALL
        .iter()
        .any(|c| source_value(root, *c).is_some());
    if has_section {
        return root;
    }
    ENVELOPE_KEYS
        .iter()
        .find_map(|k| root.get(*k).and_then(Value::as_object))
        .unwrap_or(root)
}

/// Producers sometimes keep `softSkills` beside the envelope rather than inside it.
fn flat_soft_skills_root<'a>(root: &'a Object, outer: &'a Object) -> &'a Object {
    if first_list(root, FLAT_SOFT_SKILL_KEYS).is_some() {
        root
    } else {
        outer
    }
}

/// First present (non-null) source key for `category`, in alias preference order.
/// `certifications` beats `certificates` when both exist.
pub(crate) fn source_value(root: &Object, category: Category) -> Option<&Value> {
    category
        .source_keys()
        .iter()
        .find_map(|k| root.get(*k).filter(|v| !v.is_null()))
}

pub(crate) fn build_section(root: &Object, category: Category) -> Section {
    let source = source_value(root, category);
    if source.is_none() {
        debug!("Section {} absent", category.as_str());
    }
    match category {
        Category::PersonalInfo => Section::PersonalInfo(normalize_personal_info(source, root)),
        Category::Experience => Section::Experience(normalize_experience(source)),
        Category::Education => Section::Education(normalize_education(source)),
        Category::Skills => Section::Skills(normalize_skills(source)),
        Category::Languages => Section::Languages(normalize_languages(source)),
        Category::Certifications => Section::Certifications(normalize_certifications(source)),
        Category::Awards => Section::Awards(normalize_awards(source)),
        Category::Projects => Section::Projects(normalize_projects(source)),
    }
}

pub(crate) fn assemble(
    sections: impl IntoIterator<Item = Section>,
    root: &Object,
) -> CanonicalProfile {
    let mut profile = CanonicalProfile::default();
    for section in sections {
        match section {
            Section::PersonalInfo(info) => profile.personal_info = info,
            Section::Experience(items) => profile.experience = items,
            Section::Education(items) => profile.education = items,
            Section::Skills(groups) => profile.skills = merge_skill_groups(groups),
            Section::Languages(items) => profile.languages = items,
            Section::Certifications(items) => profile.certifications = items,
            Section::Awards(items) => profile.awards = items,
            Section::Projects(items) => profile.projects = items,
        }
    }
    let flat = first_list(root, FLAT_SOFT_SKILL_KEYS)
        .map(string_list)
        .unwrap_or_default();
    profile.soft_skills = reconcile_soft_skills(&mut profile.skills, flat);
    profile
}

/// Merges groups that share a label (case-insensitive), and all soft groups into the
/// first soft group. Duplicate skills within a group are dropped.
fn merge_skill_groups(groups: Vec<SkillGroup>) -> Vec<SkillGroup> {
    let mut merged: Vec<SkillGroup> = Vec::new();
    for group in groups {
        let target = merged.iter().position(|m| {
            (group.kind == SkillKind::Soft && m.kind == SkillKind::Soft)
                || m.category.eq_ignore_ascii_case(&group.category)
        });
        match target {
            Some(idx) => {
                debug!(
                    "Merging skill group '{}' into '{}'",
                    group.category, merged[idx].category
                );
                push_unique(&mut merged[idx].items, group.items);
            }
            None => {
                let mut fresh = SkillGroup {
                    items: Vec::new(),
                    ..group
                };
                push_unique(&mut fresh.items, group.items);
                merged.push(fresh);
            }
        }
    }
    merged
}

fn push_unique(target: &mut Vec<SkillItem>, items: Vec<SkillItem>) {
    for item in items {
        if !target
            .iter()
            .any(|t| t.skill.eq_ignore_ascii_case(&item.skill))
        {
            target.push(item);
        }
    }
}

/// Keeps exactly one rendering path for soft skills: when a soft group exists the flat
/// entries are folded into it and no flat list is returned.
fn reconcile_soft_skills(skills: &mut [SkillGroup], flat: Vec<String>) -> Option<Vec<String>> {
    match skills.iter_mut().find(|g| g.kind == SkillKind::Soft) {
        Some(group) => {
            let extra = flat
                .into_iter()
                .map(|skill| SkillItem {
                    id: SkillItem::derive_id(&group.category, &skill),
                    skill,
                    years_of_experience: None,
                })
                .collect();
            push_unique(&mut group.items, extra);
            None
        }
        None => {
            let mut unique: Vec<String> = Vec::new();
            for skill in flat {
                if !unique.iter().any(|u| u.eq_ignore_ascii_case(&skill)) {
                    unique.push(skill);
                }
            }
            (!unique.is_empty()).then_some(unique)
        }
    }
}
