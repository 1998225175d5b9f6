//! Skills normalizer. Folds every known skills encoding into `SkillGroup`s.
//!
//! Collisions between groups (two soft groups, repeated labels) are left for the
//! aggregator's merge pass.

use serde_json::Value;
use tracing::{debug, warn};

use crate::models::{SkillGroup, SkillItem, SkillKind};
use crate::normalize::classifier::{classify_skills, SkillEncoding};
use crate::normalize::defaults::DEFAULTS;
use crate::normalize::value::{first_list, first_text, text, whole_number, Object};

const SKILL_NAME_KEYS: &[&str] = &["skill", "name"];
const YEARS_KEYS: &[&str] = &["yearsOfExperience", "years_of_experience", "years", "experience"];
const GROUP_ITEM_KEYS: &[&str] = &["items", "skills"];
const TECHNICAL_LABELS: &[&str] = &["technical", "tech", "hard", "core", "technical skills"];

pub fn normalize_skills(source: Option<&Value>) -> Vec<SkillGroup> {
    let Some(value) = source else {
        return Vec::new();
    };
    let encoding = classify_skills(value);
    debug!("Skills encoding: {:?}", encoding.shape());

    let groups: Vec<GroupBuilder> = match encoding {
        SkillEncoding::CanonicalGroups(groups) => {
            groups.iter().filter_map(canonical_group).collect()
        }
        SkillEncoding::ProfileGroups(groups) => groups.iter().filter_map(profile_group).collect(),
        SkillEncoding::ProfileMap(map) => map
            .iter()
            .map(|(label, items)| {
                let mut group = GroupBuilder::new(label, SkillKind::from_label(label));
                group.extend(items.as_array().map(Vec::as_slice).unwrap_or(&[]));
                group
            })
            .collect(),
        SkillEncoding::Buckets { technical, soft } => {
            let mut tech = GroupBuilder::of_kind(SkillKind::Technical);
            tech.extend(technical);
            let mut soft_group = GroupBuilder::of_kind(SkillKind::Soft);
            soft_group.extend(soft);
            vec![tech, soft_group]
        }
        SkillEncoding::Flat(items) => {
            let mut tech = GroupBuilder::of_kind(SkillKind::Technical);
            tech.extend(items);
            vec![tech]
        }
        SkillEncoding::Entries(entries) => group_entries(entries),
        SkillEncoding::Empty => Vec::new(),
        SkillEncoding::Unknown => {
            warn!("Unrecognized skills encoding, treating as empty");
            Vec::new()
        }
    };

    groups.into_iter().filter_map(GroupBuilder::finish).collect()
}

/// Accumulates items for one group, applying id and years defaults.
struct GroupBuilder {
    category: String,
    kind: SkillKind,
    items: Vec<SkillItem>,
}

impl GroupBuilder {
    fn new(category: &str, kind: SkillKind) -> Self {
        Self {
            category: category.trim().to_string(),
            kind,
            items: Vec::new(),
        }
    }

    fn of_kind(kind: SkillKind) -> Self {
        Self::new(kind.default_label(), kind)
    }

    fn extend(&mut self, values: &[Value]) {
        for value in values {
            self.push_value(value);
        }
    }

    fn push_value(&mut self, value: &Value) {
        match value {
            Value::Object(obj) => {
                if let Some(skill) = first_text(obj, SKILL_NAME_KEYS) {
                    let years = YEARS_KEYS
                        .iter()
                        .find_map(|k| obj.get(*k).and_then(whole_number));
                    self.push(skill, years, first_text(obj, &["id"]));
                }
            }
            other => {
                if let Some(skill) = text(other) {
                    self.push(skill, None, None);
                }
            }
        }
    }

    fn push(&mut self, skill: String, years: Option<u32>, id: Option<String>) {
        let years_of_experience = match self.kind {
            SkillKind::Technical => years.or(Some(DEFAULTS.technical_years)),
            SkillKind::Soft => years,
        };
        let id = id.unwrap_or_else(|| SkillItem::derive_id(&self.category, &skill));
        self.items.push(SkillItem {
            id,
            skill,
            years_of_experience,
        });
    }

    fn finish(self) -> Option<SkillGroup> {
        if self.items.is_empty() || self.category.is_empty() {
            return None;
        }
        Some(SkillGroup {
            category: self.category,
            kind: self.kind,
            items: self.items,
        })
    }
}

fn canonical_group(value: &Value) -> Option<GroupBuilder> {
    let obj = value.as_object()?;
    let category = first_text(obj, &["category", "name"])?;
    let kind = explicit_kind(obj).unwrap_or_else(|| SkillKind::from_label(&category));
    let mut group = GroupBuilder::new(&category, kind);
    group.extend(first_list(obj, GROUP_ITEM_KEYS).unwrap_or(&[]));
    Some(group)
}

fn profile_group(value: &Value) -> Option<GroupBuilder> {
    let obj = value.as_object()?;
    let label = first_text(obj, &["name", "category"])?;
    let mut group = GroupBuilder::new(&label, SkillKind::from_label(&label));
    group.extend(first_list(obj, GROUP_ITEM_KEYS).unwrap_or(&[]));
    Some(group)
}

fn explicit_kind(obj: &Object) -> Option<SkillKind> {
    match first_text(obj, &["kind"])?.to_lowercase().as_str() {
        "soft" => Some(SkillKind::Soft),
        "technical" => Some(SkillKind::Technical),
        _ => None,
    }
}

/// `[{name, category?}]` grouped by category in order of first appearance.
fn group_entries(entries: &[Value]) -> Vec<GroupBuilder> {
    let mut groups: Vec<GroupBuilder> = Vec::new();
    for entry in entries {
        let category = entry
            .as_object()
            .and_then(|obj| first_text(obj, &["category", "type"]));
        let (label, kind) = entry_label(category.as_deref());
        let idx = match groups
            .iter()
            .position(|g| g.category.eq_ignore_ascii_case(&label))
        {
            Some(idx) => idx,
            None => {
                groups.push(GroupBuilder::new(&label, kind));
                groups.len() - 1
            }
        };
        groups[idx].push_value(entry);
    }
    groups
}

fn entry_label(category: Option<&str>) -> (String, SkillKind) {
    let Some(category) = category.map(str::trim).filter(|c| !c.is_empty()) else {
        return (SkillKind::Technical.default_label().to_string(), SkillKind::Technical);
    };
    match SkillKind::from_label(category) {
        SkillKind::Soft => (SkillKind::Soft.default_label().to_string(), SkillKind::Soft),
        SkillKind::Technical if TECHNICAL_LABELS.contains(&category.to_lowercase().as_str()) => (
            SkillKind::Technical.default_label().to_string(),
            SkillKind::Technical,
        ),
        SkillKind::Technical => (category.to_string(), SkillKind::Technical),
    }
}
