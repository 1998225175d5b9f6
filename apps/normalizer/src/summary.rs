//! Summary builder: a category-bucketed preview of a canonical profile, shown for
//! confirmation before parsed data is saved. Purely derived from its input.

use crate::models::{CanonicalProfile, SkillGroup, SkillKind, SummaryLimits, SummarySection};

pub fn summarize(profile: &CanonicalProfile) -> Vec<SummarySection> {
    summarize_with(profile, &SummaryLimits::default())
}

/// Sections appear in a fixed order; empty sections are omitted.
pub fn summarize_with(profile: &CanonicalProfile, limits: &SummaryLimits) -> Vec<SummarySection> {
    let truncate = |text: &str| truncate_text(text, limits.text_chars);
    let mut sections = Vec::new();

    push_section(&mut sections, "Personal Info", personal_items(profile));

    if !profile.personal_info.summary.is_empty() {
        push_section(
            &mut sections,
            "About Me",
            vec![truncate(&profile.personal_info.summary)],
        );
    }

    push_section(
        &mut sections,
        "Education",
        profile
            .education
            .iter()
            .map(|e| {
                let mut line = e.degree.clone();
                if !e.major.is_empty() {
                    line.push_str(&format!(" in {}", e.major));
                }
                line.push_str(&format!(", {}", e.school));
                truncate(&with_period(line, &e.period))
            })
            .collect(),
    );

    push_section(
        &mut sections,
        "Work Experience",
        profile
            .experience
            .iter()
            .map(|e| {
                let line = match (e.position.is_empty(), e.company.is_empty()) {
                    (false, false) => format!("{} at {}", e.position, e.company),
                    (false, true) => e.position.clone(),
                    (true, _) => e.company.clone(),
                };
                truncate(&with_period(line, &e.period))
            })
            .collect(),
    );

    push_section(
        &mut sections,
        "Projects",
        profile
            .projects
            .iter()
            .map(|p| {
                let mut line = p.name.clone();
                if !p.description.is_empty() {
                    line.push_str(&format!(": {}", p.description));
                }
                let mut line = truncate(&line);
                if !p.technologies.is_empty() {
                    line.push_str(&format!(
                        " [{}]",
                        preview_list(&p.technologies, limits.preview_items)
                    ));
                }
                line
            })
            .collect(),
    );

    let technical: Vec<&SkillGroup> = profile
        .skills
        .iter()
        .filter(|g| g.kind == SkillKind::Technical)
        .collect();
    if !technical.is_empty() {
        let items: Vec<String> = technical
            .iter()
            .map(|g| {
                let names: Vec<String> = g.items.iter().map(|i| i.skill.clone()).collect();
                format!("{}: {}", g.category, preview_list(&names, limits.preview_items))
            })
            .collect();
        sections.push(SummarySection {
            category: "Technical Skills".to_string(),
            count: technical.iter().map(|g| g.items.len()).sum(),
            items,
        });
    }

    let soft: Vec<String> = profile
        .skills
        .iter()
        .filter(|g| g.kind == SkillKind::Soft)
        .flat_map(|g| g.items.iter().map(|i| i.skill.clone()))
        .chain(profile.soft_skills.iter().flatten().cloned())
        .collect();
    push_section(&mut sections, "Soft Skills", soft);

    push_section(
        &mut sections,
        "Languages",
        profile
            .languages
            .iter()
            .map(|l| format!("{} ({})", l.language, l.level.as_str()))
            .collect(),
    );

    push_section(
        &mut sections,
        "Certificates",
        profile
            .certifications
            .iter()
            .map(|c| truncate(&format!("{} - {}", c.name, c.issuer)))
            .collect(),
    );

    push_section(
        &mut sections,
        "Awards",
        profile.awards.iter().map(|a| truncate(a)).collect(),
    );

    sections
}

fn push_section(sections: &mut Vec<SummarySection>, category: &str, items: Vec<String>) {
    if items.is_empty() {
        return;
    }
    sections.push(SummarySection {
        category: category.to_string(),
        count: items.len(),
        items,
    });
}

fn personal_items(profile: &CanonicalProfile) -> Vec<String> {
    let info = &profile.personal_info;
    [
        ("Name", Some(&info.name)),
        ("Title", Some(&info.title)),
        ("Email", Some(&info.email)),
        ("Phone", Some(&info.phone)),
        ("Location", Some(&info.location)),
        ("Website", info.website.as_ref()),
        ("LinkedIn", info.linkedin.as_ref()),
        ("GitHub", info.github.as_ref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
        value
            .filter(|v| !v.is_empty())
            .map(|v| format!("{label}: {v}"))
    })
    .collect()
}

fn with_period(line: String, period: &str) -> String {
    if period.is_empty() {
        line
    } else {
        format!("{line} ({period})")
    }
}

/// Cuts to `limit` characters (not bytes) and appends `...` when anything was cut.
pub fn truncate_text(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{}...", cut.trim_end())
}

/// `a, b, c, d, e (+2 more)`
fn preview_list(names: &[String], cap: usize) -> String {
    let shown = names.iter().take(cap).cloned().collect::<Vec<_>>().join(", ");
    if names.len() > cap {
        format!("{shown} (+{} more)", names.len() - cap)
    } else {
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::models::{Education, Experience, Project};
    use crate::normalize::normalize;

    fn section<'a>(sections: &'a [SummarySection], category: &str) -> &'a SummarySection {
        sections
            .iter()
            .find(|s| s.category == category)
            .unwrap_or_else(|| panic!("missing section {category}"))
    }

    #[test]
    fn test_six_education_entries_all_listed() {
        let profile = CanonicalProfile {
            education: (0..6)
                .map(|i| Education {
                    school: format!("School {i}"),
                    degree: "BSc".to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        };
        let sections = summarize(&profile);
        let edu = section(&sections, "Education");
        assert_eq!(edu.count, 6);
        assert_eq!(edu.items.len(), 6);
        assert_eq!(edu.items[0], "BSc, School 0");
    }

    #[test]
    fn test_empty_profile_has_no_sections() {
        assert!(summarize(&CanonicalProfile::default()).is_empty());
    }

    #[test]
    fn test_section_order() {
        let profile = normalize(&json!({
            "personalInfo": {"name": "Ada", "summary": "Analyst."},
            "education": [{"school": "Home", "period": ""}],
            "experience": [{"position": "Analyst", "company": "Babbage", "period": "1843"}],
            "projects": [{"name": "Notes"}],
            "skills": {"technical_skills": ["Math"], "soft_skills": ["Writing"]},
            "languages": ["English (Native)"],
            "certifications": [{"name": "Fellow", "date": "1840-01-01"}],
            "awards": ["Honorary"]
        }));
        let order: Vec<String> = summarize(&profile)
            .into_iter()
            .map(|s| s.category)
            .collect();
        assert_eq!(
            order,
            vec![
                "Personal Info",
                "About Me",
                "Education",
                "Work Experience",
                "Projects",
                "Technical Skills",
                "Soft Skills",
                "Languages",
                "Certificates",
                "Awards"
            ]
        );
    }

    #[test]
    fn test_long_text_truncated_with_ellipsis() {
        let long = "x".repeat(150);
        let profile = CanonicalProfile {
            personal_info: crate::models::PersonalInfo {
                summary: long,
                ..Default::default()
            },
            ..Default::default()
        };
        let sections = summarize(&profile);
        let about = section(&sections, "About Me");
        assert_eq!(about.items[0].chars().count(), 103);
        assert!(about.items[0].ends_with("..."));
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_text("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_text("short", 100), "short");
    }

    #[test]
    fn test_skill_previews_capped() {
        let profile = normalize(&json!({
            "skills": ["A", "B", "C", "D", "E", "F", "G"]
        }));
        let sections = summarize(&profile);
        let tech = section(&sections, "Technical Skills");
        assert_eq!(tech.count, 7);
        assert_eq!(tech.items, vec!["Technical Skills: A, B, C, D, E (+2 more)"]);
    }

    #[test]
    fn test_soft_skills_from_flat_list() {
        let profile = normalize(&json!({"softSkills": ["Patience", "Humor"]}));
        let sections = summarize(&profile);
        assert_eq!(section(&sections, "Soft Skills").count, 2);
        assert!(sections.iter().all(|s| s.category != "Technical Skills"));
    }

    #[test]
    fn test_experience_and_project_lines() {
        let profile = CanonicalProfile {
            experience: vec![Experience {
                position: "Engineer".to_string(),
                company: "Acme".to_string(),
                period: "2020 - Present".to_string(),
                ..Default::default()
            }],
            projects: vec![Project {
                name: "CLI".to_string(),
                technologies: vec!["Rust".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };
        let sections = summarize(&profile);
        assert_eq!(
            section(&sections, "Work Experience").items,
            vec!["Engineer at Acme (2020 - Present)"]
        );
        assert_eq!(section(&sections, "Projects").items, vec!["CLI [Rust]"]);
    }

    #[test]
    fn test_custom_limits() {
        let profile = normalize(&json!({"awards": ["A very long award title"]}));
        let limits = SummaryLimits {
            text_chars: 6,
            preview_items: 1,
        };
        let sections = summarize_with(&profile, &limits);
        assert_eq!(section(&sections, "Awards").items, vec!["A very..."]);
    }
}
