pub mod profile;
pub mod summary;

pub use profile::{
    CanonicalProfile, Certification, Education, Experience, Language, LanguageLevel,
    PersonalInfo, Project, SkillGroup, SkillItem, SkillKind,
};
pub use summary::{SummaryLimits, SummarySection};
