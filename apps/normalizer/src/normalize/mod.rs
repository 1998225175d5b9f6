// Profile normalization pipeline.
// Classifier -> per-category normalizers -> aggregator passes.
// Pure and synchronous: no I/O, every call allocates a fresh profile.

pub mod aggregator;
pub mod classifier;
pub mod credentials;
pub mod defaults;
pub mod education;
pub mod experience;
pub mod languages;
pub mod period;
pub mod personal;
pub mod projects;
pub mod skills;
mod value;

pub use aggregator::{normalize, normalize_str, try_normalize};
pub use classifier::{classify, Category, SkillEncoding, SourceShape};
pub use defaults::{FieldDefaults, DEFAULTS};
pub use languages::classify_language_level;
pub use period::{format_date_range, format_period, parse_date, parse_date_on, ParsedDate};
