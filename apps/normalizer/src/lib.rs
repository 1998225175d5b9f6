//! CV profile normalization.
//!
//! Two producers feed profile data in incompatible shapes: the manual profile editor
//! and an external document-parsing service. [`normalize`] folds either (or a mix of
//! both, section by section) into one [`CanonicalProfile`]; [`summarize`] derives the
//! pre-save confirmation preview from it.

pub mod config;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod summary;

pub use errors::NormalizeError;
pub use models::{CanonicalProfile, SummaryLimits, SummarySection};
pub use normalize::{normalize, normalize_str, try_normalize};
pub use summary::{summarize, summarize_with};
