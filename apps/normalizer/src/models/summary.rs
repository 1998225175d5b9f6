use serde::{Deserialize, Serialize};

/// One category bucket of the pre-save confirmation preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySection {
    pub category: String,
    pub count: usize,
    pub items: Vec<String>,
}

/// Truncation and preview caps applied while summarizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLimits {
    /// Long text is cut to this many characters, then `...` is appended.
    pub text_chars: usize,
    /// Inner lists (skills in a group, technologies) show at most this many names.
    pub preview_items: usize,
}

impl Default for SummaryLimits {
    fn default() -> Self {
        Self {
            text_chars: 100,
            preview_items: 5,
        }
    }
}
