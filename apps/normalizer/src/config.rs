use anyhow::{Context, Result};

use crate::models::SummaryLimits;

/// Runtime configuration loaded from environment variables.
/// Nothing is required; every variable has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    pub summary_limits: SummaryLimits,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = SummaryLimits::default();
        Ok(Config {
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            summary_limits: SummaryLimits {
                text_chars: optional_env("SUMMARY_TEXT_LIMIT", defaults.text_chars)?,
                preview_items: optional_env("SUMMARY_PREVIEW_LIMIT", defaults.preview_items)?,
            },
        })
    }
}

fn optional_env(key: &str, default: usize) -> Result<usize> {
    match std::env::var(key) {
        Ok(raw) => parse_limit(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_limit(key: &str, raw: &str) -> Result<usize> {
    raw.trim()
        .parse::<usize>()
        .with_context(|| format!("{key} must be a non-negative integer, got '{raw}'"))
}
