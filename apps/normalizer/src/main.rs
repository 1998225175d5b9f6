use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use profile_normalizer::config::Config;
use profile_normalizer::{normalize_str, summarize_with};

/// Normalizes a CV profile (editor or parsed-document shape) into the canonical shape.
#[derive(Debug, Parser)]
#[command(name = "profile-normalizer", version, about)]
struct Cli {
    /// JSON document to normalize; reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Print the confirmation summary instead of the canonical profile.
    #[arg(long)]
    summary: bool,

    /// Single-line JSON output.
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    debug!("Starting profile-normalizer v{}", env!("CARGO_PKG_VERSION"));

    let raw = read_input(cli.input.as_deref())?;
    let profile = normalize_str(&raw)
        .map_err(|e| anyhow::anyhow!("[{}] Failed to normalize profile: {e}", e.code()))?;
    if profile.is_empty() {
        warn!("Input produced an empty profile");
    }
    info!(
        "Normalized profile with {} experience and {} education entries",
        profile.experience.len(),
        profile.education.len()
    );

    let output = if cli.summary {
        to_json(&summarize_with(&profile, &config.summary_limits), cli.compact)?
    } else {
        to_json(&profile, cli.compact)?
    };
    println!("{output}");

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read input file '{}'", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read profile JSON from stdin")?;
            Ok(buf)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}
