//! stratfu-extract - converts the authored strategy workbook into
//! `dungeons.json`.
//!
//! One-shot batch run: read the workbook, parse qualifying sheets, write the
//! pretty-printed document, and print a per-sheet summary. Any unrecoverable
//! parse or I/O error aborts the run with a nonzero exit; no partial output
//! is written.

use std::io;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stratfu_core::{extract_document, Config};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Diagnostics go to stderr so stdout stays clean for the summary.
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    info!("stratfu extractor starting");

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            Config::default()
        }
    };

    let source = config.source_path();
    let output = config.output_path();

    let document = extract_document(&source)?;

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(&document)?;
    std::fs::write(&output, json)
        .with_context(|| format!("Failed to write document: {}", output.display()))?;

    for group in &document {
        println!("\nFound {} dungeons in {}", group.dungeons.len(), group.label);
        for (i, dungeon) in group.dungeons.iter().enumerate() {
            println!(
                "  {}. {} ({}) - Boss: {}",
                i + 1,
                dungeon.name,
                dungeon.level,
                dungeon.boss_display()
            );
            if !dungeon.strategies.is_empty() {
                println!("     Strategies: {} entries", dungeon.strategies.len());
            }
            if !dungeon.tips.is_empty() {
                println!("     Tips: {} entries", dungeon.tips.len());
            }
        }
    }

    println!("\nData saved to: {}", output.display());
    info!(sheets = document.len(), "Extraction complete");
    Ok(())
}
