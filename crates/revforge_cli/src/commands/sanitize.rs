use std::path::PathBuf;

use anyhow::Result;
use chrono::{TimeZone, Utc};
use clap::Args;

use revforge_core::sanitizer::{self, DEFAULT_NEUTRAL_AUTHOR};
use revforge_core::{Package, SanitizeOptions};

use crate::utils::parse_timestamp;

#[derive(Debug, Args)]
pub struct SanitizeArgs {
    /// Document to sanitize
    pub document: PathBuf,

    /// Output path (default: overwrite the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Neutral timestamp written over created/modified
    #[arg(long)]
    pub neutral_date: Option<String>,

    /// Neutral identity written over author fields
    #[arg(long, default_value = DEFAULT_NEUTRAL_AUTHOR)]
    pub author: String,

    /// Drop body content instead of keeping it
    #[arg(long)]
    pub drop_content: bool,
}

pub fn execute(args: SanitizeArgs) -> Result<()> {
    let neutral = match &args.neutral_date {
        Some(s) => parse_timestamp(s)?,
        None => Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
    };

    let package = Package::from_file(&args.document)?;
    let options = SanitizeOptions {
        author: args.author,
        keep_content: !args.drop_content,
    };
    let clean = sanitizer::sanitize(&package, neutral, &options)?;

    let output = args.output.unwrap_or_else(|| args.document.clone());
    clean.write_atomic(&output)?;

    println!("🧹 Sanitized: {}", output.display());
    println!("   Removed: tracked changes, revision ids, author and date metadata");
    Ok(())
}
