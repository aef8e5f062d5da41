use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;

use revforge_core::{builder, injector};
use revforge_core::{DocumentProperties, RevisionMode};
use revforge_db::DocumentRepository;

use crate::config::Config;
use crate::utils::parse_timestamp;

#[derive(Debug, Args)]
pub struct EditTimestampArgs {
    /// Document to edit (must have been created by this tool)
    pub document: PathBuf,

    /// Sentence position, 0-indexed
    #[arg(short = 'n', long)]
    pub sentence: i64,

    /// New timestamp for the sentence
    #[arg(short = 't', long)]
    pub timestamp: String,

    /// Rendering mode for the rebuilt document
    #[arg(short, long, default_value = "suggestions")]
    pub mode: String,

    /// Metadata store path
    #[arg(long)]
    pub db: Option<PathBuf>,
}

pub async fn execute(config: &Config, args: EditTimestampArgs) -> Result<()> {
    let mode: RevisionMode = args.mode.parse()?;
    let new_instant = parse_timestamp(&args.timestamp)?;

    let repo = DocumentRepository::connect(&config.resolve_db(args.db)).await?;
    let filename = args.document.to_string_lossy().into_owned();
    let doc = repo
        .get_by_filename(&filename)
        .await?
        .ok_or_else(|| anyhow!("no metadata stored for {}", filename))?;

    let updated = repo
        .update_sentence_timestamp(doc.id, args.sentence, new_instant)
        .await?;
    println!(
        "🕑 Sentence {} now modified at {}",
        args.sentence,
        updated.modified_at.format("%Y-%m-%d %H:%M:%S")
    );

    // The package is a pure projection of the store: rebuild it wholesale
    // from the full current record set.
    let doc = repo
        .get_by_filename(&filename)
        .await?
        .ok_or_else(|| anyhow!("document disappeared during rebuild"))?;
    let baseline = builder::build(&doc.sentences, &DocumentProperties::default(), &doc.author)?;
    let package = injector::inject(&baseline, &doc.sentences, mode)?;
    package.write_atomic(&args.document)?;

    println!("✅ Rebuilt {}", args.document.display());
    Ok(())
}
