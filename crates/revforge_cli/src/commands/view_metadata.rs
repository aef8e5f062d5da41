use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;

use revforge_db::DocumentRepository;

use crate::config::Config;

#[derive(Debug, Args)]
pub struct ViewMetadataArgs {
    /// Document to inspect
    pub document: PathBuf,

    /// Export the metadata to a JSON file
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Metadata store path
    #[arg(long)]
    pub db: Option<PathBuf>,
}

pub async fn execute(config: &Config, args: ViewMetadataArgs) -> Result<()> {
    let repo = DocumentRepository::connect(&config.resolve_db(args.db)).await?;
    let filename = args.document.to_string_lossy().into_owned();
    let doc = repo
        .get_by_filename(&filename)
        .await?
        .ok_or_else(|| anyhow!("no metadata stored for {}", filename))?;

    if let Some(path) = &args.json {
        let file = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(file, &doc)?;
        println!("📤 Metadata exported to {}", path.display());
    }

    println!("📄 {}", doc.filename);
    println!("   Author:    {}", doc.author);
    println!("   Created:   {}", doc.created_at.format("%Y-%m-%d %H:%M:%S"));
    println!("   Modified:  {}", doc.last_modified.format("%Y-%m-%d %H:%M:%S"));
    println!("   Sentences: {}", doc.sentences.len());
    println!();
    println!("   {:<4} {:<20} {:<20} {:<6} Text", "#", "Created", "Modified", "Rev");

    for sentence in &doc.sentences {
        let preview: String = if sentence.text.chars().count() > 50 {
            let head: String = sentence.text.chars().take(50).collect();
            format!("{}...", head)
        } else {
            sentence.text.clone()
        };
        println!(
            "   {:<4} {:<20} {:<20} {:<6} {}",
            sentence.position,
            sentence.created_at.format("%Y-%m-%d %H:%M:%S"),
            sentence.modified_at.format("%Y-%m-%d %H:%M:%S"),
            sentence.revision_id,
            preview
        );
    }

    Ok(())
}
