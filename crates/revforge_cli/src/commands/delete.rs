use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use revforge_db::DocumentRepository;

use crate::config::Config;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Document whose metadata should be removed
    pub document: PathBuf,

    /// Metadata store path
    #[arg(long)]
    pub db: Option<PathBuf>,
}

pub async fn execute(config: &Config, args: DeleteArgs) -> Result<()> {
    let repo = DocumentRepository::connect(&config.resolve_db(args.db)).await?;
    let filename = args.document.to_string_lossy().into_owned();

    if repo.delete_document(&filename).await? {
        println!("🗑️  Removed metadata for {}", filename);
    } else {
        println!("ℹ️  No metadata stored for {}", filename);
    }
    Ok(())
}
