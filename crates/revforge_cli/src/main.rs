use clap::{Parser, Subcommand};

mod commands;
mod config;
mod segment;
mod utils;

use config::Config;

#[derive(Parser)]
#[command(name = "revforge")]
#[command(about = "Fabricate and strip revision history in Word documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a document with a synthesized per-sentence edit history
    Create(commands::create::CreateArgs),

    /// Rewrite the edit instant of one sentence and rebuild the document
    EditTimestamp(commands::edit_timestamp::EditTimestampArgs),

    /// Show the stored metadata for a document
    ViewMetadata(commands::view_metadata::ViewMetadataArgs),

    /// Strip revision markup and neutralize metadata in any document
    Sanitize(commands::sanitize::SanitizeArgs),

    /// Remove a document and its sentences from the metadata store
    Delete(commands::delete::DeleteArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    let cli = Cli::parse();

    match cli.command {
        Commands::Create(args) => commands::create::execute(&config, args).await?,
        Commands::EditTimestamp(args) => commands::edit_timestamp::execute(&config, args).await?,
        Commands::ViewMetadata(args) => commands::view_metadata::execute(&config, args).await?,
        // Sanitize is package-only and never touches the store.
        Commands::Sanitize(args) => commands::sanitize::execute(args)?,
        Commands::Delete(args) => commands::delete::execute(&config, args).await?,
    }

    Ok(())
}
