use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use chrono::Utc;

use revforge_core::{builder, injector, timeline};
use revforge_core::{DocumentProperties, RevisionMode};
use revforge_db::DocumentRepository;

use crate::config::Config;
use crate::segment;
use crate::utils::parse_timestamp;

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Text content for the document
    pub text: Option<String>,

    /// Read text from a file instead
    #[arg(short = 'f', long)]
    pub input_file: Option<PathBuf>,

    /// Output document path
    #[arg(short, long, default_value = "output.docx")]
    pub output: PathBuf,

    /// Author recorded on the document and every revision
    #[arg(short, long, default_value = "Anonymous")]
    pub author: String,

    /// Timestamp of the first sentence (default: now)
    #[arg(short = 's', long)]
    pub start_date: Option<String>,

    /// Minimum seconds between sentence edits
    #[arg(long, default_value_t = 30)]
    pub min_interval: i64,

    /// Maximum seconds between sentence edits
    #[arg(long, default_value_t = 300)]
    pub max_interval: i64,

    /// Rendering mode: final, suggestions or clean
    #[arg(short, long, default_value = "suggestions")]
    pub mode: String,

    /// Document title
    #[arg(long)]
    pub title: Option<String>,

    /// Document subject
    #[arg(long)]
    pub subject: Option<String>,

    /// Document keywords
    #[arg(long)]
    pub keywords: Option<String>,

    /// Document comments
    #[arg(long)]
    pub comments: Option<String>,

    /// Total editing time in minutes
    #[arg(long)]
    pub total_edit_time: Option<u32>,

    /// Metadata store path
    #[arg(long)]
    pub db: Option<PathBuf>,
}

pub async fn execute(config: &Config, args: CreateArgs) -> Result<()> {
    let mode: RevisionMode = args.mode.parse()?;

    let text = match (&args.text, &args.input_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => bail!("provide text as an argument or via --input-file"),
    };

    let sentences = segment::split_into_sentences(&text);
    println!("📖 Parsed {} sentences", sentences.len());

    let start = match &args.start_date {
        Some(s) => parse_timestamp(s)?,
        None => Utc::now(),
    };

    let mut rng = rand::thread_rng();
    let records = timeline::generate(
        &sentences,
        start,
        args.min_interval,
        args.max_interval,
        &args.author,
        &mut rng,
    )?;

    let db_path = config.resolve_db(args.db);
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let repo = DocumentRepository::connect(&db_path).await?;

    let filename = args.output.to_string_lossy().into_owned();
    let doc = repo
        .create_document(&filename, &records, &args.author)
        .await?;
    println!("💾 Metadata stored ({} sentences)", doc.sentences.len());

    let props = DocumentProperties {
        title: args.title,
        subject: args.subject,
        keywords: args.keywords,
        comments: args.comments,
        total_edit_time_minutes: args.total_edit_time,
    };

    let baseline = builder::build(&doc.sentences, &props, &args.author)?;
    let package = injector::inject(&baseline, &doc.sentences, mode)?;
    package.write_atomic(&args.output)?;

    println!("✅ Document created: {}", args.output.display());
    println!(
        "   Edit window: {} -> {}",
        doc.created_at.format("%Y-%m-%d %H:%M:%S"),
        doc.last_modified.format("%Y-%m-%d %H:%M:%S")
    );
    println!("   Mode: {}", mode);

    Ok(())
}
