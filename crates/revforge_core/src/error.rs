use thiserror::Error;

/// Failure taxonomy for the revision engine.
///
/// Input errors are rejected before any file I/O; format errors are raised
/// during unpack/parse with no output produced; I/O errors pass through
/// untouched. A transform either yields a complete new package or nothing.
#[derive(Error, Debug)]
pub enum Error {
    // --- Input errors ---
    #[error("invalid edit interval: min {min}s, max {max}s")]
    InvalidInterval { min: i64, max: i64 },

    #[error("no sentences to process")]
    EmptyInput,

    #[error("document has no sentences")]
    EmptyDocument,

    #[error("unsupported revision mode: '{0}' (expected final, suggestions or clean)")]
    UnsupportedMode(String),

    #[error("record count mismatch: {records} sentence records vs {paragraphs} body paragraphs")]
    RecordCountMismatch { records: usize, paragraphs: usize },

    // --- Format errors ---
    #[error("input is not a document package: {0}")]
    NotAPackage(String),

    #[error("required part missing from package: {0}")]
    MissingRequiredPart(String),

    #[error("corrupt package part '{part}': {reason}")]
    CorruptPackage { part: String, reason: String },

    #[error("failed to serialize part '{part}': {reason}")]
    Serialize { part: String, reason: String },

    // --- I/O errors ---
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
