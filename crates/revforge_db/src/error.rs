use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("document not found: {0}")]
    DocumentNotFound(String),

    #[error("sentence not found: document {document_id}, position {position}")]
    SentenceNotFound { document_id: i64, position: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;
