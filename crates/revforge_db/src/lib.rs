//! SQLite-backed metadata store for documents and their sentence records.

pub mod error;
pub mod repository;

pub use error::{Error, Result};
pub use repository::DocumentRepository;
