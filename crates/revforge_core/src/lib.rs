//! OOXML revision engine: synthesizes a per-sentence edit timeline,
//! serializes it into a word-processing package as native tracked-insertion
//! markup, and can reverse the process by stripping all revision markup and
//! metadata back to a neutral state.

pub mod builder;
pub mod error;
pub mod injector;
pub mod models;
pub mod package;
pub mod parts;
pub mod sanitizer;
pub mod timeline;

mod xml;

pub use error::{Error, Result};
pub use models::{
    DocumentProperties, DocumentRecord, RevisionKind, RevisionMode, SentenceRecord,
};
pub use package::Package;
pub use sanitizer::SanitizeOptions;
