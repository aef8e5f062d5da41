use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One sentence of a document together with its fabricated edit metadata.
///
/// Positions are contiguous and 0-indexed within a document; revision ids
/// are positive and unique within a document so a rebuild of the same
/// sentence set never duplicates ids in the body part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceRecord {
    pub position: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub author: String,
    pub revision_id: i64,
}

/// A document and its ordered sentences, as held by the metadata store.
///
/// Invariant: `last_modified` equals the max of the sentence timestamps and
/// is never earlier than `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: i64,
    pub filename: String,
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub author: String,
    pub last_modified_by: String,
    pub sentences: Vec<SentenceRecord>,
}

/// Document-level properties carried into the package parts. Ephemeral:
/// these are not persisted beyond the generated file.
#[derive(Debug, Clone, Default)]
pub struct DocumentProperties {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,
    pub comments: Option<String>,
    pub total_edit_time_minutes: Option<u32>,
}

/// How the injector renders the per-sentence timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionMode {
    /// Insertions present and pre-accepted: default view shows plain text,
    /// per-run author/date attributes remain inspectable in the XML.
    Final,
    /// Visible track changes: insertions plus the tracking-enabled setting.
    Suggestions,
    /// No revision markup at all; only document-level properties persist.
    Clean,
}

impl FromStr for RevisionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "final" => Ok(RevisionMode::Final),
            "suggestions" => Ok(RevisionMode::Suggestions),
            "clean" => Ok(RevisionMode::Clean),
            other => Err(Error::UnsupportedMode(other.to_string())),
        }
    }
}

impl fmt::Display for RevisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RevisionMode::Final => "final",
            RevisionMode::Suggestions => "suggestions",
            RevisionMode::Clean => "clean",
        };
        f.write_str(s)
    }
}

/// The four tracked-change constructs of the wire format. Insertions and
/// move-to wrap content that survives sanitization; deletions and move-from
/// wrap content that must not resurface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionKind {
    Insertion,
    Deletion,
    MoveFrom,
    MoveTo,
}

impl RevisionKind {
    /// Local element name in the wordprocessing namespace.
    pub fn local_name(self) -> &'static str {
        match self {
            RevisionKind::Insertion => "ins",
            RevisionKind::Deletion => "del",
            RevisionKind::MoveFrom => "moveFrom",
            RevisionKind::MoveTo => "moveTo",
        }
    }

    /// Whether the wrapped content is kept (unwrapped) when stripping
    /// revision markup.
    pub fn keeps_content(self) -> bool {
        matches!(self, RevisionKind::Insertion | RevisionKind::MoveTo)
    }
}
