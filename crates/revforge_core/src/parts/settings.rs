use serde::Serialize;

use crate::error::{Error, Result};
use crate::package::SETTINGS_PART;

use super::{WORDPROCESSING_NS, XML_DECLARATION};

/// word/settings.xml. The only setting this engine cares about is the
/// tracking-enabled flag; everything else in a foreign settings part is
/// preserved by the event-level rewriters.
#[derive(Debug, Serialize)]
#[serde(rename = "w:settings")]
pub struct SettingsPart {
    #[serde(rename = "@xmlns:w")]
    pub xmlns_w: String,

    #[serde(rename = "w:trackRevisions", skip_serializing_if = "Option::is_none")]
    pub track_revisions: Option<TrackRevisions>,
}

#[derive(Debug, Serialize)]
pub struct TrackRevisions;

impl SettingsPart {
    pub fn new(track_revisions: bool) -> Self {
        Self {
            xmlns_w: WORDPROCESSING_NS.to_string(),
            track_revisions: track_revisions.then_some(TrackRevisions),
        }
    }

    pub fn to_xml(&self) -> Result<String> {
        let body = quick_xml::se::to_string(self).map_err(|e| Error::Serialize {
            part: SETTINGS_PART.to_string(),
            reason: e.to_string(),
        })?;
        Ok(format!("{}{}", XML_DECLARATION, body))
    }
}
