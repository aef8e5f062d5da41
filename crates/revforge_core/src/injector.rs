//! Revision injector: rewrites a baseline body so each sentence is wrapped
//! in a tracked-insertion construct, and flips the tracking-enabled flag
//! according to the rendering mode.
//!
//! One injection routine drives all three modes so the id/date invariants
//! hold identically across them.

use crate::error::{Error, Result};
use crate::models::{RevisionMode, SentenceRecord};
use crate::package::{Package, DOCUMENT_PART, SETTINGS_PART};
use crate::parts::document::{DocumentPart, Paragraph};
use crate::parts::format_utc_seconds;
use crate::parts::settings::SettingsPart;
use crate::xml;

/// The wire format caps revision author names; truncate rather than fail.
const MAX_AUTHOR_LEN: usize = 255;

fn clamp_author(author: &str) -> String {
    if author.chars().count() <= MAX_AUTHOR_LEN {
        author.to_string()
    } else {
        author.chars().take(MAX_AUTHOR_LEN).collect()
    }
}

/// Rewrite the baseline package for the given mode. Pure: the input
/// package is untouched, a new value is returned. Paragraph order in the
/// output equals `records` order.
///
/// Revision ids are taken from `SentenceRecord.revision_id`; since the
/// body part is rebuilt from scratch for the sentences it owns, upstream
/// uniqueness of those ids is the whole collision story.
pub fn inject(
    baseline: &Package,
    records: &[SentenceRecord],
    mode: RevisionMode,
) -> Result<Package> {
    let body = baseline.required_part(DOCUMENT_PART)?;
    let paragraphs = xml::count_paragraphs(body, DOCUMENT_PART)?;
    if paragraphs != records.len() {
        return Err(Error::RecordCountMismatch {
            records: records.len(),
            paragraphs,
        });
    }

    let rewritten: Vec<Paragraph> = records
        .iter()
        .map(|r| match mode {
            RevisionMode::Clean => Paragraph::plain(&r.text),
            RevisionMode::Final | RevisionMode::Suggestions => Paragraph::tracked(
                &r.text,
                r.revision_id,
                clamp_author(&r.author),
                format_utc_seconds(r.modified_at),
            ),
        })
        .collect();

    // Suggestions is the only mode that forces live markup; final leaves
    // the insertions pre-accepted so a default view renders plain text.
    let tracking = mode == RevisionMode::Suggestions;
    let settings = match baseline.part(SETTINGS_PART) {
        Some(bytes) => xml::set_tracking_flag(bytes, SETTINGS_PART, tracking)?,
        None => SettingsPart::new(tracking).to_xml()?.into_bytes(),
    };

    let mut out = baseline.clone();
    out.set_part(
        DOCUMENT_PART,
        DocumentPart::new(rewritten).to_xml()?.into_bytes(),
    );
    out.set_part(SETTINGS_PART, settings);
    Ok(out)
}
