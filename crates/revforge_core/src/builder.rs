//! Plain document builder: records in, baseline package out.
//!
//! The baseline is a complete, independently openable document with no
//! revision markup. It is the substrate the injector rewrites.

use crate::error::{Error, Result};
use crate::models::{DocumentProperties, SentenceRecord};
use crate::package::{
    Package, APP_PROPS_PART, CORE_PROPS_PART, DOCUMENT_PART, SETTINGS_PART,
};
use crate::parts::document::{DocumentPart, Paragraph};
use crate::parts::properties::{AppPropertiesPart, CorePropertiesPart};
use crate::parts::settings::SettingsPart;
use crate::parts::templates::{
    CONTENT_TYPES_PART, CONTENT_TYPES_XML, DOCUMENT_RELS_PART, DOCUMENT_RELS_XML,
    ROOT_RELS_PART, ROOT_RELS_XML,
};
use crate::parts::format_utc_seconds;

/// Build a baseline package from the sentence records: one plain paragraph
/// per sentence, core properties spanning the first and last timestamps,
/// app properties with the edit-time counter, tracking flag off.
pub fn build(
    records: &[SentenceRecord],
    props: &DocumentProperties,
    author: &str,
) -> Result<Package> {
    let (first, last) = match (records.first(), records.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return Err(Error::EmptyDocument),
    };

    let paragraphs: Vec<Paragraph> = records
        .iter()
        .map(|r| Paragraph::plain(&r.text))
        .collect();
    let document = DocumentPart::new(paragraphs);

    let mut core = CorePropertiesPart::new(
        author,
        format_utc_seconds(first.created_at),
        format_utc_seconds(last.modified_at),
    );
    core.title = props.title.clone();
    core.subject = props.subject.clone();
    core.keywords = props.keywords.clone();
    core.description = props.comments.clone();

    let app = AppPropertiesPart::new(props.total_edit_time_minutes);
    let settings = SettingsPart::new(false);

    let mut pkg = Package::new();
    pkg.set_part(CONTENT_TYPES_PART, CONTENT_TYPES_XML.as_bytes().to_vec());
    pkg.set_part(ROOT_RELS_PART, ROOT_RELS_XML.as_bytes().to_vec());
    pkg.set_part(DOCUMENT_RELS_PART, DOCUMENT_RELS_XML.as_bytes().to_vec());
    pkg.set_part(DOCUMENT_PART, document.to_xml()?.into_bytes());
    pkg.set_part(SETTINGS_PART, settings.to_xml()?.into_bytes());
    pkg.set_part(CORE_PROPS_PART, core.to_xml()?.into_bytes());
    pkg.set_part(APP_PROPS_PART, app.to_xml()?.into_bytes());
    Ok(pkg)
}
