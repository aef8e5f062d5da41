//! Sanitizer: strips every tracked-change construct and neutralizes the
//! identifying metadata of a package, whoever produced it.
//!
//! The transform is pure and idempotent: sanitizing an already-sanitized
//! package changes nothing.

use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::{Reader, Writer};

use crate::error::Result;
use crate::models::RevisionKind;
use crate::package::{
    Package, APP_PROPS_PART, CORE_PROPS_PART, DOCUMENT_PART, SETTINGS_PART,
};
use crate::parts::format_utc_seconds;
use crate::parts::properties::{DEFAULT_APPLICATION, DEFAULT_APP_VERSION};
use crate::xml;

pub const DEFAULT_NEUTRAL_AUTHOR: &str = "Anonymous";

#[derive(Debug, Clone)]
pub struct SanitizeOptions {
    /// Neutral identity written over creator and last-modified-by.
    pub author: String,
    /// When false, body paragraphs are dropped entirely instead of kept.
    pub keep_content: bool,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            author: DEFAULT_NEUTRAL_AUTHOR.to_string(),
            keep_content: true,
        }
    }
}

/// Revision formatting marks that are removed wholesale along with the
/// deletion-flavored constructs.
const DROPPED_MARKS: &[&[u8]] = &[
    b"rPrChange",
    b"pPrChange",
    b"moveFromRangeStart",
    b"moveFromRangeEnd",
    b"moveToRangeStart",
    b"moveToRangeEnd",
];

fn is_unwrapped(local: &[u8]) -> bool {
    local == RevisionKind::Insertion.local_name().as_bytes()
        || local == RevisionKind::MoveTo.local_name().as_bytes()
}

fn is_dropped(local: &[u8]) -> bool {
    local == RevisionKind::Deletion.local_name().as_bytes()
        || local == RevisionKind::MoveFrom.local_name().as_bytes()
        || DROPPED_MARKS.contains(&local)
}

/// Sanitize a package against the neutral instant. Returns a new package;
/// the input is untouched, and nothing is produced on failure.
pub fn sanitize(
    pkg: &Package,
    neutral: DateTime<Utc>,
    options: &SanitizeOptions,
) -> Result<Package> {
    let mut out = pkg.clone();

    let body = pkg.required_part(DOCUMENT_PART)?;
    out.set_part(
        DOCUMENT_PART,
        strip_revisions(body, options.keep_content)?,
    );

    if let Some(settings) = pkg.part(SETTINGS_PART) {
        out.set_part(
            SETTINGS_PART,
            xml::set_tracking_flag(settings, SETTINGS_PART, false)?,
        );
    }

    let neutral_str = format_utc_seconds(neutral);
    let core = pkg.required_part(CORE_PROPS_PART)?;
    out.set_part(
        CORE_PROPS_PART,
        xml::replace_element_text(
            core,
            CORE_PROPS_PART,
            &[
                ("creator", options.author.as_str()),
                ("lastModifiedBy", options.author.as_str()),
                ("title", ""),
                ("subject", ""),
                ("description", ""),
                ("keywords", ""),
                ("revision", "1"),
                ("created", neutral_str.as_str()),
                ("modified", neutral_str.as_str()),
            ],
        )?,
    );

    if let Some(app) = pkg.part(APP_PROPS_PART) {
        out.set_part(
            APP_PROPS_PART,
            xml::replace_element_text(
                app,
                APP_PROPS_PART,
                &[
                    ("Company", ""),
                    ("Manager", ""),
                    ("Application", DEFAULT_APPLICATION),
                    ("AppVersion", DEFAULT_APP_VERSION),
                ],
            )?,
        );
    }

    Ok(out)
}

/// Rewrite a body part: unwrap insertions and move-to (their content was
/// accepted), delete deletions and move-from subtrees (their content must
/// not resurface), drop formatting-change marks. With `keep_content`
/// false, whole paragraphs go too.
fn strip_revisions(bytes: &[u8], keep_content: bool) -> Result<Vec<u8>> {
    let mut reader = Reader::from_reader(bytes);
    let mut writer = Writer::new(Vec::new());
    let mut buf = Vec::new();
    // Depth inside a subtree being deleted outright.
    let mut drop_depth = 0usize;
    // Open wrapper elements whose start tags were suppressed; their end
    // tags must be suppressed too.
    let mut open_unwrapped = 0usize;

    loop {
        let ev = reader
            .read_event_into(&mut buf)
            .map_err(|e| xml::corrupt(DOCUMENT_PART, e))?;

        if drop_depth > 0 {
            match ev {
                Event::Start(_) => drop_depth += 1,
                Event::End(_) => drop_depth -= 1,
                Event::Eof => {
                    return Err(xml::corrupt(DOCUMENT_PART, "unexpected end of document"))
                }
                _ => {}
            }
            buf.clear();
            continue;
        }

        match ev {
            Event::Eof => break,
            Event::Start(e) => {
                let local = e.local_name();
                let local = local.as_ref();
                if is_dropped(local) || (!keep_content && local == b"p") {
                    drop_depth = 1;
                } else if is_unwrapped(local) {
                    open_unwrapped += 1;
                } else {
                    writer.write_event(Event::Start(e.to_owned()))?;
                }
            }
            Event::Empty(e) => {
                let local = e.local_name();
                let local = local.as_ref();
                let erased = is_dropped(local)
                    || is_unwrapped(local)
                    || (!keep_content && local == b"p");
                if !erased {
                    writer.write_event(Event::Empty(e.to_owned()))?;
                }
            }
            Event::End(e) => {
                if is_unwrapped(e.local_name().as_ref()) && open_unwrapped > 0 {
                    open_unwrapped -= 1;
                } else {
                    writer.write_event(Event::End(e.to_owned()))?;
                }
            }
            other => writer.write_event(other)?,
        }
        buf.clear();
    }

    Ok(writer.into_inner())
}
