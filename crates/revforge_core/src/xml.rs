//! Event-level rewriting of parts inside existing packages.
//!
//! Everything here matches on local element names, so a foreign producer's
//! choice of namespace prefix does not matter. Untouched events pass
//! through the writer verbatim.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::{Error, Result};

pub(crate) fn corrupt(part: &str, reason: impl ToString) -> Error {
    Error::CorruptPackage {
        part: part.to_string(),
        reason: reason.to_string(),
    }
}

/// Count the paragraphs in a body part.
pub(crate) fn count_paragraphs(bytes: &[u8], part: &str) -> Result<usize> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut count = 0usize;
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == b"p" {
                    count += 1;
                }
            }
            Ok(_) => {}
            Err(e) => return Err(corrupt(part, e)),
        }
        buf.clear();
    }
    Ok(count)
}

/// Rewrite a settings part so the tracking-enabled flag is present exactly
/// when `enabled`. Any pre-existing flag is removed first; everything else
/// is preserved.
pub(crate) fn set_tracking_flag(bytes: &[u8], part: &str, enabled: bool) -> Result<Vec<u8>> {
    let mut reader = Reader::from_reader(bytes);
    let mut writer = Writer::new(Vec::new());
    let mut buf = Vec::new();
    let mut skip_depth = 0usize;

    loop {
        let ev = reader
            .read_event_into(&mut buf)
            .map_err(|e| corrupt(part, e))?;

        if skip_depth > 0 {
            match ev {
                Event::Start(_) => skip_depth += 1,
                Event::End(_) => skip_depth -= 1,
                Event::Eof => return Err(corrupt(part, "unexpected end of document")),
                _ => {}
            }
            buf.clear();
            continue;
        }

        match ev {
            Event::Eof => break,
            Event::Start(e) if e.local_name().as_ref() == b"trackRevisions" => {
                skip_depth = 1;
            }
            Event::Empty(e) if e.local_name().as_ref() == b"trackRevisions" => {}
            Event::Start(e) if e.local_name().as_ref() == b"settings" => {
                writer.write_event(Event::Start(e.to_owned()))?;
                if enabled {
                    writer.write_event(Event::Empty(BytesStart::new("w:trackRevisions")))?;
                }
            }
            // A childless settings root arrives self-closed; expand it when
            // the flag has to go inside.
            Event::Empty(e) if e.local_name().as_ref() == b"settings" && enabled => {
                let qname = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                writer.write_event(Event::Start(e.to_owned()))?;
                writer.write_event(Event::Empty(BytesStart::new("w:trackRevisions")))?;
                writer.write_event(Event::End(BytesEnd::new(qname)))?;
            }
            other => writer.write_event(other)?,
        }
        buf.clear();
    }

    Ok(writer.into_inner())
}

/// Replace the text content of every element whose local name appears in
/// `replacements`. An empty replacement leaves (or produces) an empty
/// element; attributes on the matched element are preserved.
pub(crate) fn replace_element_text(
    bytes: &[u8],
    part: &str,
    replacements: &[(&str, &str)],
) -> Result<Vec<u8>> {
    let lookup = |local: &[u8]| -> Option<&str> {
        replacements
            .iter()
            .find(|(name, _)| name.as_bytes() == local)
            .map(|(_, value)| *value)
    };

    let mut reader = Reader::from_reader(bytes);
    let mut writer = Writer::new(Vec::new());
    let mut buf = Vec::new();
    // Depth inside a matched element whose original content is discarded.
    let mut replacing_depth = 0usize;

    loop {
        let ev = reader
            .read_event_into(&mut buf)
            .map_err(|e| corrupt(part, e))?;

        if replacing_depth > 0 {
            match ev {
                Event::Start(_) => replacing_depth += 1,
                Event::End(e) => {
                    replacing_depth -= 1;
                    if replacing_depth == 0 {
                        writer.write_event(Event::End(e.to_owned()))?;
                    }
                }
                Event::Eof => return Err(corrupt(part, "unexpected end of document")),
                _ => {}
            }
            buf.clear();
            continue;
        }

        match ev {
            Event::Eof => break,
            Event::Start(e) => {
                if let Some(value) = lookup(e.local_name().as_ref()) {
                    writer.write_event(Event::Start(e.to_owned()))?;
                    if !value.is_empty() {
                        writer.write_event(Event::Text(BytesText::new(value)))?;
                    }
                    replacing_depth = 1;
                } else {
                    writer.write_event(Event::Start(e.to_owned()))?;
                }
            }
            Event::Empty(e) => {
                match lookup(e.local_name().as_ref()) {
                    Some(value) if !value.is_empty() => {
                        // Expand <x/> into <x>value</x>.
                        let qname =
                            String::from_utf8_lossy(e.name().as_ref()).into_owned();
                        writer.write_event(Event::Start(e.to_owned()))?;
                        writer.write_event(Event::Text(BytesText::new(value)))?;
                        writer.write_event(Event::End(BytesEnd::new(qname)))?;
                    }
                    _ => writer.write_event(Event::Empty(e.to_owned()))?,
                }
            }
            other => writer.write_event(other)?,
        }
        buf.clear();
    }

    Ok(writer.into_inner())
}
