use serde::Serialize;

use crate::error::{Error, Result};
use crate::package::DOCUMENT_PART;

use super::{WORDPROCESSING_NS, XML_DECLARATION};

// ---------------------------------------------------------------------------
// The body part: <w:document>
// One paragraph per sentence; a paragraph holds either tracked insertions
// or plain runs, never both.
// ---------------------------------------------------------------------------
#[derive(Debug, Serialize)]
#[serde(rename = "w:document")]
pub struct DocumentPart {
    #[serde(rename = "@xmlns:w")]
    pub xmlns_w: String,

    #[serde(rename = "w:body")]
    pub body: Body,
}

#[derive(Debug, Serialize)]
pub struct Body {
    #[serde(rename = "w:p")]
    pub paragraphs: Vec<Paragraph>,

    #[serde(rename = "w:sectPr", skip_serializing_if = "Option::is_none")]
    pub section: Option<SectionProps>,
}

#[derive(Debug, Serialize)]
pub struct Paragraph {
    #[serde(rename = "w:ins", skip_serializing_if = "Vec::is_empty")]
    pub insertions: Vec<Insertion>,

    #[serde(rename = "w:r", skip_serializing_if = "Vec::is_empty")]
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn plain(text: &str) -> Self {
        Self {
            insertions: Vec::new(),
            runs: vec![Run::text(text)],
        }
    }

    pub fn tracked(text: &str, id: i64, author: String, date: String) -> Self {
        Self {
            insertions: vec![Insertion {
                id,
                author,
                date,
                runs: vec![Run::text(text)],
            }],
            runs: Vec::new(),
        }
    }
}

/// A tracked-insertion construct: `<w:ins w:id w:author w:date>`.
#[derive(Debug, Serialize)]
pub struct Insertion {
    #[serde(rename = "@w:id")]
    pub id: i64,

    #[serde(rename = "@w:author")]
    pub author: String,

    #[serde(rename = "@w:date")]
    pub date: String,

    #[serde(rename = "w:r")]
    pub runs: Vec<Run>,
}

#[derive(Debug, Serialize)]
pub struct Run {
    #[serde(rename = "w:t")]
    pub text: TextNode,
}

impl Run {
    pub fn text(value: &str) -> Self {
        // Leading or trailing whitespace is only honored with xml:space.
        let needs_preserve = value != value.trim();
        Self {
            text: TextNode {
                space: needs_preserve.then(|| "preserve".to_string()),
                value: value.to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TextNode {
    #[serde(rename = "@xml:space", skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,

    #[serde(rename = "$text")]
    pub value: String,
}

// ---------------------------------------------------------------------------
// Minimal section properties so the document opens with sane page geometry.
// ---------------------------------------------------------------------------
#[derive(Debug, Serialize)]
pub struct SectionProps {
    #[serde(rename = "w:pgSz")]
    pub page_size: PageSize,

    #[serde(rename = "w:pgMar")]
    pub margins: PageMargins,
}

impl Default for SectionProps {
    fn default() -> Self {
        // US Letter in twentieths of a point, one-inch margins.
        Self {
            page_size: PageSize { w: 12240, h: 15840 },
            margins: PageMargins {
                top: 1440,
                right: 1440,
                bottom: 1440,
                left: 1440,
                header: 720,
                footer: 720,
                gutter: 0,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PageSize {
    #[serde(rename = "@w:w")]
    pub w: u32,
    #[serde(rename = "@w:h")]
    pub h: u32,
}

#[derive(Debug, Serialize)]
pub struct PageMargins {
    #[serde(rename = "@w:top")]
    pub top: i32,
    #[serde(rename = "@w:right")]
    pub right: i32,
    #[serde(rename = "@w:bottom")]
    pub bottom: i32,
    #[serde(rename = "@w:left")]
    pub left: i32,
    #[serde(rename = "@w:header")]
    pub header: i32,
    #[serde(rename = "@w:footer")]
    pub footer: i32,
    #[serde(rename = "@w:gutter")]
    pub gutter: i32,
}

impl DocumentPart {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            xmlns_w: WORDPROCESSING_NS.to_string(),
            body: Body {
                paragraphs,
                section: Some(SectionProps::default()),
            },
        }
    }

    pub fn to_xml(&self) -> Result<String> {
        let body = quick_xml::se::to_string(self).map_err(|e| Error::Serialize {
            part: DOCUMENT_PART.to_string(),
            reason: e.to_string(),
        })?;
        Ok(format!("{}{}", XML_DECLARATION, body))
    }
}
