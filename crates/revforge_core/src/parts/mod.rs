//! Serde models for the XML parts this engine authors from scratch.
//!
//! Parts rewritten inside foreign documents (the sanitizer paths) are
//! handled at the event level instead; these models only ever serialize.

pub mod document;
pub mod properties;
pub mod settings;
pub mod templates;

use chrono::{DateTime, Utc};

pub const WORDPROCESSING_NS: &str =
    "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const CORE_PROPS_NS: &str =
    "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
pub const EXTENDED_PROPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties";
pub const DC_NS: &str = "http://purl.org/dc/elements/1.1/";
pub const DCTERMS_NS: &str = "http://purl.org/dc/terms/";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const VT_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes";

pub const XML_DECLARATION: &str =
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// UTC at second precision, the timestamp syntax required by both the
/// revision attributes (`w:date`) and the Dublin Core W3CDTF properties.
pub fn format_utc_seconds(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
