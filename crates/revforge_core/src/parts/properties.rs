use serde::Serialize;

use crate::error::{Error, Result};
use crate::package::{APP_PROPS_PART, CORE_PROPS_PART};

use super::{
    CORE_PROPS_NS, DCTERMS_NS, DC_NS, EXTENDED_PROPS_NS, VT_NS, XML_DECLARATION, XSI_NS,
};

pub const DEFAULT_APPLICATION: &str = "Microsoft Office Word";
pub const DEFAULT_APP_VERSION: &str = "16.0000";

// ---------------------------------------------------------------------------
// docProps/core.xml — Dublin Core package metadata
// ---------------------------------------------------------------------------
#[derive(Debug, Serialize)]
#[serde(rename = "cp:coreProperties")]
pub struct CorePropertiesPart {
    #[serde(rename = "@xmlns:cp")]
    pub xmlns_cp: String,
    #[serde(rename = "@xmlns:dc")]
    pub xmlns_dc: String,
    #[serde(rename = "@xmlns:dcterms")]
    pub xmlns_dcterms: String,
    #[serde(rename = "@xmlns:xsi")]
    pub xmlns_xsi: String,

    #[serde(rename = "dc:title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "dc:subject", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(rename = "dc:creator")]
    pub creator: String,

    #[serde(rename = "cp:keywords", skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,

    #[serde(rename = "dc:description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "cp:lastModifiedBy")]
    pub last_modified_by: String,

    #[serde(rename = "cp:revision")]
    pub revision: u32,

    #[serde(rename = "dcterms:created")]
    pub created: W3cdtf,

    #[serde(rename = "dcterms:modified")]
    pub modified: W3cdtf,
}

/// A dcterms timestamp, always tagged with the W3CDTF schema type.
#[derive(Debug, Serialize)]
pub struct W3cdtf {
    #[serde(rename = "@xsi:type")]
    pub xsi_type: String,

    #[serde(rename = "$text")]
    pub value: String,
}

impl W3cdtf {
    pub fn new(value: String) -> Self {
        Self {
            xsi_type: "dcterms:W3CDTF".to_string(),
            value,
        }
    }
}

impl CorePropertiesPart {
    pub fn new(creator: &str, created: String, modified: String) -> Self {
        Self {
            xmlns_cp: CORE_PROPS_NS.to_string(),
            xmlns_dc: DC_NS.to_string(),
            xmlns_dcterms: DCTERMS_NS.to_string(),
            xmlns_xsi: XSI_NS.to_string(),
            title: None,
            subject: None,
            creator: creator.to_string(),
            keywords: None,
            description: None,
            last_modified_by: creator.to_string(),
            revision: 1,
            created: W3cdtf::new(created),
            modified: W3cdtf::new(modified),
        }
    }

    pub fn to_xml(&self) -> Result<String> {
        let body = quick_xml::se::to_string(self).map_err(|e| Error::Serialize {
            part: CORE_PROPS_PART.to_string(),
            reason: e.to_string(),
        })?;
        Ok(format!("{}{}", XML_DECLARATION, body))
    }
}

// ---------------------------------------------------------------------------
// docProps/app.xml — extended (application) properties
// TotalTime is the cumulative edit time in whole minutes, the unit the
// format natively uses.
// ---------------------------------------------------------------------------
#[derive(Debug, Serialize)]
#[serde(rename = "Properties")]
pub struct AppPropertiesPart {
    #[serde(rename = "@xmlns")]
    pub xmlns: String,
    #[serde(rename = "@xmlns:vt")]
    pub xmlns_vt: String,

    #[serde(rename = "Application")]
    pub application: String,

    #[serde(rename = "TotalTime", skip_serializing_if = "Option::is_none")]
    pub total_time: Option<u32>,

    #[serde(rename = "AppVersion")]
    pub app_version: String,

    #[serde(rename = "Company")]
    pub company: String,
}

impl AppPropertiesPart {
    pub fn new(total_edit_time_minutes: Option<u32>) -> Self {
        Self {
            xmlns: EXTENDED_PROPS_NS.to_string(),
            xmlns_vt: VT_NS.to_string(),
            application: DEFAULT_APPLICATION.to_string(),
            total_time: total_edit_time_minutes,
            app_version: DEFAULT_APP_VERSION.to_string(),
            company: String::new(),
        }
    }

    pub fn to_xml(&self) -> Result<String> {
        let body = quick_xml::se::to_string(self).map_err(|e| Error::Serialize {
            part: APP_PROPS_PART.to_string(),
            reason: e.to_string(),
        })?;
        Ok(format!("{}{}", XML_DECLARATION, body))
    }
}
