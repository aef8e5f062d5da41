//! OPC container handling: unpack a zip of XML parts into an addressable
//! map, repack deterministically.
//!
//! Parts not touched by a transform round-trip byte-for-byte. Repacking
//! writes parts in sorted name order with fixed zip metadata so repeated
//! runs over identical logical input are bit-identical.

use std::collections::BTreeMap;
use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::{Error, Result};

/// Well-known part names of a word-processing package.
pub const DOCUMENT_PART: &str = "word/document.xml";
pub const SETTINGS_PART: &str = "word/settings.xml";
pub const CORE_PROPS_PART: &str = "docProps/core.xml";
pub const APP_PROPS_PART: &str = "docProps/app.xml";

/// An in-memory document package: part name -> raw bytes.
///
/// `BTreeMap` keeps iteration (and therefore repack) order stable without
/// any extra bookkeeping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Package {
    parts: BTreeMap<String, Vec<u8>>,
}

impl Package {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unpack a zip container, validating that the body and core-properties
    /// parts are present.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| Error::NotAPackage(e.to_string()))?;

        let mut parts = BTreeMap::new();
        for i in 0..archive.len() {
            let mut entry = archive
                .by_index(i)
                .map_err(|e| Error::NotAPackage(e.to_string()))?;
            if entry.is_dir() {
                continue;
            }
            let name = entry.name().to_string();
            let mut data = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut data)?;
            parts.insert(name, data);
        }

        let pkg = Self { parts };
        for required in [DOCUMENT_PART, CORE_PROPS_PART] {
            if !pkg.parts.contains_key(required) {
                return Err(Error::MissingRequiredPart(required.to_string()));
            }
        }
        Ok(pkg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Repack into zip bytes. Deterministic: sorted part order, fixed
    /// timestamps, fixed compression.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        for (name, data) in &self.parts {
            writer
                .start_file(name.as_str(), options)
                .map_err(|e| Error::NotAPackage(e.to_string()))?;
            writer.write_all(data)?;
        }

        let cursor = writer
            .finish()
            .map_err(|e| Error::NotAPackage(e.to_string()))?;
        Ok(cursor.into_inner())
    }

    /// Write the package to `path` by way of a temporary sibling file, so
    /// the destination is never left half-written.
    pub fn write_atomic(&self, path: &Path) -> Result<()> {
        let bytes = self.to_bytes()?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp_path = Path::new(&tmp);
        fs::write(tmp_path, &bytes)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    pub fn part(&self, name: &str) -> Option<&[u8]> {
        self.parts.get(name).map(|v| v.as_slice())
    }

    /// Fetch a part that must exist.
    pub fn required_part(&self, name: &str) -> Result<&[u8]> {
        self.part(name)
            .ok_or_else(|| Error::MissingRequiredPart(name.to_string()))
    }

    pub fn set_part(&mut self, name: &str, data: Vec<u8>) {
        self.parts.insert(name.to_string(), data);
    }

    pub fn has_part(&self, name: &str) -> bool {
        self.parts.contains_key(name)
    }

    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
