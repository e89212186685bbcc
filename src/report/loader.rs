//! Reads `checkstyle-result.xml` into its element tree.
//!
//! Only the parts the summary needs are modelled: direct `file` children of
//! the root and their direct `error` children. Everything else in the
//! document (the root's `version`, `severity` on errors, `exception`
//! elements) is skipped by the deserializer.

use crate::error::{CheckstatError, Result};
use encoding_rs::{Encoding, UTF_8};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::{Deserialize, Deserializer};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// The `<checkstyle>` root.
#[derive(Debug, Default, Deserialize)]
pub struct CheckstyleReport {
    #[serde(rename = "file", default)]
    pub files: Vec<FileElement>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FileElement {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "error", default)]
    pub errors: Vec<ErrorElement>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ErrorElement {
    #[serde(rename = "@line", default, deserialize_with = "lenient_number")]
    pub line: Option<u32>,
    #[serde(rename = "@column", default, deserialize_with = "lenient_number")]
    pub column: Option<u32>,
    #[serde(rename = "@message")]
    pub message: Option<String>,
    #[serde(rename = "@source")]
    pub source: Option<String>,
}

/// Positions are informational only; a value that is not a number is
/// treated as absent rather than failing the whole report.
fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

/// Loads and parses the report at `path`.
///
/// # Errors
/// `ReportMissing` if nothing exists at `path`, `Io` if it cannot be read,
/// `Parse` if it is not a well-formed report.
pub fn load(path: &Path) -> Result<CheckstyleReport> {
    if !path.exists() {
        return Err(CheckstatError::ReportMissing {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| CheckstatError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    parse(&decode(&bytes))
}

/// Decodes report bytes to text, honouring a BOM or the encoding named in
/// the XML declaration when the bytes are not already UTF-8.
fn decode(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text.trim_start_matches('\u{feff}'));
    }
    let encoding = declared_encoding(bytes).unwrap_or(UTF_8);
    let (text, _, _) = encoding.decode(bytes);
    text
}

fn declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let mut reader = Reader::from_reader(bytes);
    match reader.read_event() {
        Ok(Event::Decl(decl)) => {
            let label = decl.encoding()?.ok()?;
            Encoding::for_label(&label)
        }
        _ => None,
    }
}

/// Parses report text.
///
/// # Errors
/// Returns the deserializer's error unchanged for malformed input.
pub fn parse(xml: &str) -> Result<CheckstyleReport> {
    Ok(quick_xml::de::from_str(xml)?)
}
