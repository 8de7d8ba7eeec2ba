// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the CUPS web client.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Name of a printer queue as it appears in the CUPS web interface.
///
/// Opaque: the value is the exact text found after `/printers/` in a link,
/// with no decoding or case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrinterName(String);

impl PrinterName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PrinterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PrinterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PrinterName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for PrinterName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for PrinterName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PrinterName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Outcome of a printer status query.
///
/// `Unknown` and `QueryFailed` are kept apart: the first means the page was
/// fetched but had no recognisable status row, the second means the server
/// could not be reached or read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrinterStatus {
    /// Text scraped from the status row, verbatim.
    Reported(String),
    /// Page fetched, no status row found.
    Unknown,
    /// Request or read failed.
    QueryFailed,
}

impl PrinterStatus {
    /// The scraped text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Reported(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for PrinterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reported(text) => f.write_str(text),
            Self::Unknown => f.write_str("unknown"),
            Self::QueryFailed => f.write_str("query failed"),
        }
    }
}

/// MIME type assumed when a picked file's type cannot be determined.
pub const DEFAULT_MIME_TYPE: &str = "application/pdf";

/// MIME types a file picker should offer for printing.
pub const PICKER_MIME_TYPES: [&str; 3] = ["application/pdf", "image/png", "image/jpeg"];

/// Document formats the front-end knows how to label.
///
/// The client itself sends whatever MIME string it is given; this type only
/// helps callers pick one for a local file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    Pdf,
    Png,
    Jpeg,
    /// Any other MIME type, passed through untouched.
    Other(String),
}

impl DocumentType {
    /// MIME type string for the `Content-Type` header.
    pub fn mime_type(&self) -> &str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Other(mime) => mime,
        }
    }

    /// Infer document type from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// Guess from a path's extension, falling back to PDF like the picker does.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .unwrap_or(Self::Pdf)
    }

    /// Parse a MIME string, keeping unrecognised types as `Other`.
    pub fn from_mime(mime: &str) -> Self {
        match mime.to_ascii_lowercase().as_str() {
            "application/pdf" => Self::Pdf,
            "image/png" => Self::Png,
            "image/jpeg" | "image/jpg" => Self::Jpeg,
            _ => Self::Other(mime.to_owned()),
        }
    }
}

/// Result of a scan request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Scanned image or PDF, when one was produced.
    pub file: Option<PathBuf>,
    pub success: bool,
    /// Explanation for the user when `success` is false.
    pub message: Option<String>,
}

impl ScanResult {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            file: None,
            success: false,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_sentinels_are_distinct() {
        assert_ne!(PrinterStatus::Unknown, PrinterStatus::QueryFailed);
        assert_ne!(
            PrinterStatus::Unknown.to_string(),
            PrinterStatus::QueryFailed.to_string()
        );
        assert_eq!(PrinterStatus::Reported("idle".into()).to_string(), "idle");
        assert_eq!(PrinterStatus::Unknown.text(), None);
    }

    #[test]
    fn printer_name_compares_with_str() {
        let name = PrinterName::from("LaserJet");
        assert_eq!(name, "LaserJet");
        assert_eq!(name.as_str(), "LaserJet");
        assert_eq!(name.to_string(), "LaserJet");
    }

    #[test]
    fn document_type_from_path() {
        assert_eq!(DocumentType::from_path(Path::new("scan.PNG")), DocumentType::Png);
        assert_eq!(DocumentType::from_path(Path::new("photo.jpeg")), DocumentType::Jpeg);
        assert_eq!(DocumentType::from_path(Path::new("report")), DocumentType::Pdf);
        assert_eq!(
            DocumentType::from_path(Path::new("notes.txt")).mime_type(),
            DEFAULT_MIME_TYPE
        );
    }

    #[test]
    fn other_mime_passes_through() {
        let doc = DocumentType::from_mime("application/postscript");
        assert_eq!(doc, DocumentType::Other("application/postscript".into()));
        assert_eq!(doc.mime_type(), "application/postscript");
        assert_eq!(DocumentType::from_mime("IMAGE/PNG"), DocumentType::Png);
    }

    #[test]
    fn picker_types_match_known_documents() {
        for mime in PICKER_MIME_TYPES {
            assert!(!matches!(DocumentType::from_mime(mime), DocumentType::Other(_)));
        }
    }
}
