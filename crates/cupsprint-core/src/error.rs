// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for cupsprint.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all CUPS client operations.
#[derive(Debug, Error)]
pub enum CupsError {
    // -- Transport --
    /// `detail` is the underlying cause chain only; the URL lives in `url`.
    #[error("request to {url} failed: {detail}")]
    Transport { url: String, detail: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("{url} answered with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    // -- Local files --
    #[error("cannot read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -- Scanning --
    #[error("network scanning is not supported")]
    ScanUnsupported,
}

impl CupsError {
    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when a configured connect or request timeout expired.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// True when the server could not be reached or the exchange broke off.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CupsError>;
