// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Network scanning placeholder.
//
// The front-end has a scan screen, but no scanner protocol (eSCL, SANE over
// the network) is implemented yet. Calls report `CupsError::ScanUnsupported`
// so the screen can tell the user instead of hanging.

use tracing::{debug, warn};

use cupsprint_core::ScanResult;
use cupsprint_core::error::{CupsError, Result};

/// Ask the scanner at `server_url` for a scan.
///
/// Always fails with [`CupsError::ScanUnsupported`].
pub async fn try_scan_document(
    server_url: &str,
    username: Option<&str>,
    _password: Option<&str>,
) -> Result<ScanResult> {
    debug!(server_url, user = username.unwrap_or("<anonymous>"), "scan requested");
    Err(CupsError::ScanUnsupported)
}

/// Ask the scanner at `server_url` for a scan, folding failures into the result.
pub async fn scan_document(
    server_url: &str,
    username: Option<&str>,
    password: Option<&str>,
) -> ScanResult {
    match try_scan_document(server_url, username, password).await {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, server_url, "scan failed");
            ScanResult::failed(e.to_string())
        }
    }
}
