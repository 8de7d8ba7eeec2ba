// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HTTP Basic authentication for the CUPS web interface.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use cupsprint_core::ServerConfig;

/// Build the `Authorization` header value for `config`.
///
/// Returns `None` unless both user name and password are non-empty, in which
/// case the request goes out anonymously. The encoded value never contains
/// line breaks.
pub fn basic_auth_header(config: &ServerConfig) -> Option<String> {
    let (user, pass) = config.credentials()?;
    let token = STANDARD.encode(format!("{user}:{pass}"));
    Some(format!("Basic {token}"))
}
