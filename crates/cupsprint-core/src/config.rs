// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Connection parameters for a CUPS server.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Conventional port of the CUPS web interface.
pub const DEFAULT_CUPS_PORT: u16 = 631;

/// Where the CUPS server lives and how to authenticate against it.
///
/// Built by the caller from user input and passed to every client call.
/// The password is never serialized, so a config written to disk by the
/// front-end does not carry credentials.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host name or IP address of the CUPS server.
    pub host: String,
    /// Port of the web interface (default 631).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Basic auth user name.
    #[serde(default)]
    pub username: Option<String>,
    /// Basic auth password.
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
}

fn default_port() -> u16 {
    DEFAULT_CUPS_PORT
}

impl ServerConfig {
    /// Anonymous config for `host:port`.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            username: None,
            password: None,
        }
    }

    /// Attach Basic auth credentials.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Returns the credentials when both are present and non-empty.
    ///
    /// An empty user name or password means an anonymous request.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => Some((user, pass)),
            _ => None,
        }
    }

    /// `http://{host}:{port}`, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
