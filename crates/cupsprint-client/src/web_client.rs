// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Async client for the CUPS built-in web interface.
//
// Three operations, each a single plain-HTTP round trip:
//   - GET  /printers/        list printer queues (scraped from links)
//   - GET  /printers/{name}  read a printer's status row
//   - POST /printers/{name}  submit a file as the raw request body
//
// Every operation comes in two flavours. The `try_*` methods return a
// tagged `CupsError`; the plain methods log the failure and fall back to an
// in-band value (empty list, `PrinterStatus::QueryFailed`, `false`) so a UI
// can show the result directly.

use std::error::Error as StdError;
use std::path::Path;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, HeaderValue};
use reqwest::{Body, Client, RequestBuilder};
use tracing::{debug, info, instrument, warn};

use cupsprint_core::error::{CupsError, Result};
use cupsprint_core::{PrinterName, PrinterStatus, ServerConfig};

use crate::auth::basic_auth_header;
use crate::scrape::{parse_printer_list, parse_printer_status};

/// Tuning for the underlying HTTP stack.
///
/// Timeouts are unset by default, leaving the bound to the OS network stack.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Limit on establishing the TCP connection.
    pub connect_timeout: Option<Duration>,
    /// Limit on the whole exchange, upload and response included.
    pub request_timeout: Option<Duration>,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            request_timeout: None,
            user_agent: concat!("cupsprint/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

/// Client for a CUPS server's web interface.
///
/// Holds no per-server state: the [`ServerConfig`] is passed to every call,
/// so one client can serve any number of servers. Idle connections are not
/// kept, so each call opens and closes its own. Cloning is cheap.
///
/// The methods are plain futures. Run them wherever suits the caller
/// (`tokio::spawn`, a UI task pool); the client never spawns on its own.
#[derive(Debug, Clone)]
pub struct CupsClient {
    http: Client,
}

impl CupsClient {
    /// Create a client with default options.
    pub fn new() -> Result<Self> {
        Self::with_options(ClientOptions::default())
    }

    /// Create a client with explicit timeouts and user agent.
    pub fn with_options(options: ClientOptions) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(options.user_agent)
            .pool_max_idle_per_host(0);
        if let Some(timeout) = options.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(|e| CupsError::Transport {
            url: String::new(),
            detail: format!("building HTTP client: {}", error_chain(&e)),
        })?;
        Ok(Self { http })
    }

    // -- Printer listing -----------------------------------------------------

    /// List the printer queues linked from `/printers/`.
    ///
    /// Any failure yields an empty list; use [`try_list_printers`] to tell
    /// "no printers" apart from "request failed".
    ///
    /// [`try_list_printers`]: Self::try_list_printers
    pub async fn list_printers(&self, config: &ServerConfig) -> Vec<PrinterName> {
        match self.try_list_printers(config).await {
            Ok(printers) => printers,
            Err(e) => {
                warn!(error = %e, "printer listing failed");
                Vec::new()
            }
        }
    }

    /// List the printer queues linked from `/printers/`.
    ///
    /// Names come back in page order with duplicates removed. A non-2xx
    /// response is an error; its body is not scraped.
    #[instrument(skip(self, config), fields(host = %config.host, port = config.port))]
    pub async fn try_list_printers(&self, config: &ServerConfig) -> Result<Vec<PrinterName>> {
        let url = format!("{}/printers/", config.base_url());
        let html = self.fetch_page(config, &url).await?;
        let printers = parse_printer_list(&html);
        debug!(count = printers.len(), "parsed printer list");
        Ok(printers)
    }

    // -- Printer status ------------------------------------------------------

    /// Read the status row of a printer's page.
    ///
    /// Returns [`PrinterStatus::Unknown`] if the page has no status row and
    /// [`PrinterStatus::QueryFailed`] if the page could not be fetched.
    pub async fn printer_status(&self, config: &ServerConfig, printer: &str) -> PrinterStatus {
        match self.try_printer_status(config, printer).await {
            Ok(Some(text)) => PrinterStatus::Reported(text),
            Ok(None) => PrinterStatus::Unknown,
            Err(e) => {
                warn!(error = %e, printer, "printer status query failed");
                PrinterStatus::QueryFailed
            }
        }
    }

    /// Read the status row of a printer's page.
    ///
    /// `Ok(None)` means the page was fetched but had no status row.
    #[instrument(skip(self, config), fields(host = %config.host, port = config.port))]
    pub async fn try_printer_status(
        &self,
        config: &ServerConfig,
        printer: &str,
    ) -> Result<Option<String>> {
        let url = printer_url(config, printer);
        let html = self.fetch_page(config, &url).await?;
        let status = parse_printer_status(&html);
        debug!(status = status.as_deref().unwrap_or("<none>"), "parsed printer status");
        Ok(status)
    }

    // -- Printing ------------------------------------------------------------

    /// Send a file to a printer. `true` iff the server answered 2xx.
    ///
    /// The file is streamed as-is with the given MIME type; the job id the
    /// server may return is discarded.
    pub async fn print_file(
        &self,
        config: &ServerConfig,
        printer: &str,
        file_path: &Path,
        mime_type: &str,
    ) -> bool {
        match self.try_print_file(config, printer, file_path, mime_type).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, printer, "print submission failed");
                false
            }
        }
    }

    /// Send a file to a printer as the raw body of `POST /printers/{name}`.
    ///
    /// `Content-Length` is the file's size on disk and the body is streamed
    /// from the file without any encoding. The MIME type is not checked.
    #[instrument(
        skip(self, config, file_path),
        fields(host = %config.host, port = config.port, path = %file_path.display())
    )]
    pub async fn try_print_file(
        &self,
        config: &ServerConfig,
        printer: &str,
        file_path: &Path,
        mime_type: &str,
    ) -> Result<()> {
        let file_error = |source: std::io::Error| CupsError::File {
            path: file_path.to_path_buf(),
            source,
        };
        let file = tokio::fs::File::open(file_path).await.map_err(file_error)?;
        let length = file.metadata().await.map_err(file_error)?.len();

        let url = printer_url(config, printer);
        let request = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, mime_type)
            .header(CONTENT_LENGTH, length)
            .body(Body::from(file));

        debug!(mime = mime_type, bytes = length, "uploading document");
        let response = authorize(request, config)
            .send()
            .await
            .map_err(|e| transport_error(&url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CupsError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }

        info!(status = status.as_u16(), bytes = length, "print job accepted by server");
        Ok(())
    }

    // -- Helpers -------------------------------------------------------------

    /// GET a page and return its body, rejecting non-2xx responses.
    async fn fetch_page(&self, config: &ServerConfig, url: &str) -> Result<String> {
        debug!(url, "fetching page");
        let response = authorize(self.http.get(url), config)
            .send()
            .await
            .map_err(|e| transport_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CupsError::HttpStatus {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| transport_error(url, &e))
    }
}

/// `http://{host}:{port}/printers/{printer}`.
///
/// The name is not escaped here, but reqwest's URL parser normalizes the
/// path when the request is built: a space goes out as `%20`, and `?` or `#`
/// start a query or fragment. Names scraped from the printer list are
/// already in link form, so they round-trip unchanged.
fn printer_url(config: &ServerConfig, printer: &str) -> String {
    format!("{}/printers/{}", config.base_url(), printer)
}

/// Attach the Basic auth header when the config carries credentials.
fn authorize(request: RequestBuilder, config: &ServerConfig) -> RequestBuilder {
    match basic_auth_header(config).and_then(|h| HeaderValue::from_str(&h).ok()) {
        Some(mut value) => {
            value.set_sensitive(true);
            request.header(AUTHORIZATION, value)
        }
        None => request,
    }
}

fn transport_error(url: &str, err: &reqwest::Error) -> CupsError {
    if err.is_timeout() {
        CupsError::Timeout {
            url: url.to_owned(),
        }
    } else {
        CupsError::Transport {
            url: url.to_owned(),
            detail: cause_chain(err),
        }
    }
}

/// The sources of a reqwest error, without reqwest's own message.
///
/// reqwest's top-level message embeds the URL, which must not leak into
/// `detail` where callers match on the cause text.
fn cause_chain(err: &reqwest::Error) -> String {
    match err.source() {
        Some(cause) => error_chain(cause),
        None => {
            if err.is_builder() {
                "invalid request".to_owned()
            } else if err.is_body() {
                "request body failed".to_owned()
            } else if err.is_decode() {
                "response body could not be decoded".to_owned()
            } else {
                "request failed".to_owned()
            }
        }
    }
}

/// Render an error with its sources, e.g. "error sending request: ...: Connection refused".
fn error_chain(err: &dyn StdError) -> String {
    let mut detail = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    detail
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printer_url_leaves_name_unescaped() {
        let config = ServerConfig::new("10.0.0.5", 631);
        assert_eq!(
            printer_url(&config, "Office_LaserJet"),
            "http://10.0.0.5:631/printers/Office_LaserJet"
        );
    }

    #[test]
    fn default_options_have_no_timeouts() {
        let options = ClientOptions::default();
        assert!(options.connect_timeout.is_none());
        assert!(options.request_timeout.is_none());
        assert!(options.user_agent.starts_with("cupsprint/"));
    }

    #[test]
    fn client_builds_with_timeouts() {
        let options = ClientOptions {
            connect_timeout: Some(Duration::from_secs(5)),
            request_timeout: Some(Duration::from_secs(30)),
            ..Default::default()
        };
        assert!(CupsClient::with_options(options).is_ok());
    }

    #[test]
    fn error_chain_includes_sources() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "Connection refused");
        let outer = std::io::Error::other(inner);
        assert!(error_chain(&outer).contains("Connection refused"));
    }
}
