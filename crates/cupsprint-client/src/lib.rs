// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// cupsprint client — talks to a CUPS server through its web interface:
// printer listing and status by scraping HTML, printing by posting the raw
// file. Core types live in `cupsprint-core`.

pub mod auth;
pub mod scanner;
pub mod scrape;
pub mod web_client;

pub use auth::basic_auth_header;
pub use web_client::{ClientOptions, CupsClient};
