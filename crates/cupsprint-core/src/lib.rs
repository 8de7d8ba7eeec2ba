// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// cupsprint — Core types and error definitions shared between the client
// crate and the front-end that calls it.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod types;

pub use config::{DEFAULT_CUPS_PORT, ServerConfig};
pub use error::CupsError;
pub use types::*;
