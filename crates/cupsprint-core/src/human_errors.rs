// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for notifications shown by the front-end.
//
// Every client error is mapped to plain English with a clear suggestion.
// The severity drives how the caller presents it.

use crate::error::CupsError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Network blip, timeout, busy server. Trying again may work.
    Transient,
    /// User must do something (fix credentials, pick another file or printer).
    ActionRequired,
    /// Retrying will not help.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading or toast).
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    /// Whether trying again unchanged could succeed.
    pub retriable: bool,
    pub severity: Severity,
}

/// Convert a `CupsError` into a `HumanError` fit for a notification.
pub fn humanize_error(err: &CupsError) -> HumanError {
    match err {
        CupsError::Timeout { .. } => HumanError {
            message: "The print server didn't respond in time.".into(),
            suggestion: "The server might be busy or turned off. Check it's running, then try again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        CupsError::Transport { detail, .. } => humanize_transport_error(detail),

        CupsError::HttpStatus { status, .. } => humanize_status(*status),

        CupsError::File { source, .. } => match source.kind() {
            std::io::ErrorKind::NotFound => HumanError {
                message: "The file couldn't be found.".into(),
                suggestion: "It may have been moved or deleted. Try choosing the file again.".into(),
                retriable: false,
                severity: Severity::ActionRequired,
            },
            std::io::ErrorKind::PermissionDenied => HumanError {
                message: "The app doesn't have permission to read that file.".into(),
                suggestion: "Try copying the file to a different location first.".into(),
                retriable: false,
                severity: Severity::ActionRequired,
            },
            _ => HumanError {
                message: "There was a problem reading the file.".into(),
                suggestion: "Try again, or choose a different file.".into(),
                retriable: true,
                severity: Severity::Transient,
            },
        },

        CupsError::ScanUnsupported => HumanError {
            message: "Scanning isn't available yet.".into(),
            suggestion: "Scan the document on the scanner itself and print the saved file.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}

fn humanize_transport_error(detail: &str) -> HumanError {
    let lower = detail.to_ascii_lowercase();

    if lower.contains("connection refused") {
        HumanError {
            message: "The print server refused our connection.".into(),
            suggestion: "Check the server address and port (CUPS usually uses 631).".into(),
            retriable: true,
            severity: Severity::Transient,
        }
    } else if lower.contains("dns") || lower.contains("resolve") {
        HumanError {
            message: "We couldn't find the print server.".into(),
            suggestion: "Check the server address is typed correctly.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        }
    } else if lower.contains("connection reset") || lower.contains("broken pipe") || lower.contains("closed") {
        HumanError {
            message: "The connection to the print server was interrupted.".into(),
            suggestion: "This sometimes happens with Wi-Fi. Try again.".into(),
            retriable: true,
            severity: Severity::Transient,
        }
    } else {
        HumanError {
            message: "We couldn't reach the print server.".into(),
            suggestion: format!("Make sure this device is on the same network as the server. (Detail: {detail})"),
            retriable: true,
            severity: Severity::Transient,
        }
    }
}

fn humanize_status(status: u16) -> HumanError {
    match status {
        401 | 403 => HumanError {
            message: "The print server rejected the login.".into(),
            suggestion: "Check the user name and password, then try again.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },
        404 => HumanError {
            message: "That printer doesn't exist on the server.".into(),
            suggestion: "Refresh the printer list and choose another printer.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },
        500..=599 => HumanError {
            message: "The print server had a problem.".into(),
            suggestion: format!("Wait a moment and try again. (HTTP {status})"),
            retriable: true,
            severity: Severity::Transient,
        },
        _ => HumanError {
            message: "The print server didn't accept the request.".into(),
            suggestion: format!("The file type may not be supported. Try a PDF instead. (HTTP {status})"),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> CupsError {
        CupsError::HttpStatus {
            url: "http://cups.local:631/printers/Office".into(),
            status: code,
        }
    }

    #[test]
    fn timeout_is_transient() {
        let err = CupsError::Timeout {
            url: "http://cups.local:631/printers/".into(),
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Transient);
        assert!(human.retriable);
    }

    #[test]
    fn refused_connection_is_transient() {
        let err = CupsError::Transport {
            url: "http://cups.local:631/printers/".into(),
            detail: "error trying to connect: tcp connect error: Connection refused (os error 111)".into(),
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Transient);
        assert!(human.suggestion.contains("631"));
    }

    #[test]
    fn auth_rejection_needs_action() {
        for code in [401, 403] {
            let human = humanize_error(&status(code));
            assert_eq!(human.severity, Severity::ActionRequired);
            assert!(!human.retriable);
        }
    }

    #[test]
    fn server_error_is_transient_and_client_error_permanent() {
        assert_eq!(humanize_error(&status(503)).severity, Severity::Transient);
        assert_eq!(humanize_error(&status(415)).severity, Severity::Permanent);
        assert_eq!(humanize_error(&status(404)).severity, Severity::ActionRequired);
    }

    #[test]
    fn missing_file_needs_action() {
        let err = CupsError::File {
            path: "/sdcard/Download/gone.pdf".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
    }

    #[test]
    fn scanning_is_permanent() {
        let human = humanize_error(&CupsError::ScanUnsupported);
        assert_eq!(human.severity, Severity::Permanent);
        assert!(!human.retriable);
    }
}
