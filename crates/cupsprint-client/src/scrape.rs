// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Extraction of printer names and status text from CUPS web pages.
//
// LIMITATION: these patterns follow the markup of the CUPS built-in web UI.
// There is no version negotiation and no IPP fallback; a server whose pages
// are laid out differently yields an empty list or an unknown status.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use cupsprint_core::PrinterName;

/// Links into the printer tree: `/printers/<name>` up to the next quote.
#[allow(clippy::expect_used)]
static PRINTER_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"/printers/([^"]+)"#).expect("printer link regex is valid"));

/// The status row of a printer page. First match wins; the cell may span lines.
#[allow(clippy::expect_used)]
static STATUS_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<TR><TH>Status:</TH><TD>(.*?)</TD></TR>").expect("status row regex is valid")
});

/// Printer names linked from a page, in first-occurrence order.
///
/// Empty names and repeats are dropped.
pub fn parse_printer_list(html: &str) -> Vec<PrinterName> {
    let mut printers: Vec<PrinterName> = Vec::new();
    for caps in PRINTER_LINK.captures_iter(html) {
        let name = &caps[1];
        if name.is_empty() || printers.iter().any(|p| p == name) {
            continue;
        }
        trace!(printer = name, "found printer link");
        printers.push(PrinterName::from(name));
    }
    printers
}

/// Text of the first status row, or `None` if the page has none.
pub fn parse_printer_status(html: &str) -> Option<String> {
    STATUS_ROW
        .captures(html)
        .map(|caps| caps[1].to_owned())
}
