//! Rendering of validation results.

use std::io::{self, Write};

use oeval_core::Violation;
use serde::Serialize;

/// The outcome for one record of a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemReport {
    /// Zero-based position in the input.
    pub index: usize,
    pub valid: bool,
    pub violations: Vec<Violation>,
}

impl ItemReport {
    pub fn new(index: usize, (valid, violations): (bool, Vec<Violation>)) -> Self {
        Self {
            index,
            valid,
            violations,
        }
    }
}

/// Per-item text: `Item #i:`, the validity, then numbered violations.
/// Ends with a one-line summary.
pub fn render_text(reports: &[ItemReport], out: &mut impl Write) -> io::Result<()> {
    for report in reports {
        writeln!(out, "Item #{}:", report.index)?;
        writeln!(out, "{}", report.valid)?;
        for (j, violation) in report.violations.iter().enumerate() {
            writeln!(out, "{}. {violation}", j + 1)?;
        }
    }
    let valid = reports.iter().filter(|r| r.valid).count();
    writeln!(out, "{valid}/{} items valid", reports.len())
}

/// A pretty-printed JSON array of [`ItemReport`]s.
pub fn render_json(reports: &[ItemReport], out: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)
}
