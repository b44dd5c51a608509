//! Human-readable output formatter.
//!
//! Formats findings for terminal display, one block per finding:
//!
//! ```text
//! error[missing-required-file]: Favicon is missing (required)
//!   --> public/favicon.svg
//! ```

use super::ReportFormatter;
use crate::check::{Severity, ValidationReport};
use std::io::Write;

/// Formats findings for human consumption.
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &ValidationReport, writer: &mut W) -> std::io::Result<()> {
        for finding in &report.findings {
            // Header line: error[kind]: message
            writeln!(
                writer,
                "{}[{}]: {}",
                finding.severity(),
                finding.kind,
                finding.message
            )?;
            writeln!(writer, "  --> {}", finding.path.display())?;

            if let Some(ref suggestion) = finding.suggestion {
                writeln!(writer, "   = help: {}", suggestion)?;
            }

            writeln!(writer)?;
        }

        // Summary
        let error_count = report
            .findings
            .iter()
            .filter(|f| f.severity() == Severity::Error)
            .count();
        let warning_count = report
            .findings
            .iter()
            .filter(|f| f.severity() == Severity::Warning)
            .count();

        if error_count > 0 || warning_count > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s)",
                error_count, warning_count
            )?;
        }

        Ok(())
    }
}
