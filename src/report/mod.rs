//! Report formatters.
//!
//! This module provides formatters for writing a
//! [`ValidationReport`](crate::check::ValidationReport) in different formats
//! (human-readable, JSON).

pub mod human;
pub mod json;

use crate::check::ValidationReport;
use std::io::Write;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting a report.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &ValidationReport, writer: &mut W) -> std::io::Result<()>;
}

/// Format a report into a string.
pub fn render<F: ReportFormatter>(formatter: &F, report: &ValidationReport) -> String {
    let mut output = Vec::new();
    formatter.format(report, &mut output).ok();
    String::from_utf8(output).unwrap_or_default()
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
