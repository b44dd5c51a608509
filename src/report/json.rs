//! JSON output formatter.
//!
//! Formats a report as machine-readable JSON for CI and tooling integration.

use super::ReportFormatter;
use crate::check::{RequirementLevel, ValidationOutcome, ValidationReport, WorkspaceMarker};
use serde::Serialize;
use std::io::Write;

/// Formats a report as JSON.
///
/// `success` and `exit_code` agree with the process exit status, so
/// `strict` must match the `--strict` flag of the run.
#[derive(Debug, Default)]
pub struct JsonFormatter {
    strict: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    outcome: &'static str,
    success: bool,
    exit_code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    marker: Option<&'a WorkspaceMarker>,
    findings: Vec<JsonFinding>,
    files: Vec<JsonFile>,
    scanned: Vec<String>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonFinding {
    category: &'static str,
    severity: String,
    path: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

#[derive(Serialize)]
struct JsonFile {
    path: String,
    description: String,
    required: bool,
    present: bool,
}

#[derive(Serialize)]
struct JsonError<'a> {
    outcome: &'static str,
    success: bool,
    exit_code: i32,
    error: &'a str,
    suggestion: &'a str,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    warnings: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Write a failure document for a run that produced no report.
    pub fn format_error<W: Write>(
        &self,
        error: &str,
        suggestion: &str,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let output = JsonError {
            outcome: ValidationOutcome::Fail.as_str(),
            success: false,
            exit_code: ValidationOutcome::Fail.exit_code(self.strict),
            error,
            suggestion,
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &ValidationReport, writer: &mut W) -> std::io::Result<()> {
        let findings = report
            .findings
            .iter()
            .map(|f| JsonFinding {
                category: f.kind.id(),
                severity: f.severity().to_string(),
                path: f.path.display().to_string(),
                message: f.message.clone(),
                suggestion: f.suggestion.clone(),
            })
            .collect();

        let files = report
            .files
            .iter()
            .map(|f| JsonFile {
                path: f.path.display().to_string(),
                description: f.description.clone(),
                required: f.level == RequirementLevel::Required,
                present: f.present,
            })
            .collect();

        let exit_code = report.outcome.exit_code(self.strict);
        let output = JsonOutput {
            outcome: report.outcome.as_str(),
            success: exit_code == 0,
            exit_code,
            marker: report.marker.as_ref(),
            findings,
            files,
            scanned: report
                .scanned
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            summary: JsonSummary {
                total: report.findings.len(),
                errors: report.error_count(),
                warnings: report.warning_count(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
