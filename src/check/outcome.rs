//! Aggregate validation outcome.

use super::finding::Finding;

/// Overall verdict for a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// No findings.
    Pass,
    /// Only non-blocking findings.
    PassWithWarnings,
    /// At least one blocking finding.
    Fail,
}

impl ValidationOutcome {
    /// Derive the outcome from a set of findings.
    ///
    /// ```
    /// use sitecheck::check::{Finding, FindingKind, ValidationOutcome};
    ///
    /// assert_eq!(ValidationOutcome::from_findings(&[]), ValidationOutcome::Pass);
    ///
    /// let warning = Finding::new(FindingKind::MissingOptionalFile, "public/og-image.png", "missing");
    /// assert_eq!(
    ///     ValidationOutcome::from_findings(&[warning]),
    ///     ValidationOutcome::PassWithWarnings
    /// );
    /// ```
    pub fn from_findings(findings: &[Finding]) -> Self {
        if findings.iter().any(Finding::is_blocking) {
            ValidationOutcome::Fail
        } else if !findings.is_empty() {
            ValidationOutcome::PassWithWarnings
        } else {
            ValidationOutcome::Pass
        }
    }

    /// Process exit status for this outcome.
    ///
    /// With `strict`, warnings fail the run too.
    pub fn exit_code(&self, strict: bool) -> i32 {
        match self {
            ValidationOutcome::Pass => 0,
            ValidationOutcome::PassWithWarnings if strict => 1,
            ValidationOutcome::PassWithWarnings => 0,
            ValidationOutcome::Fail => 1,
        }
    }

    /// Machine-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationOutcome::Pass => "pass",
            ValidationOutcome::PassWithWarnings => "pass_with_warnings",
            ValidationOutcome::Fail => "fail",
        }
    }
}

impl std::fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationOutcome::Pass => write!(f, "PASSED"),
            ValidationOutcome::PassWithWarnings => write!(f, "PASSED with warnings"),
            ValidationOutcome::Fail => write!(f, "FAILED"),
        }
    }
}
