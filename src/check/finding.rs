//! Validation findings.
//!
//! A [`Finding`] records one problem discovered in a workspace. Findings are
//! produced in pipeline order by the engine and never mutated afterwards.

use std::path::{Path, PathBuf};

/// Severity level for findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Non-blocking; the site can still be built.
    Warning,
    /// Blocking; forces the outcome to `Fail`.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Category of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindingKind {
    /// No vertical marker in the workspace.
    MissingInitialization,
    /// Marker present but the vertical configuration file is gone.
    MissingVerticalConfig,
    /// A required file is absent.
    MissingRequiredFile,
    /// An optional file is absent.
    MissingOptionalFile,
    /// A scanned file still contains template sample content.
    PlaceholderDetected,
}

impl FindingKind {
    /// Stable identifier used in reports.
    pub fn id(&self) -> &'static str {
        match self {
            FindingKind::MissingInitialization => "missing-initialization",
            FindingKind::MissingVerticalConfig => "missing-vertical-config",
            FindingKind::MissingRequiredFile => "missing-required-file",
            FindingKind::MissingOptionalFile => "missing-optional-file",
            FindingKind::PlaceholderDetected => "placeholder-detected",
        }
    }

    /// Whether findings of this kind force a `Fail` outcome.
    pub fn is_blocking(&self) -> bool {
        matches!(
            self,
            FindingKind::MissingInitialization
                | FindingKind::MissingVerticalConfig
                | FindingKind::MissingRequiredFile
        )
    }

    pub fn severity(&self) -> Severity {
        if self.is_blocking() {
            Severity::Error
        } else {
            Severity::Warning
        }
    }
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// A problem found in the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// What kind of problem this is.
    pub kind: FindingKind,
    /// Workspace-relative path of the file involved.
    pub path: PathBuf,
    /// Human-readable description.
    pub message: String,
    /// Optional remediation hint.
    pub suggestion: Option<String>,
}

impl Finding {
    /// Create a new finding.
    pub fn new(kind: FindingKind, path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.as_ref().to_path_buf(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a remediation suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn is_blocking(&self) -> bool {
        self.kind.is_blocking()
    }
}
