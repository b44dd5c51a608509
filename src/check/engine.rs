//! The readiness check pipeline.
//!
//! Stages run in a fixed order and findings are reported in that order:
//!
//! 1. initialization marker (a missing marker ends the run)
//! 2. marker parsing (malformed marker is an error)
//! 3. vertical configuration presence (gates the placeholder scan)
//! 4. required files, then optional files
//! 5. placeholder scan of the content-bearing files
//!
//! The engine only reads from the workspace.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::finding::{Finding, FindingKind};
use super::marker::WorkspaceMarker;
use super::outcome::ValidationOutcome;
use super::placeholder::PlaceholderMatcher;
use super::rules::{FileRequirement, RequirementLevel, RuleSet};
use crate::error::{Result, SitecheckError};

const PLACEHOLDER_HINT: &str = "Update with real business information before launch";

/// Presence of one file rule, present or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    pub path: PathBuf,
    pub description: String,
    pub level: RequirementLevel,
    pub present: bool,
}

/// Everything one run of the engine determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Aggregate verdict derived from `findings`.
    pub outcome: ValidationOutcome,
    /// Findings in stage order.
    pub findings: Vec<Finding>,
    /// The parsed marker, if the workspace is initialized.
    pub marker: Option<WorkspaceMarker>,
    /// Every file rule that was checked, in check order.
    pub files: Vec<FileStatus>,
    /// Content files that were scanned for placeholders.
    pub scanned: Vec<PathBuf>,
}

impl ValidationReport {
    fn new(
        findings: Vec<Finding>,
        marker: Option<WorkspaceMarker>,
        files: Vec<FileStatus>,
        scanned: Vec<PathBuf>,
    ) -> Self {
        Self {
            outcome: ValidationOutcome::from_findings(&findings),
            findings,
            marker,
            files,
            scanned,
        }
    }

    /// Split into the outcome and its justifying findings.
    pub fn into_parts(self) -> (ValidationOutcome, Vec<Finding>) {
        (self.outcome, self.findings)
    }

    /// Number of blocking findings.
    pub fn error_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_blocking()).count()
    }

    /// Number of non-blocking findings.
    pub fn warning_count(&self) -> usize {
        self.findings.len() - self.error_count()
    }

    /// Findings of one kind, in report order.
    pub fn findings_of(&self, kind: FindingKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.kind == kind)
    }
}

/// Runs the readiness check against workspaces.
#[derive(Debug, Clone)]
pub struct ReadinessEngine {
    rules: RuleSet,
    matcher: PlaceholderMatcher,
}

impl ReadinessEngine {
    /// Create an engine for a rule set.
    ///
    /// Fails if a placeholder rule cannot be compiled.
    pub fn new(rules: RuleSet) -> Result<Self> {
        let matcher = PlaceholderMatcher::new(&rules.placeholders)?;
        Ok(Self { rules, matcher })
    }

    /// Check a workspace.
    ///
    /// Returns an error only when no determination can be made: the root is
    /// unreadable, the marker is malformed, or a file cannot be probed or read.
    pub fn validate(&self, root: &Path) -> Result<ValidationReport> {
        fs::read_dir(root).map_err(|source| SitecheckError::WorkspaceUnreadable {
            path: root.to_path_buf(),
            source,
        })?;

        let mut findings = Vec::new();

        let marker_path = root.join(&self.rules.marker_path);
        if !marker_path.try_exists()? {
            debug!("No marker at {}", marker_path.display());
            findings.push(
                Finding::new(
                    FindingKind::MissingInitialization,
                    &self.rules.marker_path,
                    "No vertical initialized yet",
                )
                .with_suggestion(self.rules.launch_hint()),
            );
            return Ok(ValidationReport::new(findings, None, Vec::new(), Vec::new()));
        }

        let marker = WorkspaceMarker::load(&marker_path)?;
        debug!(
            "Workspace initialized for vertical '{}' ({})",
            marker.vertical, marker.category
        );
        if marker.initialized_at_time().is_none() {
            warn!(
                "Marker timestamp '{}' is not an ISO-8601 date",
                marker.initialized_at
            );
        }

        let has_vertical_config = root.join(&self.rules.vertical_config).try_exists()?;
        if !has_vertical_config {
            debug!(
                "Vertical config {} missing, placeholder scan skipped",
                self.rules.vertical_config.display()
            );
            findings.push(
                Finding::new(
                    FindingKind::MissingVerticalConfig,
                    &self.rules.vertical_config,
                    "Vertical config not found",
                )
                .with_suggestion(self.rules.relaunch_hint(&marker.vertical)),
            );
        }

        let mut files = Vec::new();
        for requirement in self.rules.required().chain(self.rules.optional()) {
            let status = self.check_file(root, requirement)?;
            if !status.present {
                findings.push(missing_file_finding(requirement));
            }
            files.push(status);
        }

        let mut scanned = Vec::new();
        if has_vertical_config {
            for relative in &self.rules.scan_files {
                let path = root.join(relative);
                if !path.try_exists()? {
                    debug!("Skipping scan of missing {}", relative.display());
                    continue;
                }
                findings.extend(self.scan_file(relative, &path)?);
                scanned.push(relative.clone());
            }
        }

        let report = ValidationReport::new(findings, Some(marker), files, scanned);
        debug!(
            "Readiness check finished: {} ({} error(s), {} warning(s))",
            report.outcome,
            report.error_count(),
            report.warning_count()
        );
        Ok(report)
    }

    fn check_file(&self, root: &Path, requirement: &FileRequirement) -> Result<FileStatus> {
        let present = root.join(&requirement.path).try_exists()?;
        debug!(
            "{} {}",
            if present { "Found" } else { "Missing" },
            requirement.path.display()
        );
        Ok(FileStatus {
            path: requirement.path.clone(),
            description: requirement.description.clone(),
            level: requirement.level,
            present,
        })
    }

    fn scan_file(&self, relative: &Path, path: &Path) -> Result<Vec<Finding>> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes);
        let findings: Vec<Finding> = self
            .matcher
            .find(&text)
            .into_iter()
            .map(|rule| {
                Finding::new(
                    FindingKind::PlaceholderDetected,
                    relative,
                    format!("Contains placeholder: {}", rule.description),
                )
                .with_suggestion(PLACEHOLDER_HINT)
            })
            .collect();
        debug!(
            "Scanned {}: {} placeholder(s)",
            relative.display(),
            findings.len()
        );
        Ok(findings)
    }
}

fn missing_file_finding(requirement: &FileRequirement) -> Finding {
    match requirement.level {
        RequirementLevel::Required => Finding::new(
            FindingKind::MissingRequiredFile,
            &requirement.path,
            format!("{} is missing (required)", requirement.description),
        ),
        RequirementLevel::Optional => Finding::new(
            FindingKind::MissingOptionalFile,
            &requirement.path,
            format!("{} is missing (optional)", requirement.description),
        ),
    }
}

/// Check a workspace with the built-in rules.
///
/// ```no_run
/// use std::path::Path;
///
/// let report = sitecheck::check::validate(Path::new(".")).unwrap();
/// println!("{}", report.outcome);
/// ```
pub fn validate(root: &Path) -> Result<ValidationReport> {
    ReadinessEngine::new(RuleSet::builtin())?.validate(root)
}
