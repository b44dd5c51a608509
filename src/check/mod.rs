//! Workspace readiness checking.
//!
//! Determines whether an initialized site workspace is safe to build and
//! deploy.
//!
//! # Overview
//!
//! - **Rules** - file presence and placeholder rules ([`RuleSet`])
//! - **Engine** - the staged check pipeline ([`ReadinessEngine`])
//! - **Findings** - problems with a category and severity ([`Finding`])
//! - **Outcome** - the aggregate verdict ([`ValidationOutcome`])
//!
//! # Example
//!
//! ```
//! use sitecheck::check::{FindingKind, ReadinessEngine, RuleSet, ValidationOutcome};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let engine = ReadinessEngine::new(RuleSet::builtin()).unwrap();
//! let report = engine.validate(dir.path()).unwrap();
//!
//! // Nothing initialized: one blocking finding and nothing else
//! assert_eq!(report.outcome, ValidationOutcome::Fail);
//! assert_eq!(report.findings.len(), 1);
//! assert_eq!(report.findings[0].kind, FindingKind::MissingInitialization);
//! ```

pub mod engine;
pub mod finding;
pub mod marker;
pub mod outcome;
pub mod placeholder;
pub mod rules;

pub use engine::{validate, FileStatus, ReadinessEngine, ValidationReport};
pub use finding::{Finding, FindingKind, Severity};
pub use marker::WorkspaceMarker;
pub use outcome::ValidationOutcome;
pub use placeholder::PlaceholderMatcher;
pub use rules::{FileRequirement, PlaceholderRule, RequirementLevel, RuleSet};
