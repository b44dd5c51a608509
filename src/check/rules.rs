//! Rule definitions for the readiness check.
//!
//! Rules are plain data. The engine owns a [`RuleSet`]; nothing is read from
//! module-level state at check time, so tests can inject their own rules.

use std::path::PathBuf;

/// Default location of the vertical marker.
pub const MARKER_PATH: &str = ".vertical";

/// Default location of the vertical configuration.
pub const VERTICAL_CONFIG_PATH: &str = "src/config/vertical.ts";

/// Default location of the site configuration.
pub const SITE_CONFIG_PATH: &str = "src/config/site.ts";

/// Command that (re)initializes a workspace for a vertical.
pub const LAUNCH_COMMAND: &str = "npm run launch";

/// Built-in required files: (path, description).
pub const BUILTIN_REQUIRED_FILES: &[(&str, &str)] = &[
    (SITE_CONFIG_PATH, "Site configuration"),
    ("public/favicon.svg", "Favicon"),
];

/// Built-in optional files: (path, description).
pub const BUILTIN_OPTIONAL_FILES: &[(&str, &str)] = &[
    ("public/images/logo.png", "Logo image"),
    ("public/og-image.png", "Social share image (1200x630)"),
];

/// Files scanned for placeholder content, in scan order.
pub const BUILTIN_SCAN_FILES: &[&str] = &[SITE_CONFIG_PATH, VERTICAL_CONFIG_PATH];

/// Built-in placeholder patterns: (pattern, description, case_insensitive).
pub const BUILTIN_PLACEHOLDERS: &[(&str, &str, bool)] = &[
    ("example.com", "example.com domain", true),
    ("(555)", "(555) phone number", false),
    ("123 Main", "123 Main Street address", true),
    ("ABC Heating", "ABC Heating placeholder name", true),
    ("ABC Plumbing", "ABC Plumbing placeholder name", true),
    ("Springfield", "Springfield placeholder city", false),
];

/// Whether a missing file blocks the launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementLevel {
    Required,
    Optional,
}

/// A file that should exist in the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRequirement {
    /// Path relative to the workspace root.
    pub path: PathBuf,
    /// Human-readable description.
    pub description: String,
    pub level: RequirementLevel,
}

impl FileRequirement {
    /// A file whose absence fails the check.
    pub fn required(path: impl Into<PathBuf>, description: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
            level: RequirementLevel::Required,
        }
    }

    /// A file whose absence only warns.
    pub fn optional(path: impl Into<PathBuf>, description: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
            level: RequirementLevel::Optional,
        }
    }

    pub fn is_required(&self) -> bool {
        self.level == RequirementLevel::Required
    }
}

/// Template sample content that must be replaced before launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderRule {
    /// Literal text to look for.
    pub pattern: String,
    /// What the placeholder stands for.
    pub description: String,
    /// Match regardless of letter case.
    pub case_insensitive: bool,
}

impl PlaceholderRule {
    /// Create a new placeholder rule.
    pub fn new(
        pattern: impl Into<String>,
        description: impl Into<String>,
        case_insensitive: bool,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            description: description.into(),
            case_insensitive,
        }
    }
}

/// The complete configuration of one readiness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    /// Marker path, relative to the workspace root.
    pub marker_path: PathBuf,
    /// Vertical configuration path; gates the placeholder scan.
    pub vertical_config: PathBuf,
    /// Command suggested for (re)initialization.
    pub launch_command: String,
    /// File presence rules in declared order.
    pub files: Vec<FileRequirement>,
    /// Content-bearing files, scanned in order when present.
    pub scan_files: Vec<PathBuf>,
    /// Placeholder rules in declared order.
    pub placeholders: Vec<PlaceholderRule>,
}

impl RuleSet {
    /// The rules shipped with sitecheck.
    ///
    /// ```
    /// use sitecheck::check::RuleSet;
    ///
    /// let rules = RuleSet::builtin();
    /// assert_eq!(rules.required().count(), 2);
    /// assert_eq!(rules.optional().count(), 2);
    /// assert_eq!(rules.placeholders.len(), 6);
    /// ```
    pub fn builtin() -> Self {
        let files = BUILTIN_REQUIRED_FILES
            .iter()
            .map(|(path, description)| FileRequirement::required(*path, *description))
            .chain(
                BUILTIN_OPTIONAL_FILES
                    .iter()
                    .map(|(path, description)| FileRequirement::optional(*path, *description)),
            )
            .collect();

        let placeholders = BUILTIN_PLACEHOLDERS
            .iter()
            .map(|(pattern, description, ci)| PlaceholderRule::new(*pattern, *description, *ci))
            .collect();

        Self {
            marker_path: PathBuf::from(MARKER_PATH),
            vertical_config: PathBuf::from(VERTICAL_CONFIG_PATH),
            launch_command: LAUNCH_COMMAND.to_string(),
            files,
            scan_files: BUILTIN_SCAN_FILES.iter().map(PathBuf::from).collect(),
            placeholders,
        }
    }

    /// A rule set with the built-in paths but no file or placeholder rules.
    pub fn empty() -> Self {
        Self {
            files: Vec::new(),
            scan_files: Vec::new(),
            placeholders: Vec::new(),
            ..Self::builtin()
        }
    }

    /// Required files in declared order.
    pub fn required(&self) -> impl Iterator<Item = &FileRequirement> {
        self.files.iter().filter(|f| f.is_required())
    }

    /// Optional files in declared order.
    pub fn optional(&self) -> impl Iterator<Item = &FileRequirement> {
        self.files.iter().filter(|f| !f.is_required())
    }

    /// Suggested command for an uninitialized workspace.
    pub fn launch_hint(&self) -> String {
        format!("Run: {} <vertical>", self.launch_command)
    }

    /// Suggested command when the vertical config was lost.
    pub fn relaunch_hint(&self, vertical: &str) -> String {
        format!("Run: {} {} --force", self.launch_command, vertical)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}
