//! Rule override file schema.
//!
//! Maps the optional `.sitecheck.yml` file onto additions to (or a
//! replacement of) the built-in [`RuleSet`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::check::{FileRequirement, PlaceholderRule, RuleSet};

/// Root structure of `.sitecheck.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SitecheckConfig {
    /// Marker path override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<PathBuf>,

    /// Vertical configuration path override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_config: Option<PathBuf>,

    /// Command suggested in remediation hints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_command: Option<String>,

    /// Additional required files
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required_files: Vec<FileEntry>,

    /// Additional optional files
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub optional_files: Vec<FileEntry>,

    /// Additional files to scan for placeholders
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scan_files: Vec<PathBuf>,

    /// Additional placeholder patterns
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub placeholders: Vec<PlaceholderEntry>,

    /// Drop the built-in file, scan and placeholder lists instead of
    /// extending them.
    #[serde(skip_serializing_if = "is_false")]
    pub replace_builtins: bool,
}

/// A file rule entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileEntry {
    pub path: PathBuf,
    /// Defaults to the path itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A placeholder rule entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaceholderEntry {
    /// Literal text to look for.
    pub pattern: String,
    /// Defaults to the pattern itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub case_insensitive: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl FileEntry {
    fn description(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl SitecheckConfig {
    /// Apply these overrides on top of `base`.
    ///
    /// ```
    /// use sitecheck::check::RuleSet;
    /// use sitecheck::config::SitecheckConfig;
    ///
    /// let config: SitecheckConfig = serde_yaml::from_str("launch_command: make launch").unwrap();
    /// let rules = config.apply(RuleSet::builtin());
    /// assert_eq!(rules.launch_command, "make launch");
    /// assert_eq!(rules.files.len(), 4);
    /// ```
    pub fn apply(&self, base: RuleSet) -> RuleSet {
        let mut rules = if self.replace_builtins {
            RuleSet {
                files: Vec::new(),
                scan_files: Vec::new(),
                placeholders: Vec::new(),
                ..base
            }
        } else {
            base
        };

        if let Some(marker) = &self.marker {
            rules.marker_path = marker.clone();
        }
        if let Some(vertical_config) = &self.vertical_config {
            rules.vertical_config = vertical_config.clone();
        }
        if let Some(launch_command) = &self.launch_command {
            rules.launch_command = launch_command.clone();
        }

        rules.files.extend(
            self.required_files
                .iter()
                .map(|f| FileRequirement::required(f.path.clone(), f.description())),
        );
        rules.files.extend(
            self.optional_files
                .iter()
                .map(|f| FileRequirement::optional(f.path.clone(), f.description())),
        );
        rules.scan_files.extend(self.scan_files.iter().cloned());
        rules.placeholders.extend(self.placeholders.iter().map(|p| {
            PlaceholderRule::new(
                p.pattern.clone(),
                p.description.clone().unwrap_or_else(|| p.pattern.clone()),
                p.case_insensitive,
            )
        }));

        rules
    }
}
