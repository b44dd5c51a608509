//! Rule override file discovery and loading.

use crate::check::RuleSet;
use crate::config::schema::SitecheckConfig;
use crate::error::{Result, SitecheckError};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the override file looked up at the workspace root.
pub const CONFIG_FILE: &str = ".sitecheck.yml";

/// Find `.sitecheck.yml` at the workspace root.
pub fn discover_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single override file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<SitecheckConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SitecheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SitecheckError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`SitecheckConfig`].
///
/// An empty document yields the default (no overrides).
pub fn parse_config(content: &str, source_path: &Path) -> Result<SitecheckConfig> {
    if content.trim().is_empty() {
        return Ok(SitecheckConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| SitecheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve the rule set for a workspace.
///
/// An explicit path must exist. Without one, `.sitecheck.yml` is used when
/// present; otherwise the built-in rules apply unchanged.
pub fn resolve_rules(project_root: &Path, explicit: Option<&Path>) -> Result<RuleSet> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(project_root),
    };

    match path {
        Some(path) => {
            tracing::debug!("Loading rule overrides from {}", path.display());
            let config = load_config_file(&path)?;
            Ok(config.apply(RuleSet::builtin()))
        }
        None => Ok(RuleSet::builtin()),
    }
}
