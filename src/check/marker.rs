//! Workspace marker parsing.
//!
//! The marker is a small JSON record written by the launch step when a
//! vertical is selected. The checker only ever reads it.

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SitecheckError};

/// Evidence that a vertical has been selected for a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceMarker {
    /// Display name of the vertical.
    pub name: String,
    /// Vertical identifier, e.g. `hvac`.
    pub vertical: String,
    /// Business category, e.g. `home-services`.
    pub category: String,
    /// When the launch step ran; ISO-8601 by convention.
    pub initialized_at: String,
}

impl WorkspaceMarker {
    /// Read and parse a marker file.
    ///
    /// A file that exists but is not a complete marker record is a
    /// [`SitecheckError::MarkerParseError`], never an "uninitialized" workspace.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::parse(&bytes).map_err(|message| SitecheckError::MarkerParseError {
            path: path.to_path_buf(),
            message,
        })
    }

    fn parse(bytes: &[u8]) -> std::result::Result<Self, String> {
        let marker: WorkspaceMarker = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
        if marker.vertical.trim().is_empty() {
            return Err("field `vertical` must not be empty".to_string());
        }
        Ok(marker)
    }

    /// Parse `initialized_at` as an RFC 3339 timestamp or a plain date.
    ///
    /// ```
    /// use sitecheck::check::WorkspaceMarker;
    ///
    /// let marker = WorkspaceMarker {
    ///     name: "Acme".into(),
    ///     vertical: "hvac".into(),
    ///     category: "home-services".into(),
    ///     initialized_at: "2024-01-01".into(),
    /// };
    /// assert!(marker.initialized_at_time().is_some());
    /// ```
    pub fn initialized_at_time(&self) -> Option<DateTime<Utc>> {
        let raw = self.initialized_at.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }
}
