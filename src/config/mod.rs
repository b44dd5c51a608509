//! Rule configuration.
//!
//! The readiness rules ship built in (see [`crate::check::RuleSet::builtin`]).
//! A workspace may carry a `.sitecheck.yml` file that extends or replaces
//! them:
//!
//! ```yaml
//! launch_command: pnpm run launch
//! required_files:
//!   - path: public/robots.txt
//!     description: Robots file
//! placeholders:
//!   - pattern: Lorem ipsum
//!     case_insensitive: true
//! ```
//!
//! # Example
//!
//! ```
//! use sitecheck::config::resolve_rules;
//! use std::fs;
//!
//! let temp = tempfile::tempdir().unwrap();
//! fs::write(temp.path().join(".sitecheck.yml"), "launch_command: make launch").unwrap();
//!
//! let rules = resolve_rules(temp.path(), None).unwrap();
//! assert_eq!(rules.launch_command, "make launch");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{discover_config, load_config_file, parse_config, resolve_rules, CONFIG_FILE};
pub use schema::{FileEntry, PlaceholderEntry, SitecheckConfig};
