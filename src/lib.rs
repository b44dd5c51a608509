//! Sitecheck - Pre-launch readiness checks for templated site workspaces.
//!
//! A workspace generated from a site template is initialized once for a
//! business vertical. Sitecheck decides whether it is safe to build and
//! deploy: is a vertical selected, are the mandatory files present, and does
//! the configuration still carry template placeholder values.
//!
//! # Modules
//!
//! - [`check`] - The readiness engine, rules, findings and outcome
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Rule override file loading
//! - [`error`] - Error types and result aliases
//! - [`report`] - Human and JSON report formatters
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use sitecheck::check::{PlaceholderMatcher, RuleSet};
//!
//! let matcher = PlaceholderMatcher::new(&RuleSet::builtin().placeholders).unwrap();
//! let hits = matcher.find(r#"phone: "(555) 010-2030", city: "Springfield""#);
//! assert_eq!(hits.len(), 2);
//! ```
//!
//! For workspace-level checks, see the integration tests.

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod ui;

pub use error::{Result, SitecheckError};
