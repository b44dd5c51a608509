//! Command-line interface for sitecheck.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`command`] - Command trait and result type
//! - [`validate`] - The readiness check command

pub mod args;
pub mod command;
pub mod validate;

pub use args::{Cli, ValidateArgs};
pub use command::{Command, CommandResult};
pub use validate::ValidateCommand;
