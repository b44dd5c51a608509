//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Every flag is optional:
//! running `sitecheck` with no arguments checks the current directory with
//! the default rules.

use clap::Parser;
use std::path::PathBuf;

use crate::report::OutputFormat;
use crate::ui::OutputMode;

/// Sitecheck - Pre-launch readiness checks for site workspaces.
#[derive(Debug, Parser)]
#[command(name = "sitecheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to workspace root (overrides current directory)
    #[arg(short, long, env = "SITECHECK_PROJECT")]
    pub project: Option<PathBuf>,

    /// Reduce output (-q: findings only, -qq: errors only)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    #[command(flatten)]
    pub validate: ValidateArgs,
}

impl Cli {
    /// Output mode selected by `--quiet`.
    pub fn output_mode(&self) -> OutputMode {
        match self.quiet {
            0 => OutputMode::Normal,
            1 => OutputMode::Quiet,
            _ => OutputMode::Silent,
        }
    }
}

/// Arguments for the readiness check.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ValidateArgs {
    /// Path to rule override file (overrides .sitecheck.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}
