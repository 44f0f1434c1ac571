//! # CLI Module
//!
//! This module defines the command-line interface for repogate using `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `naming` | Validate file and folder naming conventions |
//! | `extensions` | Validate file extensions against per-folder rules |
//! | `security` | Check files for security anti-patterns |
//! | `todos` | Check TODO comment formatting |
//!
//! ## Submodules
//!
//! - [`commands`] - Command implementations
//! - [`exit_codes`] - Standardized exit codes
//! - [`output`] - Report output formatters (Terminal, JSON)
//!
//! ## Global Options
//!
//! All commands support these global options:
//!
//! - `-v, --verbose` - Increase verbosity level (use multiple times: -v, -vv, -vvv)
//! - `-c, --config <FILE>` - Path to configuration file
//! - `-C, --directory <DIR>` - Working directory (defaults to current directory)
//! - `-f, --format <FORMAT>` - Report format (terminal, json)
//!
//! ## Examples
//!
//! ```bash
//! # Validate naming conventions in the current directory
//! repogate naming
//!
//! # Check staged files for security anti-patterns
//! repogate security src/app.ts src/db.py
//!
//! # Machine-readable TODO report
//! repogate todos --format json src/*.ts
//! ```

pub mod commands;
pub mod exit_codes;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{FileArgs, OutputFormat};

/// repogate - Enforce repository policy gates for pre-commit and CI
#[derive(Parser, Debug)]
#[command(name = "repogate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Working directory (defaults to current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Report output format
    #[arg(short, long, global = true, default_value = "terminal")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate file and folder naming conventions
    Naming,

    /// Validate file extensions against per-folder rules
    Extensions,

    /// Check files for security anti-patterns
    Security(FileArgs),

    /// Check TODO comment formatting
    Todos(FileArgs),
}
