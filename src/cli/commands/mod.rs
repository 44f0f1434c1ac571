//! CLI commands module

pub mod extensions;
pub mod naming;
pub mod security;
pub mod todos;

use clap::Args;
use std::path::PathBuf;

/// Arguments for the file-list validators (security, todos)
#[derive(Args, Debug)]
pub struct FileArgs {
    /// Files to check; missing paths are skipped
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

/// Keep the paths that exist on disk, preserving argument order
pub(crate) fn existing_files(files: &[PathBuf]) -> Vec<PathBuf> {
    files.iter().filter(|p| p.exists()).cloned().collect()
}
