//! Error types for repogate
//!
//! This module defines custom error types using `thiserror` for better error handling
//! and more descriptive error messages throughout the application.

use thiserror::Error;

/// Main error type for repogate
#[derive(Error, Debug)]
pub enum RepoGateError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Scan-related errors
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// Rule construction errors
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Report serialization errors
    #[error("Report serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read configuration '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to parse the configuration document
    #[error("Failed to parse configuration '{path}': {source}")]
    Parse {
        /// Path to the malformed document
        path: String,
        /// The underlying YAML error
        source: serde_yaml::Error,
    },
}

/// Errors that occur during scanning
#[derive(Error, Debug)]
pub enum ScanError {
    /// Failed to read a file. Non-fatal: the scanner logs a warning and
    /// skips the file.
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

/// Errors that occur while building rules
#[derive(Error, Debug)]
pub enum RuleError {
    /// A rule pattern failed to compile. Fatal at startup: a broken rule
    /// set must not silently under-scan.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern string that failed to compile
        pattern: String,
        /// The underlying regex error
        source: regex::Error,
    },
}
