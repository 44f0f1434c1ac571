//! Configuration module
//!
//! [`ScanConfig`] is an immutable value struct built once per run: either
//! loaded from an external YAML document or taken from the embedded
//! defaults in full. There is no field-level merge between the two.

pub mod loader;

pub use loader::CONFIG_FILENAME;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Folder naming rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderPatterns {
    /// Pattern every folder name must match
    pub required_prefix: String,

    /// Expected top-level folder names, listed in reports
    #[serde(default)]
    pub allowed_folders: Vec<String>,
}

/// File naming rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilePatterns {
    /// Pattern every file name must match
    pub required_prefix: String,

    /// Allowed file extensions (with leading dot)
    pub allowed_extensions: Vec<String>,
}

/// How naming violations affect the exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnforcementLevel {
    /// Violations fail the gate
    Error,
    /// Violations are printed but the gate passes
    Warn,
    /// Validation is skipped entirely
    Off,
}

/// Scan configuration for the naming and extension validators.
///
/// Built once per run and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Folder naming rules
    pub folder_patterns: FolderPatterns,

    /// File naming rules
    pub file_patterns: FilePatterns,

    /// Path substrings excluded from traversal; a directory whose path
    /// contains any of these is pruned entirely
    pub exclusions: Vec<String>,

    /// Enforcement level for the naming validator
    pub enforcement_level: EnforcementLevel,

    /// Exact file names exempt from naming rules
    #[serde(default)]
    pub legacy_exemptions: Vec<String>,

    /// Exact folder names exempt from naming rules
    #[serde(default)]
    pub legacy_folder_exemptions: Vec<String>,

    /// Allowed extensions per top-level folder, for the extension validator
    #[serde(default)]
    pub folder_type_rules: BTreeMap<String, Vec<String>>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            folder_patterns: FolderPatterns {
                required_prefix: r"^\d{2}-[a-z][a-z0-9-]*$".to_string(),
                allowed_folders: [
                    "10-documentation",
                    "20-architecture",
                    "30-configuration",
                    "40-integrations",
                    "50-scripts",
                    "60-security",
                    "70-testing",
                    "80-deployment",
                    "90-utilities",
                ]
                .map(String::from)
                .to_vec(),
            },
            file_patterns: FilePatterns {
                required_prefix: r"^\d{2}-[a-z][a-z0-9-]*\.".to_string(),
                allowed_extensions: [".txt", ".ts", ".js", ".py", ".md", ".json", ".yml", ".yaml"]
                    .map(String::from)
                    .to_vec(),
            },
            exclusions: [
                ".git",
                ".claude",
                "node_modules",
                ".venv",
                "__pycache__",
                ".pytest_cache",
                ".mypy_cache",
                "dist",
                "build",
            ]
            .map(String::from)
            .to_vec(),
            enforcement_level: EnforcementLevel::Error,
            legacy_exemptions: Vec::new(),
            legacy_folder_exemptions: Vec::new(),
            folder_type_rules: default_folder_type_rules(),
        }
    }
}

fn default_folder_type_rules() -> BTreeMap<String, Vec<String>> {
    [
        ("10-documentation", vec![".txt", ".md"]),
        ("20-architecture", vec![".txt", ".md", ".json", ".yml", ".yaml"]),
        (
            "30-configuration",
            vec![".ts", ".js", ".json", ".yml", ".yaml", ".env"],
        ),
        ("40-integrations", vec![".ts", ".js", ".json", ".yml", ".yaml"]),
        ("50-scripts", vec![".py", ".js", ".ts", ".sh", ".yml", ".yaml"]),
        ("60-security", vec![".txt", ".md", ".yml", ".yaml", ".json"]),
        ("70-testing", vec![".py", ".js", ".ts", ".json", ".yml", ".yaml"]),
        (
            "80-deployment",
            vec![".yml", ".yaml", ".json", ".sh", ".dockerfile"],
        ),
        (
            "90-utilities",
            vec![".py", ".js", ".ts", ".sh", ".json", ".yml", ".yaml"],
        ),
    ]
    .into_iter()
    .map(|(folder, extensions)| {
        (
            folder.to_string(),
            extensions.into_iter().map(String::from).collect(),
        )
    })
    .collect()
}
