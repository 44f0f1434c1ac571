//! Naming convention scan
//!
//! Validates every folder and file name below the root against the
//! configured patterns. Hidden files are always skipped; exact legacy
//! exemptions bypass the rules for backward compatibility.

use std::path::Path;

use super::walker;
use crate::config::ScanConfig;
use crate::rules::registry::NamingRules;
use crate::rules::results::{ScanReport, Severity, Violation};

/// Scan a directory tree for naming convention violations
pub fn scan(root: &Path, config: &ScanConfig, rules: &NamingRules) -> ScanReport {
    let mut report = ScanReport::new();

    for entry in walker::walk(root, &config.exclusions) {
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path().display().to_string();

        if entry.file_type().is_dir() {
            if config.legacy_folder_exemptions.iter().any(|f| f == &name) {
                continue;
            }
            if !rules.validate_folder_name(&name) {
                report.record(Violation::new(
                    "folder-naming",
                    Severity::Error,
                    path,
                    format!(
                        "Folder '{}' doesn't match pattern: {}",
                        name, config.folder_patterns.required_prefix
                    ),
                ));
            }
        } else {
            if walker::is_hidden(&name) {
                continue;
            }
            if config.legacy_exemptions.iter().any(|f| f == &name) {
                continue;
            }
            if !rules.validate_file_name(&name) {
                report.record(Violation::new(
                    "file-naming",
                    Severity::Error,
                    path,
                    format!("File '{name}' doesn't match naming convention"),
                ));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scan_tree(root: &Path, config: &ScanConfig) -> ScanReport {
        let rules = NamingRules::from_config(config).unwrap();
        scan(root, config, &rules)
    }

    #[test]
    fn test_compliant_tree_is_clean() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("10-documentation")).unwrap();
        fs::write(root.join("10-documentation/01-overview.txt"), "x").unwrap();

        let report = scan_tree(root, &ScanConfig::default());
        assert!(report.is_clean());
    }

    #[test]
    fn test_bad_folder_and_file_are_flagged() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("documentation")).unwrap();
        fs::write(root.join("documentation/overview.txt"), "x").unwrap();

        let report = scan_tree(root, &ScanConfig::default());
        assert_eq!(report.total(), 2);

        let rules: Vec<_> = report.violations().iter().map(|v| &v.rule_name).collect();
        assert!(rules.contains(&&"folder-naming".to_string()));
        assert!(rules.contains(&&"file-naming".to_string()));
    }

    #[test]
    fn test_hidden_files_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join(".gitignore"), "x").unwrap();

        let report = scan_tree(root, &ScanConfig::default());
        assert!(report.is_clean());
    }

    #[test]
    fn test_legacy_exemptions_bypass_rules() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("legacy-stuff")).unwrap();
        fs::write(root.join("legacy-stuff/README.md"), "x").unwrap();

        let mut config = ScanConfig::default();
        config.legacy_folder_exemptions = vec!["legacy-stuff".to_string()];
        config.legacy_exemptions = vec!["README.md".to_string()];

        let report = scan_tree(root, &config);
        assert!(report.is_clean());
    }

    #[test]
    fn test_exemption_is_exact_not_substring() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("README.md.bak"), "x").unwrap();

        let mut config = ScanConfig::default();
        config.legacy_exemptions = vec!["README.md".to_string()];

        let report = scan_tree(root, &config);
        assert_eq!(report.total(), 1);
    }

    #[test]
    fn test_excluded_directories_are_pruned() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("node_modules/some-pkg")).unwrap();
        fs::write(root.join("node_modules/some-pkg/index.js"), "x").unwrap();

        let report = scan_tree(root, &ScanConfig::default());
        assert!(report.is_clean());
    }

    #[test]
    fn test_nested_folders_are_validated() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("10-documentation/drafts")).unwrap();

        let report = scan_tree(root, &ScanConfig::default());
        assert_eq!(report.total(), 1);
        assert_eq!(report.violations()[0].rule_name, "folder-naming");
    }

    #[test]
    fn test_repeated_scans_are_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("docs")).unwrap();
        fs::write(root.join("docs/readme.txt"), "x").unwrap();

        let config = ScanConfig::default();
        let first = scan_tree(root, &config);
        let second = scan_tree(root, &config);

        assert_eq!(first.total(), second.total());
        assert_eq!(
            first.count_by_severity(Severity::Error),
            second.count_by_severity(Severity::Error)
        );
        let first_paths: Vec<_> = first.violations().iter().map(|v| &v.file_path).collect();
        let second_paths: Vec<_> = second.violations().iter().map(|v| &v.file_path).collect();
        assert_eq!(first_paths, second_paths);
    }
}
