//! Scenario tests for the naming validator

use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

use repogate::config::{EnforcementLevel, ScanConfig};
use repogate::policy;
use repogate::rules::registry::NamingRules;
use repogate::rules::results::ScanReport;
use repogate::scanner;

fn scan(root: &std::path::Path, config: &ScanConfig) -> ScanReport {
    let rules = NamingRules::from_config(config).unwrap();
    scanner::naming::scan(root, config, &rules)
}

#[test]
fn numbered_tree_passes_naming_rules() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("10-documentation")).unwrap();
    fs::write(root.join("10-documentation/01-overview.txt"), "overview").unwrap();
    fs::create_dir(root.join("50-scripts")).unwrap();
    fs::write(root.join("50-scripts/02-validation-script.py"), "pass").unwrap();

    let report = scan(root, &ScanConfig::default());
    assert!(report.is_clean());
}

#[test]
fn unnumbered_tree_fails_naming_rules() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("documentation")).unwrap();
    fs::write(root.join("documentation/overview.txt"), "overview").unwrap();

    let config = ScanConfig::default();
    let report = scan(root, &config);

    assert_eq!(report.total(), 2);
    assert_eq!(
        policy::naming_exit_code(&report, config.enforcement_level),
        1
    );
}

#[test]
fn folder_pattern_rejects_missing_numeric_prefix() {
    let config = ScanConfig::default();
    let rules = NamingRules::from_config(&config).unwrap();

    for name in ["10-documentation", "20-architecture", "99-zz", "00-a"] {
        assert!(rules.validate_folder_name(name), "{name} should pass");
    }
    assert!(!rules.validate_folder_name("documentation"));
}

#[test]
fn disallowed_extension_fails_file_rule() {
    let config = ScanConfig::default();
    let rules = NamingRules::from_config(&config).unwrap();

    assert!(rules.validate_file_name("01-overview.txt"));
    assert!(!rules.validate_file_name("01-binary.exe"));
    assert!(!rules.validate_file_name("01-noext"));
}

#[test]
fn warn_level_reports_but_passes() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("badname.rs"), "x").unwrap();

    let mut config = ScanConfig::default();
    config.enforcement_level = EnforcementLevel::Warn;

    let report = scan(root, &config);
    assert_eq!(report.total(), 1);
    assert_eq!(
        policy::naming_exit_code(&report, config.enforcement_level),
        0
    );
}

#[test]
fn scan_is_idempotent_over_unchanged_tree() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("docs")).unwrap();
    fs::write(root.join("docs/a.txt"), "x").unwrap();
    fs::write(root.join("docs/01-b.md"), "x").unwrap();
    fs::create_dir(root.join("10-documentation")).unwrap();
    fs::write(root.join("10-documentation/01-fine.txt"), "x").unwrap();

    let config = ScanConfig::default();
    let first = scan(root, &config);
    let second = scan(root, &config);

    assert_eq!(first.total(), second.total());
    assert_eq!(first.by_file(), second.by_file());
    let first_rules: Vec<_> = first.violations().iter().map(|v| &v.rule_name).collect();
    let second_rules: Vec<_> = second.violations().iter().map(|v| &v.rule_name).collect();
    assert_eq!(first_rules, second_rules);
}

#[test]
fn exclusions_prune_whole_subtrees() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("node_modules/whatever")).unwrap();
    fs::write(root.join("node_modules/whatever/badly named.js"), "x").unwrap();
    fs::create_dir(root.join("__pycache__")).unwrap();
    fs::write(root.join("__pycache__/cache.pyc"), "x").unwrap();

    let report = scan(root, &ScanConfig::default());
    assert!(report.is_clean());
}
