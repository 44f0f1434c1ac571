//! Scenario tests for the extension validator

use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

use repogate::config::ScanConfig;
use repogate::policy;
use repogate::scanner::extensions;

#[test]
fn python_file_in_configuration_folder_is_flagged() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("30-configuration")).unwrap();
    fs::write(root.join("30-configuration/x.py"), "x = 1").unwrap();

    let config = ScanConfig::default();
    let report = extensions::scan(root, &config.folder_type_rules);

    assert_eq!(report.total(), 1);
    let violation = &report.violations()[0];
    assert!(violation.file_path.ends_with("x.py"));
    // the violation enumerates exactly the folder's allowed list
    assert!(violation
        .message
        .contains("allowed: .ts, .js, .json, .yml, .yaml, .env"));
    assert_eq!(policy::extensions_exit_code(&report), 1);
}

#[test]
fn matching_extensions_pass_everywhere() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("10-documentation")).unwrap();
    fs::write(root.join("10-documentation/01-overview.txt"), "x").unwrap();
    fs::create_dir(root.join("80-deployment")).unwrap();
    fs::write(root.join("80-deployment/01-deploy.sh"), "x").unwrap();

    let config = ScanConfig::default();
    let report = extensions::scan(root, &config.folder_type_rules);

    assert!(report.is_clean());
    assert_eq!(policy::extensions_exit_code(&report), 0);
}

#[test]
fn files_outside_configured_folders_are_not_checked() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("loose.exe"), "x").unwrap();
    fs::create_dir(root.join("random-folder")).unwrap();
    fs::write(root.join("random-folder/loose.exe"), "x").unwrap();

    let config = ScanConfig::default();
    let report = extensions::scan(root, &config.folder_type_rules);
    assert!(report.is_clean());
}

#[test]
fn empty_rule_map_checks_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("10-documentation")).unwrap();
    fs::write(root.join("10-documentation/x.py"), "x").unwrap();

    let report = extensions::scan(root, &std::collections::BTreeMap::new());
    assert!(report.is_clean());
}

#[test]
fn violations_are_ordered_by_folder_then_name() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("10-documentation")).unwrap();
    fs::write(root.join("10-documentation/b.py"), "x").unwrap();
    fs::write(root.join("10-documentation/a.py"), "x").unwrap();
    fs::create_dir(root.join("20-architecture")).unwrap();
    fs::write(root.join("20-architecture/c.rs"), "x").unwrap();

    let config = ScanConfig::default();
    let report = extensions::scan(root, &config.folder_type_rules);

    let names: Vec<_> = report
        .violations()
        .iter()
        .map(|v| {
            std::path::Path::new(&v.file_path)
                .file_name()
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    assert_eq!(names, ["a.py", "b.py", "c.rs"]);
}
