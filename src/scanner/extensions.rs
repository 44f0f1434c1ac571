//! Per-folder extension whitelist scan
//!
//! Only files under configured top-level folders are considered; hidden
//! files are always skipped. A violation enumerates the folder's allowed
//! extension list.

use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

use super::{file_suffix, walker};
use crate::rules::results::{ScanReport, Severity, Violation};

/// Scan configured top-level folders for files with disallowed extensions
pub fn scan(root: &Path, folder_rules: &BTreeMap<String, Vec<String>>) -> ScanReport {
    let mut report = ScanReport::new();

    for (folder, allowed) in folder_rules {
        let folder_path = root.join(folder);
        if !folder_path.is_dir() {
            continue;
        }

        for entry in WalkDir::new(&folder_path)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .flatten()
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if walker::is_hidden(&name) {
                continue;
            }

            let suffix = file_suffix(&name);
            if !allowed.iter().any(|ext| ext == suffix) {
                report.record(Violation::new(
                    "folder-extension",
                    Severity::Error,
                    entry.path().display().to_string(),
                    format!(
                        "Extension '{}' is not allowed in '{}' (allowed: {})",
                        suffix,
                        folder,
                        allowed.join(", ")
                    ),
                ));
            }
        }
    }

    report
}
