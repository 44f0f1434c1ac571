//! TODO format scan
//!
//! Lines are evaluated only when they contain the case-insensitive
//! substring "todo". Every applicable rule is tried on such a line:
//! invalid-polarity matches are recorded as violations, valid-polarity
//! matches mark the line as accepted for the fallback check, and the two
//! outcomes are independent. Only when no valid rule matched and the
//! secondary well-formed shape also fails does the generic catch-all fire.

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::file_extension;
use crate::error::ScanError;
use crate::rules::patterns::todo::{CATCH_ALL_MESSAGE, CATCH_ALL_RULE, WELL_FORMED_TODO};
use crate::rules::registry::{Polarity, RuleRegistry};
use crate::rules::results::{ScanReport, Severity, TodoStats, Violation};

/// Scan a single file for TODO format issues
pub fn scan_file(path: &Path, registry: &RuleRegistry) -> Result<Vec<Violation>, ScanError> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| ScanError::FileRead {
        path: path_str.clone(),
        source,
    })?;

    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let extension = file_extension(&file_name);

    let mut violations = Vec::new();
    for (index, line) in content.split('\n').enumerate() {
        let line_number = index + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || !trimmed.to_lowercase().contains("todo") {
            continue;
        }

        let mut found_valid = false;
        for rule in registry.rules_for(extension) {
            if rule.regex.is_match(line) {
                match rule.polarity {
                    Polarity::Valid => found_valid = true,
                    Polarity::Invalid => violations.push(
                        Violation::new(
                            rule.name,
                            Severity::Warning,
                            path_str.clone(),
                            rule.description,
                        )
                        .with_line(line_number),
                    ),
                }
            }
        }

        if !found_valid && !WELL_FORMED_TODO.is_match(line) {
            violations.push(
                Violation::new(
                    CATCH_ALL_RULE,
                    Severity::Warning,
                    path_str.clone(),
                    CATCH_ALL_MESSAGE,
                )
                .with_line(line_number),
            );
        }
    }

    Ok(violations)
}

/// Scan files in parallel; returns the aggregate report plus derived
/// statistics. Unreadable files are logged and skipped.
pub fn scan_files(paths: &[PathBuf], registry: &RuleRegistry) -> (ScanReport, TodoStats) {
    let outcomes: Vec<Option<(Vec<Violation>, usize)>> = paths
        .par_iter()
        .map(|path| {
            let violations = match scan_file(path, registry) {
                Ok(violations) => violations,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable file");
                    return None;
                }
            };
            let markers = fs::read_to_string(path)
                .map(|content| content.to_lowercase().matches("todo").count())
                .unwrap_or(0);
            Some((violations, markers))
        })
        .collect();

    let mut report = ScanReport::new();
    let mut stats = TodoStats {
        files_checked: paths.len(),
        ..Default::default()
    };

    for (path, outcome) in paths.iter().zip(outcomes) {
        let Some((violations, markers)) = outcome else {
            continue;
        };

        if markers > 0 {
            stats.files_with_todos += 1;
            stats.total_todos += markers;
            if markers > stats.most_todos_count {
                stats.most_todos_count = markers;
                stats.most_todos_file = Some(path.display().to_string());
            }
        }

        stats.format_issues += violations.len();
        report.record_all(violations);
    }

    (report, stats)
}
