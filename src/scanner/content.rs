//! Whole-content rule scan
//!
//! Content rules are searched against the entire file content, not
//! line-by-line, so patterns may span delimiters. For every non-overlapping
//! match the line number is derived from the match start offset by counting
//! preceding newlines; the originating line's raw text feeds the
//! suppression filter. Files fan out across a rayon pool with per-file
//! violation buffers merged in input order, so final counts never depend on
//! scheduling.

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::file_extension;
use crate::error::ScanError;
use crate::rules::allowlist::Allowlist;
use crate::rules::registry::RuleRegistry;
use crate::rules::results::{ScanReport, Violation};

/// Scanner applying a content-rule registry to files, with suppression
pub struct ContentScanner<'a> {
    registry: &'a RuleRegistry,
    allowlist: &'a Allowlist,
}

impl<'a> ContentScanner<'a> {
    pub fn new(registry: &'a RuleRegistry, allowlist: &'a Allowlist) -> Self {
        Self {
            registry,
            allowlist,
        }
    }

    /// Scan a single file, returning its violations in rule order.
    ///
    /// A file that cannot be decoded as text is a read error, not a
    /// violation.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<Violation>, ScanError> {
        let path_str = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| ScanError::FileRead {
            path: path_str.clone(),
            source,
        })?;

        let lines: Vec<&str> = content.split('\n').collect();
        let file_name = path.file_name().unwrap_or_default().to_string_lossy();
        let extension = file_extension(&file_name);

        let mut violations = Vec::new();
        for rule in self.registry.rules_for(extension) {
            for hit in rule.regex.find_iter(&content) {
                if let Some(exception) = &rule.exception {
                    if exception.is_match(hit.as_str()) {
                        continue;
                    }
                }

                // match-start offset, so multi-line spans report their first line
                let line_number = content[..hit.start()].matches('\n').count() + 1;
                let line_text = lines.get(line_number - 1).copied().unwrap_or("");

                if self.allowlist.is_suppressed(line_text, &path_str) {
                    continue;
                }

                violations.push(
                    Violation::new(rule.name, rule.severity, path_str.clone(), rule.description)
                        .with_line(line_number),
                );
            }
        }

        Ok(violations)
    }

    /// Scan a list of files in parallel and merge the per-file buffers in
    /// input order. Unreadable files are logged and skipped.
    pub fn scan_files(&self, paths: &[PathBuf]) -> ScanReport {
        let buffers: Vec<Option<Vec<Violation>>> = paths
            .par_iter()
            .map(|path| match self.scan_file(path) {
                Ok(violations) => Some(violations),
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable file");
                    None
                }
            })
            .collect();

        let mut report = ScanReport::new();
        for buffer in buffers.into_iter().flatten() {
            report.record_all(buffer);
        }
        report
    }
}
