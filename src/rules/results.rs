//! # Scan Result Structures
//!
//! This module defines the data structures for representing rule matches
//! and aggregated scan results.
//!
//! ## Overview
//!
//! - [`Severity`] - Violation severity levels (Error, Warning, Info)
//! - [`Violation`] - Individual rule match with location
//! - [`ScanReport`] - Aggregate of violations from a scan run
//! - [`TodoStats`] - Derived statistics for the TODO validator
//!
//! ## Examples
//!
//! ```rust
//! use repogate::rules::results::{ScanReport, Severity, Violation};
//!
//! let mut report = ScanReport::new();
//! report.record(
//!     Violation::new("hardcoded-password", Severity::Error, "src/config.ts", "Hardcoded password detected")
//!         .with_line(42),
//! );
//!
//! assert_eq!(report.count_by_severity(Severity::Error), 1);
//! assert!(!report.is_clean());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Severity levels for violations.
///
/// The ordering is total and fixed for policy purposes:
/// `Error > Warning > Info`.
///
/// - **Error** - Must be resolved; blocks the gate on its own
/// - **Warning** - Tolerated up to a per-validator budget
/// - **Info** - Informational, never blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational findings (e.g. non-cryptographic randomness).
    Info,
    /// Findings that should be addressed but are tolerated in small numbers.
    Warning,
    /// Findings that must be resolved before the gate passes.
    Error,
}

impl Severity {
    #[allow(dead_code)]
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "error" | "critical" => Some(Self::Error),
            "warning" | "warn" => Some(Self::Warning),
            "info" | "information" | "note" => Some(Self::Info),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A single recorded rule match that survived suppression.
///
/// Violations are immutable once created and purely additive to the
/// aggregate: duplicates are never merged.
///
/// # Examples
///
/// ```rust
/// use repogate::rules::results::{Severity, Violation};
///
/// let violation = Violation::new(
///     "eval-usage",
///     Severity::Error,
///     "src/app.js",
///     "eval() usage detected - major security risk",
/// )
/// .with_line(17);
///
/// assert_eq!(violation.line, Some(17));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Name of the rule that matched (e.g. "hardcoded-api-key").
    pub rule_name: String,

    /// Severity of the violation.
    pub severity: Severity,

    /// Path of the offending file or folder.
    pub file_path: String,

    /// 1-indexed line number for content matches; `None` for name matches.
    pub line: Option<usize>,

    /// Human-readable message describing the violation.
    pub message: String,
}

impl Violation {
    /// Create a new violation without a line number
    pub fn new(
        rule_name: impl Into<String>,
        severity: Severity,
        file_path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_name: rule_name.into(),
            severity,
            file_path: file_path.into(),
            line: None,
            message: message.into(),
        }
    }

    /// Set the 1-indexed line number
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

/// Aggregate of all violations from a scan run.
///
/// Accumulation is purely additive and commutative: severity counts do not
/// depend on file visitation order, while the violation list preserves
/// discovery order for reporting readability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    violations: Vec<Violation>,
    by_file: BTreeMap<String, usize>,
}

impl ScanReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation
    pub fn record(&mut self, violation: Violation) {
        *self.by_file.entry(violation.file_path.clone()).or_insert(0) += 1;
        self.violations.push(violation);
    }

    /// Record multiple violations
    pub fn record_all(&mut self, violations: impl IntoIterator<Item = Violation>) {
        for violation in violations {
            self.record(violation);
        }
    }

    /// Merge another report into this one, preserving the other's order
    #[allow(dead_code)]
    pub fn merge(&mut self, other: ScanReport) {
        self.record_all(other.violations);
    }

    /// Get all violations in discovery order
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Get violations of a given severity
    #[allow(dead_code)]
    pub fn violations_by_severity(&self, severity: Severity) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(move |v| v.severity == severity)
    }

    /// Count violations of a given severity
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }

    /// Total number of violations
    pub fn total(&self) -> usize {
        self.violations.len()
    }

    /// Check if the report has no violations
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Check if there are any error-severity violations
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Number of distinct files with at least one violation
    #[allow(dead_code)]
    pub fn files_affected(&self) -> usize {
        self.by_file.len()
    }

    /// Per-file violation tallies
    #[allow(dead_code)]
    pub fn by_file(&self) -> &BTreeMap<String, usize> {
        &self.by_file
    }

    /// File with the highest violation count. Ties resolve to the
    /// lexicographically smallest path so repeated scans agree.
    #[allow(dead_code)]
    pub fn most_affected_file(&self) -> Option<(&str, usize)> {
        self.by_file
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
            .map(|(path, count)| (path.as_str(), *count))
    }
}

/// Derived statistics for the TODO validator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoStats {
    /// Number of files examined
    pub files_checked: usize,
    /// Number of files containing at least one TODO marker
    pub files_with_todos: usize,
    /// Total case-insensitive occurrences of "todo" across all files
    pub total_todos: usize,
    /// Number of format issues recorded
    pub format_issues: usize,
    /// File with the most TODO markers, if any
    pub most_todos_file: Option<String>,
    /// Marker count for [`Self::most_todos_file`]
    pub most_todos_count: usize,
}

impl TodoStats {
    /// TODOs not flagged by any rule. Can go negative when a single line
    /// collects several format issues.
    pub fn valid_todos(&self) -> i64 {
        self.total_todos as i64 - self.format_issues as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
        assert!(Severity::Error > Severity::Info);
    }

    #[test]
    fn test_severity_from_string() {
        assert_eq!(Severity::from_string("error"), Some(Severity::Error));
        assert_eq!(Severity::from_string("critical"), Some(Severity::Error));
        assert_eq!(Severity::from_string("WARNING"), Some(Severity::Warning));
        assert_eq!(Severity::from_string("warn"), Some(Severity::Warning));
        assert_eq!(Severity::from_string("info"), Some(Severity::Info));
        assert_eq!(Severity::from_string("unknown"), None);
        assert_eq!(Severity::from_string(""), None);
    }

    #[test]
    fn test_violation_builder() {
        let violation = Violation::new(
            "hardcoded-secret",
            Severity::Error,
            "src/config.ts",
            "Hardcoded secret detected",
        )
        .with_line(42);

        assert_eq!(violation.rule_name, "hardcoded-secret");
        assert_eq!(violation.line, Some(42));
        assert_eq!(violation.file_path, "src/config.ts");
    }

    #[test]
    fn test_report_counts() {
        let mut report = ScanReport::new();
        report.record(Violation::new("a", Severity::Error, "x.ts", "m"));
        report.record(Violation::new("b", Severity::Warning, "x.ts", "m"));
        report.record(Violation::new("c", Severity::Warning, "y.ts", "m"));
        report.record(Violation::new("d", Severity::Info, "y.ts", "m"));

        assert_eq!(report.total(), 4);
        assert_eq!(report.count_by_severity(Severity::Error), 1);
        assert_eq!(report.count_by_severity(Severity::Warning), 2);
        assert_eq!(report.count_by_severity(Severity::Info), 1);
        assert!(report.has_errors());
        assert!(!report.is_clean());
        assert_eq!(report.files_affected(), 2);
    }

    #[test]
    fn test_report_preserves_discovery_order() {
        let mut report = ScanReport::new();
        report.record(Violation::new("first", Severity::Info, "a", "m"));
        report.record(Violation::new("second", Severity::Error, "b", "m"));

        let names: Vec<_> = report.violations().iter().map(|v| &v.rule_name).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn test_merge_is_commutative_for_counts() {
        let mut left = ScanReport::new();
        left.record(Violation::new("a", Severity::Error, "x", "m"));

        let mut right = ScanReport::new();
        right.record(Violation::new("b", Severity::Warning, "y", "m"));
        right.record(Violation::new("c", Severity::Warning, "y", "m"));

        let mut forward = left.clone();
        forward.merge(right.clone());
        let mut backward = right;
        backward.merge(left);

        assert_eq!(
            forward.count_by_severity(Severity::Warning),
            backward.count_by_severity(Severity::Warning)
        );
        assert_eq!(forward.total(), backward.total());
        assert_eq!(forward.by_file(), backward.by_file());
    }

    #[test]
    fn test_most_affected_file() {
        let mut report = ScanReport::new();
        report.record(Violation::new("a", Severity::Warning, "one.ts", "m"));
        report.record(Violation::new("b", Severity::Warning, "two.ts", "m"));
        report.record(Violation::new("c", Severity::Warning, "two.ts", "m"));

        assert_eq!(report.most_affected_file(), Some(("two.ts", 2)));
    }

    #[test]
    fn test_most_affected_file_tie_is_deterministic() {
        let mut report = ScanReport::new();
        report.record(Violation::new("a", Severity::Warning, "b.ts", "m"));
        report.record(Violation::new("b", Severity::Warning, "a.ts", "m"));

        assert_eq!(report.most_affected_file(), Some(("a.ts", 1)));
    }

    #[test]
    fn test_todo_stats_valid_can_go_negative() {
        let stats = TodoStats {
            total_todos: 1,
            format_issues: 2,
            ..Default::default()
        };
        assert_eq!(stats.valid_todos(), -1);
    }
}
