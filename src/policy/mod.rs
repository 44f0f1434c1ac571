//! Policy evaluation - per-validator thresholds
//!
//! Each validator maps its aggregate report to an exit decision with its
//! own threshold rule; the thresholds are deliberately not unified.

use crate::cli::exit_codes;
use crate::config::EnforcementLevel;
use crate::rules::results::{ScanReport, Severity};

/// Warnings tolerated by the security validator before the gate fails
pub const SECURITY_WARNING_BUDGET: usize = 5;

/// Format issues tolerated by the TODO validator before the gate fails
pub const TODO_ISSUE_BUDGET: usize = 10;

/// Naming gate: violations fail only at `error` enforcement; `warn` and
/// `off` always pass.
pub fn naming_exit_code(report: &ScanReport, level: EnforcementLevel) -> i32 {
    match level {
        EnforcementLevel::Error if !report.is_clean() => exit_codes::VIOLATIONS,
        _ => exit_codes::SUCCESS,
    }
}

/// Extension gate: any violation fails; there is no `off` level.
pub fn extensions_exit_code(report: &ScanReport) -> i32 {
    if report.is_clean() {
        exit_codes::SUCCESS
    } else {
        exit_codes::VIOLATIONS
    }
}

/// Security gate: any error fails; warnings fail only beyond the budget.
pub fn security_exit_code(report: &ScanReport) -> i32 {
    if report.has_errors() {
        return exit_codes::VIOLATIONS;
    }
    if report.count_by_severity(Severity::Warning) > SECURITY_WARNING_BUDGET {
        return exit_codes::VIOLATIONS;
    }
    exit_codes::SUCCESS
}

/// TODO gate: fails only when format issues exceed the budget.
pub fn todos_exit_code(report: &ScanReport) -> i32 {
    if report.total() > TODO_ISSUE_BUDGET {
        exit_codes::VIOLATIONS
    } else {
        exit_codes::SUCCESS
    }
}
