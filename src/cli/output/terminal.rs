//! Terminal output formatting with colors

use colored::Colorize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::config::{EnforcementLevel, ScanConfig};
use crate::policy;
use crate::rules::results::{ScanReport, Severity, TodoStats, Violation};

pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    /// Naming validator report, with the expected conventions recap
    pub fn render_naming(&self, report: &ScanReport, config: &ScanConfig) -> String {
        if report.is_clean() {
            return format!(
                "{}\n",
                "✅ All files and folders follow naming conventions".green()
            );
        }

        let mut output = String::new();
        let _ = writeln!(
            output,
            "{}",
            "🚫 Naming Convention Violations Found:".red().bold()
        );
        let _ = writeln!(output, "{}", "=".repeat(50).dimmed());

        for violation in report.violations() {
            let kind = if violation.rule_name == "folder-naming" {
                "FOLDER"
            } else {
                "FILE"
            };
            let _ = writeln!(output, "❌ {}: {}", kind, violation.file_path.cyan());
            let _ = writeln!(output, "   Issue: {}", violation.message);
            output.push('\n');
        }

        let _ = writeln!(output, "{}", "📋 Expected Naming Conventions:".bold());
        let _ = writeln!(
            output,
            "   📁 Folders: {}",
            config.folder_patterns.required_prefix.yellow()
        );
        let _ = writeln!(
            output,
            "   📄 Files: {}",
            config.file_patterns.required_prefix.yellow()
        );
        let _ = writeln!(
            output,
            "   📎 Extensions: {}",
            config.file_patterns.allowed_extensions.join(", ").yellow()
        );
        output.push('\n');
        let _ = writeln!(output, "{}", "💡 Examples:".bold());
        let _ = writeln!(output, "   ✅ 10-documentation/01-project-overview.txt");
        let _ = writeln!(output, "   ✅ 50-scripts/02-validation-script.py");
        let _ = writeln!(output, "   ❌ documentation/project_overview.txt");
        let _ = writeln!(output, "   ❌ scripts/validation.py");

        if config.enforcement_level == EnforcementLevel::Warn {
            let _ = writeln!(
                output,
                "\n{}",
                "⚠️  Warnings only - commit will proceed".yellow()
            );
        }

        output
    }

    /// Extension validator report, with the folder rules recap
    pub fn render_extensions(
        &self,
        report: &ScanReport,
        folder_rules: &BTreeMap<String, Vec<String>>,
    ) -> String {
        if report.is_clean() {
            return format!(
                "{}\n",
                "✅ All file extensions are appropriate for their folders".green()
            );
        }

        let mut output = String::new();
        let _ = writeln!(
            output,
            "{}",
            "🚫 File Extension Violations Found:".red().bold()
        );
        let _ = writeln!(output, "{}", "=".repeat(50).dimmed());

        for violation in report.violations() {
            let _ = writeln!(output, "❌ FILE: {}", violation.file_path.cyan());
            let _ = writeln!(output, "   {}", violation.message);
            output.push('\n');
        }

        let _ = writeln!(output, "{}", "📋 Folder Type Rules:".bold());
        for (folder, extensions) in folder_rules {
            let _ = writeln!(
                output,
                "   📁 {}: {}",
                folder.cyan(),
                extensions.join(", ").dimmed()
            );
        }

        output
    }

    /// Security validator report, grouped per file, with summary and verdict
    pub fn render_security(&self, report: &ScanReport) -> String {
        let mut output = String::new();

        self.render_file_groups(&mut output, report, "🔍 Security check", |v| {
            format!(
                "  {} Line {}: {} [{}]",
                severity_icon(v.severity),
                v.line.unwrap_or(0),
                v.message,
                v.rule_name.cyan()
            )
        });

        let errors = report.count_by_severity(Severity::Error);
        let warnings = report.count_by_severity(Severity::Warning);
        let info = report.count_by_severity(Severity::Info);

        if !report.is_clean() {
            let _ = writeln!(output, "\n{}", "📊 Security check summary:".bold());
            let _ = writeln!(output, "   Errors: {}", errors.to_string().red().bold());
            let _ = writeln!(
                output,
                "   Warnings: {}",
                warnings.to_string().yellow().bold()
            );
            let _ = writeln!(output, "   Info: {}", info.to_string().blue().bold());
            output.push('\n');
        }

        let verdict = if errors > 0 {
            "❌ Security check failed - critical issues found".red().bold()
        } else if warnings > policy::SECURITY_WARNING_BUDGET {
            "⚠️  Security check failed - too many warnings".red().bold()
        } else if !report.is_clean() {
            "✅ Security check passed with warnings".green()
        } else {
            "✅ Security check passed - no issues found".green()
        };
        let _ = writeln!(output, "{verdict}");

        output
    }

    /// TODO validator report, grouped per file, with statistics and verdict
    pub fn render_todos(&self, report: &ScanReport, stats: &TodoStats) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "🔍 Checking TODO format compliance...");

        self.render_file_groups(&mut output, report, "📝 TODO issues in", |v| {
            format!(
                "  {} Line {}: {}",
                severity_icon(v.severity),
                v.line.unwrap_or(0),
                v.message
            )
        });

        let _ = writeln!(output, "\n{}", "📊 TODO Analysis Summary:".bold());
        let _ = writeln!(output, "   Files checked: {}", stats.files_checked);
        let _ = writeln!(output, "   Files with TODOs: {}", stats.files_with_todos);
        let _ = writeln!(output, "   Total TODOs found: {}", stats.total_todos);
        let _ = writeln!(output, "   Valid TODOs: {}", stats.valid_todos());
        let _ = writeln!(output, "   Invalid TODOs: {}", stats.format_issues);
        let _ = writeln!(output, "   Format issues: {}", report.total());

        if let Some(file) = &stats.most_todos_file {
            let _ = writeln!(
                output,
                "   File with most TODOs: {} ({})",
                file.cyan(),
                stats.most_todos_count
            );
        }

        let issues = report.total();
        if issues > 0 {
            let _ = writeln!(output, "\n{}", "💡 Recommendations:".bold());
            let _ = writeln!(output, "   • Use format: TODO: Clear description (Task #123)");
            let _ = writeln!(output, "   • Include task/issue references when possible");
            let _ = writeln!(output, "   • Be specific about what needs to be done");
            let _ = writeln!(output, "   • Review and remove outdated TODOs");
        }

        let verdict = if issues > policy::TODO_ISSUE_BUDGET {
            format!("❌ TODO check failed - too many format issues ({issues})")
                .red()
                .bold()
        } else if issues > 0 {
            format!("⚠️  TODO check passed with warnings ({issues} issues)").yellow()
        } else {
            "✅ TODO check passed - all TODOs properly formatted"
                .to_string()
                .green()
        };
        let _ = writeln!(output, "\n{verdict}");

        output
    }

    /// Group violations under per-file headers, preserving discovery order
    fn render_file_groups(
        &self,
        output: &mut String,
        report: &ScanReport,
        header: &str,
        format_line: impl Fn(&Violation) -> String,
    ) {
        let mut current_file: Option<&str> = None;

        for violation in report.violations() {
            if current_file != Some(violation.file_path.as_str()) {
                current_file = Some(violation.file_path.as_str());
                let _ = writeln!(output, "\n{}: {}", header.bold(), violation.file_path.cyan());
                let _ = writeln!(
                    output,
                    "{}",
                    "-".repeat(20 + violation.file_path.len()).dimmed()
                );
            }
            let _ = writeln!(output, "{}", format_line(violation));
        }
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "❌",
        Severity::Warning => "⚠️",
        Severity::Info => "ℹ️",
    }
}
