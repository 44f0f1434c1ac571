//! Todos command - Check TODO comment formatting

use serde::Serialize;

use super::{existing_files, FileArgs, OutputFormat};
use crate::cli::exit_codes;
use crate::cli::output::{JsonOutput, TerminalOutput};
use crate::error::RepoGateError;
use crate::policy;
use crate::rules::results::{ScanReport, TodoStats};
use crate::rules::RuleRegistry;
use crate::scanner;

#[derive(Serialize)]
struct TodoReport<'a> {
    report: &'a ScanReport,
    stats: &'a TodoStats,
}

pub fn execute(args: FileArgs, format: OutputFormat) -> Result<i32, RepoGateError> {
    let files = existing_files(&args.files);
    if files.is_empty() {
        println!("No valid files provided");
        return Ok(exit_codes::SUCCESS);
    }

    let registry = RuleRegistry::todos();
    let (report, stats) = scanner::todos::scan_files(&files, &registry);

    match format {
        OutputFormat::Terminal => {
            print!("{}", TerminalOutput::new().render_todos(&report, &stats));
        }
        OutputFormat::Json => {
            let payload = TodoReport {
                report: &report,
                stats: &stats,
            };
            println!("{}", JsonOutput::new().render(&payload)?);
        }
    }

    Ok(policy::todos_exit_code(&report))
}
