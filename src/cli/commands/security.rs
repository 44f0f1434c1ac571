//! Security command - Check files for security anti-patterns

use super::{existing_files, FileArgs, OutputFormat};
use crate::cli::output::{JsonOutput, TerminalOutput};
use crate::error::RepoGateError;
use crate::policy;
use crate::rules::{Allowlist, RuleRegistry};
use crate::scanner::ContentScanner;

pub fn execute(args: FileArgs, format: OutputFormat) -> Result<i32, RepoGateError> {
    let files = existing_files(&args.files);

    let registry = RuleRegistry::security();
    let allowlist = Allowlist::new();
    let report = ContentScanner::new(&registry, &allowlist).scan_files(&files);

    match format {
        OutputFormat::Terminal => print!("{}", TerminalOutput::new().render_security(&report)),
        OutputFormat::Json => println!("{}", JsonOutput::new().render(&report)?),
    }

    Ok(policy::security_exit_code(&report))
}
