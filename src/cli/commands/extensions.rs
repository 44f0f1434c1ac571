//! Extensions command - Validate file extensions against per-folder rules

use std::path::Path;

use super::OutputFormat;
use crate::cli::output::{JsonOutput, TerminalOutput};
use crate::config::ScanConfig;
use crate::error::RepoGateError;
use crate::policy;
use crate::scanner;

pub fn execute(config_path: Option<&Path>, format: OutputFormat) -> Result<i32, RepoGateError> {
    let config = ScanConfig::load_or_default(config_path);
    let report = scanner::extensions::scan(Path::new("."), &config.folder_type_rules);

    match format {
        OutputFormat::Terminal => {
            print!(
                "{}",
                TerminalOutput::new().render_extensions(&report, &config.folder_type_rules)
            );
        }
        OutputFormat::Json => println!("{}", JsonOutput::new().render(&report)?),
    }

    Ok(policy::extensions_exit_code(&report))
}
