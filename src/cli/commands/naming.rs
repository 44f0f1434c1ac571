//! Naming command - Validate file and folder naming conventions

use std::path::Path;

use super::OutputFormat;
use crate::cli::exit_codes;
use crate::cli::output::{JsonOutput, TerminalOutput};
use crate::config::{EnforcementLevel, ScanConfig};
use crate::error::RepoGateError;
use crate::policy;
use crate::rules::registry::NamingRules;
use crate::scanner;

pub fn execute(config_path: Option<&Path>, format: OutputFormat) -> Result<i32, RepoGateError> {
    let config = ScanConfig::load_or_default(config_path);

    if config.enforcement_level == EnforcementLevel::Off {
        println!("Naming convention validation is disabled");
        return Ok(exit_codes::SUCCESS);
    }

    let rules = NamingRules::from_config(&config)?;
    let report = scanner::naming::scan(Path::new("."), &config, &rules);

    match format {
        OutputFormat::Terminal => {
            print!("{}", TerminalOutput::new().render_naming(&report, &config));
        }
        OutputFormat::Json => println!("{}", JsonOutput::new().render(&report)?),
    }

    Ok(policy::naming_exit_code(&report, config.enforcement_level))
}
