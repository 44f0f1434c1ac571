//! repogate - Enforce repository policy gates for pre-commit and CI
//!
//! This is the main entry point for the CLI application.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod config;
mod error;
mod policy;
mod rules;
mod scanner;

use cli::{Cli, Commands};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    // Honor the working-directory override before any scan starts
    if let Some(directory) = &cli.directory {
        if let Err(e) = std::env::set_current_dir(directory) {
            eprintln!("Error: cannot change to directory '{}': {e}", directory.display());
            std::process::exit(cli::exit_codes::VIOLATIONS);
        }
    }

    let config_path = cli.config.as_deref();

    // Execute the appropriate command
    let result = match cli.command {
        Commands::Naming => cli::commands::naming::execute(config_path, cli.format),
        Commands::Extensions => cli::commands::extensions::execute(config_path, cli.format),
        Commands::Security(args) => cli::commands::security::execute(args, cli.format),
        Commands::Todos(args) => cli::commands::todos::execute(args, cli.format),
    };

    // The exit code is the machine-readable pass/fail signal for CI
    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(cli::exit_codes::VIOLATIONS);
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
