//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::adapters::TerminalConsole;
use crate::app::commands::install::InstallMode;
use crate::app::logging;
use crate::domain::AppError;
use crate::ports::Console;

#[derive(Parser)]
#[command(name = "platform")]
#[command(version)]
#[command(about = "Installs the latest version of Platform", long_about = None)]
struct Cli {
    /// Installer config file (defaults to $PLATFORM_INSTALLER_CONFIG, then built-in defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Show diagnostic logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the Platform. Prompts for all inputs when no arguments are given.
    #[clap(visible_alias = "i")]
    Install {
        /// Installation path
        #[arg(requires = "license_key")]
        path: Option<PathBuf>,
        /// Platform license key
        #[arg(requires = "path")]
        license_key: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Install { path, license_key } => {
            let mode = match (path, license_key) {
                (Some(path), Some(license_key)) => InstallMode::Arguments { path, license_key },
                _ => InstallMode::Interactive,
            };
            crate::install(mode, cli.config.as_deref()).map(|_| ())
        }
    };

    if let Err(e) = result {
        TerminalConsole::new().error(&format!("Error: {}", e));
        std::process::exit(1);
    }
}
