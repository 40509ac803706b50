//! mailflow: email-filter workbench for the terminal
//!
//! Starts the interactive TUI by default; the other subcommands inspect
//! and scaffold the configuration file.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use mailflow::cli::{self, exit_codes};
use mailflow::config::{generate_json_schema, AppConfig};
use mailflow::Language;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mailflow")]
#[command(version)]
#[command(about = "Email-filter workbench for the terminal", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Normal exit
    1  Configuration file has invalid values
    2  Error occurred

EXAMPLES:
    # Start the workbench
    mailflow

    # Light theme, empty filter list, English flag
    mailflow --light --no-samples --language en

    # Write a starter config and check it
    mailflow init-config -o .mailflow.yaml
    mailflow check-config")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "MAILFLOW_CONFIG")]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Start with the light color scheme
    #[arg(long, global = true)]
    light: bool,

    /// Start each session with an empty filter list
    #[arg(long, global = true)]
    no_samples: bool,

    /// Initial language flag (es, en)
    #[arg(long, global = true)]
    language: Option<Language>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive workbench (default)
    Run,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a commented example config
    InitConfig {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load and validate the config file
    CheckConfig,
}

impl Cli {
    /// Config values set by flags, layered over the file.
    fn overrides(&self) -> AppConfig {
        let mut overrides = AppConfig::default();
        if self.light {
            overrides.tui.theme = "light".to_string();
        }
        if self.no_samples {
            overrides.workbench.seed_samples = false;
        }
        overrides
    }
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let registry = tracing_subscriber::registry();
    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            let log_level = if verbose { "debug" } else { "info" };
            registry
                .with(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
                ))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => {
            // The TUI owns the terminal
            registry
                .with(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
                ))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .init();
        }
    }
    Ok(())
}

fn dispatch(args: Cli) -> Result<i32> {
    init_logging(args.verbose, args.log_file.as_deref())?;

    match args.command.as_ref().unwrap_or(&Commands::Run) {
        Commands::Run => {
            let (mut config, loaded_from) =
                AppConfig::from_file_with_overrides(args.config.as_deref(), &args.overrides());
            // Applied after the merge so `--language es` beats a file's `en`
            if let Some(language) = args.language {
                config.session.language = language;
            }
            if let Some(path) = &loaded_from {
                tracing::info!("Using config {}", path.display());
            }
            cli::run_app(config)
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "mailflow", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::InitConfig { output } => {
            cli::run_init_config(output.as_deref(), &mut io::stdout())
        }

        Commands::CheckConfig => cli::run_check_config(args.config.as_deref(), &mut io::stdout()),
    }
}

fn main() {
    let code = match dispatch(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_flag() {
        let args = Cli::try_parse_from(["mailflow", "--language", "EN"]).unwrap();
        assert_eq!(args.language, Some(Language::En));
        assert!(Cli::try_parse_from(["mailflow", "--language", "fr"]).is_err());
    }

    #[test]
    fn test_overrides_from_flags() {
        let args = Cli::try_parse_from(["mailflow", "--light", "--no-samples"]).unwrap();
        let overrides = args.overrides();
        assert_eq!(overrides.tui.theme, "light");
        assert!(!overrides.workbench.seed_samples);
    }
}
