//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::launch::interpreter::InterpreterPolicy;

use super::{normalize_override, resolve_config_path, LaunchProfile};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    Launch(LaunchProfile),
    Cli(CliCommand, LaunchProfile),
}

/// Top-level optional CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum CliCommand {
    /// Resolve the working directory and interpreter, print the plan as JSON, and exit.
    #[command(
        about = "Resolve the launch plan without running the entry point",
        after_help = "Exit codes match a real launch: 1 for directory errors, 3 when no \
                      interpreter is found. The directory is checked to exist but is not \
                      entered, so a directory that cannot be entered (no execute permission) \
                      is only reported by a real launch."
    )]
    Check,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Run an app's main.py with an available interpreter",
    long_about = "Enters the app directory supplied by the host (SYFTBOX_APP_DIR), uses the \
                  interpreter in SYFTBOX_APP_PYTHON or the first of python3/python on PATH, \
                  and runs main.py, exiting with its status."
)]
pub struct LaunchArgs {
    /// App directory (overrides the host's working-directory variable).
    #[arg(long = "app-dir", value_name = "PATH")]
    pub app_dir_override: Option<PathBuf>,
    /// Interpreter to use verbatim (overrides the host's interpreter variable).
    #[arg(long = "interpreter", value_name = "PATH")]
    pub interpreter_override: Option<PathBuf>,
    /// Interpreter resolution policy (overrides config).
    #[arg(long = "policy", value_enum)]
    pub policy_override: Option<InterpreterPolicy>,
    /// Path to a launcher TOML file (overrides APP_LAUNCHER_CONFIG).
    #[arg(long = "config", value_name = "PATH")]
    pub config_override: Option<PathBuf>,
    /// Replace the launcher process with the interpreter instead of waiting on it.
    #[arg(long = "exec", default_value_t = false)]
    pub exec: bool,
    /// Optional CLI command mode.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl LaunchArgs {
    /// Build a `LaunchProfile` from CLI args and environment variables.
    pub fn build(self) -> Result<LaunchProfile> {
        let config_path = resolve_config_path(self.config_override)?;

        Ok(LaunchProfile {
            config_path,
            app_dir_override: normalize_override(self.app_dir_override),
            interpreter_override: normalize_override(self.interpreter_override),
            policy_override: self.policy_override,
            replace_process: self.exec,
        })
    }

    /// Parse CLI args into either launch mode or utility command mode.
    pub fn into_command(self) -> Result<ParsedCommand> {
        match self.command {
            Some(command) => Ok(ParsedCommand::Cli(command, self.build()?)),
            None => Ok(ParsedCommand::Launch(self.build()?)),
        }
    }
}
