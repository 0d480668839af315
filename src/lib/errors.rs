use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

use super::exit_codes;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures that stop a launch before or while the entry point runs.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Neither the environment nor the command line named a working directory.
    #[error("Working directory is not set: export {variable} or pass --app-dir")]
    WorkingDirUnset { variable: String },
    /// The working directory is missing, not a directory, or cannot be entered.
    #[error("Cannot enter working directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// No candidate interpreter is present on the search path.
    #[error(
        "No interpreter found on PATH (tried: {}); install one or set an explicit interpreter",
        candidates.join(", ")
    )]
    InterpreterNotFound { candidates: Vec<String> },
    /// The explicit policy is active but no interpreter was supplied.
    #[error("Interpreter is not set: export {variable} or pass --interpreter")]
    InterpreterUnset { variable: String },
    #[error("Failed to start {interpreter}: {source}")]
    Spawn {
        interpreter: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed while waiting for {interpreter}: {source}")]
    Wait {
        interpreter: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Exit status the launcher reports for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            LaunchError::WorkingDirUnset { .. } | LaunchError::Directory { .. } => {
                exit_codes::FAILURE
            }
            LaunchError::InterpreterNotFound { .. } | LaunchError::InterpreterUnset { .. } => {
                exit_codes::INTERPRETER_NOT_FOUND
            }
            LaunchError::Spawn { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => exit_codes::COMMAND_NOT_FOUND,
                _ => exit_codes::NOT_EXECUTABLE,
            },
            LaunchError::Wait { .. } => exit_codes::FAILURE,
        }
    }
}
