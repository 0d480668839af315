//! Load and validate launcher configuration.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod environment;
pub mod launcher;
pub mod telemetry;

pub use environment::{
    parse_environment_section, EnvironmentSection, RawEnvironmentSection, DEFAULT_APP_DIR_VAR,
    DEFAULT_INTERPRETER_VAR,
};
pub use launcher::{
    parse_launcher_section, LauncherSection, RawLauncherSection, DEFAULT_CANDIDATES,
    DEFAULT_ENTRY_POINT,
};

/// Environment variable naming an optional configuration file.
pub const CONFIG_ENV_KEY: &str = "APP_LAUNCHER_CONFIG";

/// Top-level configuration container.
#[derive(Debug, Clone, Default)]
pub struct LauncherConfig {
    pub launcher: LauncherSection,
    pub environment: EnvironmentSection,
    /// `None` when running on built-in defaults.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawLauncherConfig {
    launcher: Option<RawLauncherSection>,
    environment: Option<RawEnvironmentSection>,
}

impl LauncherConfig {
    /// Load the file at `path` if one was given; otherwise use the defaults.
    pub fn load(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => {
                telemetry::log_defaults();
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "app_launcher::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "app_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawLauncherConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "app_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "app_launcher::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawLauncherConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let launcher = parse_launcher_section(raw.launcher, &path)?;
        let environment = parse_environment_section(raw.environment, &path)?;

        Ok(Self {
            launcher,
            environment,
            source_path: Some(path),
        })
    }
}
