//! LaunchProfile and config path resolution.
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{host::config::CONFIG_ENV_KEY, launch::interpreter::InterpreterPolicy};

/// Resolved launch profile: command-line overrides plus the config file to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchProfile {
    pub config_path: Option<PathBuf>,
    pub app_dir_override: Option<PathBuf>,
    pub interpreter_override: Option<PathBuf>,
    pub policy_override: Option<InterpreterPolicy>,
    pub replace_process: bool,
}

/// Resolve config path in the order: CLI override → env var → none (built-in defaults).
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(resolve_config_path_from(
        override_path,
        env::var_os(CONFIG_ENV_KEY),
        &cwd,
    ))
}

/// Resolve config path from explicit values (testable helper).
fn resolve_config_path_from(
    override_path: Option<PathBuf>,
    env_value: Option<OsString>,
    cwd: &Path,
) -> Option<PathBuf> {
    let path = override_path.or_else(|| {
        env_value
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })?;

    if path.is_absolute() {
        return Some(path);
    }
    Some(cwd.join(path))
}

/// Drop empty override values so they fall through to the environment.
pub fn normalize_override(value: Option<PathBuf>) -> Option<PathBuf> {
    value.filter(|path| !path.as_os_str().is_empty())
}
