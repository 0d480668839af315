use std::path::Path;

use serde::Deserialize;

use crate::{
    launch::interpreter::InterpreterPolicy,
    lib::{errors::ConfigError, paths::is_bare_file_name},
};

pub const DEFAULT_ENTRY_POINT: &str = "main.py";
pub const DEFAULT_CANDIDATES: &[&str] = &["python3", "python"];

/// Launch behaviour settings.
#[derive(Debug, Clone)]
pub struct LauncherSection {
    pub entry_point: String,
    pub policy: InterpreterPolicy,
    pub candidates: Vec<String>,
    pub replace_process: bool,
}

impl Default for LauncherSection {
    fn default() -> Self {
        Self {
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            policy: InterpreterPolicy::Auto,
            candidates: default_candidates(),
            replace_process: false,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawLauncherSection {
    pub entry_point: Option<String>,
    pub policy: Option<String>,
    pub candidates: Option<Vec<String>>,
    pub replace_process: Option<bool>,
}

pub fn parse_launcher_section(
    raw: Option<RawLauncherSection>,
    path: &Path,
) -> Result<LauncherSection, ConfigError> {
    let launcher_raw = raw.unwrap_or_default();

    let entry_point = launcher_raw
        .entry_point
        .unwrap_or_else(|| DEFAULT_ENTRY_POINT.to_string());
    validate_entry_point(path, &entry_point)?;

    let policy = match launcher_raw.policy {
        Some(value) => parse_policy(path, &value)?,
        None => InterpreterPolicy::Auto,
    };

    let candidates = launcher_raw.candidates.unwrap_or_else(default_candidates);
    validate_candidates(path, &candidates)?;

    Ok(LauncherSection {
        entry_point,
        policy,
        candidates,
        replace_process: launcher_raw.replace_process.unwrap_or(false),
    })
}

fn default_candidates() -> Vec<String> {
    DEFAULT_CANDIDATES
        .iter()
        .map(|candidate| candidate.to_string())
        .collect()
}

fn validate_entry_point(path: &Path, entry_point: &str) -> Result<(), ConfigError> {
    if !is_bare_file_name(entry_point) {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "launcher.entry_point",
            message: format!("Use a file name directly inside the app directory: {entry_point:?}"),
        });
    }
    Ok(())
}

fn parse_policy(path: &Path, value: &str) -> Result<InterpreterPolicy, ConfigError> {
    InterpreterPolicy::from_name(value.trim()).ok_or_else(|| ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "launcher.policy",
        message: format!("Expected one of auto, explicit, probe; got {value:?}"),
    })
}

fn validate_candidates(path: &Path, candidates: &[String]) -> Result<(), ConfigError> {
    if candidates.is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "launcher.candidates",
            message: "Specify at least one interpreter name".into(),
        });
    }
    for candidate in candidates {
        if candidate.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "launcher.candidates",
                message: "Interpreter names cannot be empty".into(),
            });
        }
    }
    Ok(())
}
