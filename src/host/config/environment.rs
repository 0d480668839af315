use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_APP_DIR_VAR: &str = "SYFTBOX_APP_DIR";
pub const DEFAULT_INTERPRETER_VAR: &str = "SYFTBOX_APP_PYTHON";

/// Names of the host-provided environment variables.
#[derive(Debug, Clone)]
pub struct EnvironmentSection {
    pub app_dir_var: String,
    pub interpreter_var: String,
}

impl Default for EnvironmentSection {
    fn default() -> Self {
        Self {
            app_dir_var: DEFAULT_APP_DIR_VAR.to_string(),
            interpreter_var: DEFAULT_INTERPRETER_VAR.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawEnvironmentSection {
    pub app_dir_var: Option<String>,
    pub interpreter_var: Option<String>,
}

pub fn parse_environment_section(
    raw: Option<RawEnvironmentSection>,
    path: &Path,
) -> Result<EnvironmentSection, ConfigError> {
    let environment_raw = raw.unwrap_or_default();

    let app_dir_var = environment_raw
        .app_dir_var
        .unwrap_or_else(|| DEFAULT_APP_DIR_VAR.to_string());
    validate_var_name(path, "environment.app_dir_var", &app_dir_var)?;

    let interpreter_var = environment_raw
        .interpreter_var
        .unwrap_or_else(|| DEFAULT_INTERPRETER_VAR.to_string());
    validate_var_name(path, "environment.interpreter_var", &interpreter_var)?;

    Ok(EnvironmentSection {
        app_dir_var,
        interpreter_var,
    })
}

fn validate_var_name(path: &Path, field: &'static str, name: &str) -> Result<(), ConfigError> {
    if name.trim().is_empty() || name.contains('=') || name.contains('\0') {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: format!("Not a usable environment variable name: {name:?}"),
        });
    }
    Ok(())
}
