//! Read-only snapshot of the variables the host hands to the launcher.

use std::{env, ffi::OsString, path::PathBuf};

use crate::host::config::EnvironmentSection;

/// Values supplied by the hosting process. Empty values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostEnvironment {
    pub app_dir: Option<PathBuf>,
    pub interpreter: Option<PathBuf>,
}

impl HostEnvironment {
    /// Read the configured variables from the process environment.
    pub fn capture(section: &EnvironmentSection) -> Self {
        Self::from_values(
            env::var_os(&section.app_dir_var),
            env::var_os(&section.interpreter_var),
        )
    }

    /// Build a snapshot from explicit values (testable helper).
    pub fn from_values(app_dir: Option<OsString>, interpreter: Option<OsString>) -> Self {
        Self {
            app_dir: non_empty(app_dir),
            interpreter: non_empty(interpreter),
        }
    }
}

fn non_empty(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}
