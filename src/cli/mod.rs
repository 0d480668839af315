//! CLI entrypoint module structure.
use serde_json::json;

use crate::{
    host::{config::LauncherConfig, environment::HostEnvironment, runtime::resolve_plan},
    launch::interpreter::{InterpreterProbe, SystemInterpreterProbe},
    lib::errors::LaunchError,
};

pub mod args;
pub mod profile;

pub use args::{CliCommand, LaunchArgs, ParsedCommand};
pub use profile::{normalize_override, resolve_config_path, LaunchProfile};

/// Execute CLI command mode and return a user-facing result payload.
pub fn execute_cli_command(
    command: CliCommand,
    profile: &LaunchProfile,
    config: &LauncherConfig,
) -> Result<String, LaunchError> {
    match command {
        CliCommand::Check => {
            let host = HostEnvironment::capture(&config.environment);
            check_plan(profile, config, &host, &SystemInterpreterProbe)
        }
    }
}

/// Resolve the plan and format it as a JSON payload.
fn check_plan<P: InterpreterProbe>(
    profile: &LaunchProfile,
    config: &LauncherConfig,
    host: &HostEnvironment,
    probe: &P,
) -> Result<String, LaunchError> {
    let plan = resolve_plan(profile, config, host, probe)?;
    let payload = json!({
        "status": "ready",
        "working_dir": plan.working_dir.path().to_string_lossy(),
        "interpreter": plan.interpreter.program.to_string_lossy(),
        "interpreter_source": plan.interpreter.source,
        "entry_point": plan.entry_point,
        "entry_point_present": plan.working_dir.path().join(&plan.entry_point).is_file(),
        "policy": profile.policy_override.unwrap_or(config.launcher.policy),
        "replace_process": profile.replace_process || config.launcher.replace_process,
    });

    Ok(serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string()))
}
