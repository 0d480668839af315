use std::process::{ExitCode, ExitStatus};

use anyhow::Error;
use tracing::Instrument;

use crate::{
    cli::LaunchProfile,
    host::{config::LauncherConfig, environment::HostEnvironment},
    launch::{execute, interpreter::SystemInterpreterProbe, LaunchPlan},
    lib::{errors::LaunchError, exit_codes, status::Termination, telemetry::LaunchSpan},
};

use super::plan::{interpreter_for, working_dir_for};

/// Bundles a launcher error message with the exit code reported to the host.
#[derive(Debug)]
pub struct LaunchExit {
    message: String,
    exit_code: u8,
}

impl LaunchExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            exit_code: exit_codes::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("app-launcher: {}", self.message);
        ExitCode::from(self.exit_code)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<LaunchError> for LaunchExit {
    fn from(error: LaunchError) -> Self {
        Self {
            exit_code: error.exit_code(),
            message: error.to_string(),
        }
    }
}

/// Enter the working directory, resolve the interpreter, and run the entry point.
///
/// Returns the child's exit status for the caller to mirror.
pub async fn run_launch(
    profile: LaunchProfile,
    config: LauncherConfig,
) -> Result<ExitStatus, LaunchExit> {
    let host = HostEnvironment::capture(&config.environment);
    let replace_process = profile.replace_process || config.launcher.replace_process;
    let span = LaunchSpan::start(if replace_process { "exec" } else { "spawn" });

    let plan = {
        let _entered = span.span().enter();
        let working_dir = working_dir_for(&profile, &config, &host)?;
        working_dir.enter()?;
        let interpreter = interpreter_for(&profile, &config, &host, &SystemInterpreterProbe)?;
        LaunchPlan {
            working_dir,
            interpreter,
            entry_point: config.launcher.entry_point.clone(),
        }
    };
    plan.emit_telemetry(replace_process);

    if replace_process {
        replace_or_fall_back(&plan)?;
    }

    let status = execute::run_to_completion(&plan)
        .instrument(span.span().clone())
        .await?;
    let termination = Termination::from_status(status);
    match termination {
        Termination::Exited(code) => span.finish(Some(i32::from(code)), None),
        Termination::Signaled(signal) => span.finish(None, Some(signal)),
    }
    Ok(status)
}

#[cfg(unix)]
fn replace_or_fall_back(plan: &LaunchPlan) -> Result<(), LaunchError> {
    Err(execute::replace_process(plan))
}

#[cfg(not(unix))]
fn replace_or_fall_back(_plan: &LaunchPlan) -> Result<(), LaunchError> {
    tracing::warn!(
        target: "app_launcher::launch",
        "Process replacement is not supported on this platform; waiting on the child instead"
    );
    Ok(())
}
