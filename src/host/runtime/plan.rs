use crate::{
    cli::LaunchProfile,
    host::{config::LauncherConfig, environment::HostEnvironment},
    launch::{
        interpreter::{
            resolve_interpreter, ExplicitInterpreter, InterpreterProbe, InterpreterRequest,
            InterpreterSource, ResolvedInterpreter,
        },
        workdir::WorkingDir,
        LaunchPlan,
    },
    lib::errors::LaunchError,
};

/// Working directory from `--app-dir`, falling back to the host variable.
pub fn working_dir_for(
    profile: &LaunchProfile,
    config: &LauncherConfig,
    host: &HostEnvironment,
) -> Result<WorkingDir, LaunchError> {
    let supplied = profile
        .app_dir_override
        .as_deref()
        .or(host.app_dir.as_deref());
    WorkingDir::resolve(supplied, &config.environment.app_dir_var)
}

/// Interpreter per the effective policy; `--interpreter` beats the host variable.
pub fn interpreter_for<P: InterpreterProbe>(
    profile: &LaunchProfile,
    config: &LauncherConfig,
    host: &HostEnvironment,
    probe: &P,
) -> Result<ResolvedInterpreter, LaunchError> {
    let explicit = match (&profile.interpreter_override, &host.interpreter) {
        (Some(program), _) => Some(ExplicitInterpreter {
            program: program.clone(),
            source: InterpreterSource::Cli,
        }),
        (None, Some(program)) => Some(ExplicitInterpreter {
            program: program.clone(),
            source: InterpreterSource::Env,
        }),
        (None, None) => None,
    };

    resolve_interpreter(
        InterpreterRequest {
            policy: profile.policy_override.unwrap_or(config.launcher.policy),
            explicit,
            variable: &config.environment.interpreter_var,
            candidates: &config.launcher.candidates,
        },
        probe,
    )
}

/// Resolve the full plan without entering the directory or running anything.
pub fn resolve_plan<P: InterpreterProbe>(
    profile: &LaunchProfile,
    config: &LauncherConfig,
    host: &HostEnvironment,
    probe: &P,
) -> Result<LaunchPlan, LaunchError> {
    let working_dir = working_dir_for(profile, config, host)?;
    let interpreter = interpreter_for(profile, config, host, probe)?;
    Ok(LaunchPlan {
        working_dir,
        interpreter,
        entry_point: config.launcher.entry_point.clone(),
    })
}
