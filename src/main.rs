//! Entry point for the app launcher.
use std::process::ExitCode;

use anyhow::Error;
use app_launcher::{
    cli::{execute_cli_command, CliCommand, LaunchArgs, LaunchProfile, ParsedCommand},
    host::{
        config::LauncherConfig,
        runtime::{self, LaunchExit},
    },
    lib::{status, telemetry},
};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<ExitCode, LaunchExit> {
    telemetry::init_tracing().map_err(LaunchExit::from_error)?;
    let args = LaunchArgs::parse();
    let command = args.into_command().map_err(LaunchExit::from_error)?;

    match command {
        ParsedCommand::Launch(profile) => launch(profile).await,
        ParsedCommand::Cli(command, profile) => handle_cli_command(command, profile),
    }
}

fn load_config(profile: &LaunchProfile) -> Result<LauncherConfig, LaunchExit> {
    LauncherConfig::load(profile.config_path.clone())
        .map_err(|err| LaunchExit::from_error(Error::new(err)))
}

async fn launch(profile: LaunchProfile) -> Result<ExitCode, LaunchExit> {
    let config = load_config(&profile)?;
    let exit_status = runtime::run_launch(profile, config).await?;
    Ok(status::mirror(exit_status))
}

fn handle_cli_command(
    command: CliCommand,
    profile: LaunchProfile,
) -> Result<ExitCode, LaunchExit> {
    let config = load_config(&profile)?;
    let message = execute_cli_command(command, &profile, &config)?;
    println!("{message}");
    Ok(ExitCode::SUCCESS)
}
