use tracing::{debug, info};

use super::{LauncherConfig, CONFIG_ENV_KEY};

pub fn log_defaults() {
    debug!(
        target: "app_launcher::config",
        env = CONFIG_ENV_KEY,
        "No configuration file given; using built-in defaults"
    );
}

pub fn log_loaded(config: &LauncherConfig) {
    info!(
        target: "app_launcher::config",
        path = %config
            .source_path
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_default(),
        entry_point = %config.launcher.entry_point,
        policy = config.launcher.policy.as_str(),
        candidates = ?config.launcher.candidates,
        replace_process = config.launcher.replace_process,
        app_dir_var = %config.environment.app_dir_var,
        interpreter_var = %config.environment.interpreter_var,
        "Configuration file loaded successfully"
    );
}
