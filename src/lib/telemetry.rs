//! Telemetry initialization and launch span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize `tracing` and format developer logs.
///
/// Defaults to `warn` so the launched app owns stdout and stderr unless `RUST_LOG` asks for more.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of a single launch.
pub struct LaunchSpan {
    span: Span,
    started_at: Instant,
    launch_id: Uuid,
}

impl LaunchSpan {
    /// Start a launch span.
    pub fn start(mode: &'static str) -> Self {
        let launch_id = Uuid::new_v4();
        let span = info_span!(
            target: "app_launcher::launch",
            "launch",
            %launch_id,
            mode
        );
        Self {
            span,
            started_at: Instant::now(),
            launch_id,
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Close the span while recording how the entry point finished.
    pub fn finish(self, exit_code: Option<i32>, signal: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "app_launcher::launch",
            launch_id = %self.launch_id,
            exit_code = exit_code,
            signal = signal,
            elapsed_ms = elapsed_ms,
            "Entry point finished"
        );
    }
}

/// Payload for logging the resolved launch as structured telemetry.
#[derive(Debug)]
pub struct LaunchPlanTelemetry<'a> {
    pub working_dir: &'a str,
    pub interpreter: &'a str,
    pub interpreter_source: &'a str,
    pub entry_point: &'a str,
    pub replace_process: bool,
}

/// Emit the resolved plan to `tracing`.
pub fn emit_launch_plan(telemetry: &LaunchPlanTelemetry<'_>) {
    info!(
        target: "app_launcher::launch",
        working_dir = telemetry.working_dir,
        interpreter = telemetry.interpreter,
        interpreter_source = telemetry.interpreter_source,
        entry_point = telemetry.entry_point,
        replace_process = telemetry.replace_process,
        "Launching entry point"
    );
}
