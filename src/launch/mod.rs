//! The launch pipeline: working directory, interpreter, execution.
pub mod command;
pub mod execute;
pub mod interpreter;
pub mod workdir;

use crate::lib::telemetry::LaunchPlanTelemetry;

use self::{interpreter::ResolvedInterpreter, workdir::WorkingDir};

/// Everything needed to run the entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub working_dir: WorkingDir,
    pub interpreter: ResolvedInterpreter,
    pub entry_point: String,
}

impl LaunchPlan {
    pub fn emit_telemetry(&self, replace_process: bool) {
        let working_dir = self.working_dir.path().to_string_lossy();
        let interpreter = self.interpreter.program.to_string_lossy();
        crate::lib::telemetry::emit_launch_plan(&LaunchPlanTelemetry {
            working_dir: working_dir.as_ref(),
            interpreter: interpreter.as_ref(),
            interpreter_source: self.interpreter.source.as_str(),
            entry_point: &self.entry_point,
            replace_process,
        });
    }
}
