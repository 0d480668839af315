//! Launch orchestration: resolve the plan and hand it to the executor.
mod plan;
mod startup;

pub use plan::{interpreter_for, resolve_plan, working_dir_for};
pub use startup::{run_launch, LaunchExit};
