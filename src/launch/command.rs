//! Shared helper for building the interpreter command.

use std::process::{Command, Stdio};

use super::LaunchPlan;

/// Build `<interpreter> <entry_point>` run from the working directory.
///
/// Environment and stdio are inherited unchanged.
pub fn build_entry_point_command(plan: &LaunchPlan) -> Command {
    let mut command = Command::new(&plan.interpreter.program);
    command.arg(&plan.entry_point);
    command.current_dir(plan.working_dir.path());
    command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    command
}
