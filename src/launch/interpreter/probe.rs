use std::path::PathBuf;

use tracing::debug;

/// Abstraction for looking up interpreter names on an executable search path.
pub trait InterpreterProbe {
    /// Absolute path of `candidate` if it is present and executable.
    fn locate(&self, candidate: &str) -> Option<PathBuf>;
}

/// Probe that searches the launcher's own `PATH`.
pub struct SystemInterpreterProbe;

impl InterpreterProbe for SystemInterpreterProbe {
    fn locate(&self, candidate: &str) -> Option<PathBuf> {
        match which::which(candidate) {
            Ok(path) => Some(path),
            Err(err) => {
                debug!(
                    target: "app_launcher::probe",
                    candidate,
                    reason = %err,
                    "Candidate not found on PATH"
                );
                None
            }
        }
    }
}
