//! Mirror a child's exit status as the launcher's own.

use std::process::{ExitCode, ExitStatus};

use super::exit_codes;

/// How the child terminated, reduced to what the launcher can reproduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Normal exit with the low eight bits of the status.
    Exited(u8),
    /// Killed by the given signal (Unix only).
    Signaled(i32),
}

impl Termination {
    pub fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Termination::Exited((code & 0xff) as u8);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Termination::Signaled(signal);
            }
        }
        Termination::Exited(exit_codes::FAILURE)
    }

    /// Shell-style exit code (`128 + N` for signal deaths).
    pub fn exit_code(self) -> u8 {
        match self {
            Termination::Exited(code) => code,
            Termination::Signaled(signal) => {
                exit_codes::SIGNAL_BASE.wrapping_add((signal & 0x7f) as u8)
            }
        }
    }
}

/// Reproduce the child's termination for the host.
///
/// A signal death is re-raised on the launcher with the default disposition restored; the
/// `128 + N` code is returned only if that does not end the process.
pub fn mirror(status: ExitStatus) -> ExitCode {
    let termination = Termination::from_status(status);
    if let Termination::Signaled(signal) = termination {
        reraise(signal);
    }
    ExitCode::from(termination.exit_code())
}

#[cfg(unix)]
fn reraise(signal: i32) {
    // SAFETY: restoring SIG_DFL and raising are async-signal-safe libc calls with no pointers.
    unsafe {
        libc::signal(signal, libc::SIG_DFL);
        libc::raise(signal);
    }
}

#[cfg(not(unix))]
fn reraise(_signal: i32) {}
