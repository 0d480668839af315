//! Running the entry point: spawn and wait with signal relay, or replace the launcher.
use std::{io, path::Path, process::ExitStatus};

use tokio::process::{Child, Command};
use tracing::{debug, info};

use crate::lib::errors::LaunchError;

use super::{command::build_entry_point_command, LaunchPlan};

/// Spawn the entry point and wait for it, returning its exit status untouched.
pub async fn run_to_completion(plan: &LaunchPlan) -> Result<ExitStatus, LaunchError> {
    let interpreter = plan.interpreter.program.as_path();
    // Install before spawning so a signal arriving in between cannot orphan the child.
    let relay = signals::SignalRelay::install();

    let mut command = Command::from(build_entry_point_command(plan));
    let mut child = command.spawn().map_err(|source| LaunchError::Spawn {
        interpreter: interpreter.to_path_buf(),
        source,
    })?;
    info!(
        target: "app_launcher::launch",
        pid = child.id(),
        interpreter = %interpreter.display(),
        "Started entry point"
    );

    let status = match relay {
        Some(relay) => relay.wait(&mut child).await,
        None => child.wait().await,
    }
    .map_err(|source| wait_error(interpreter, source))?;

    debug!(
        target: "app_launcher::launch",
        exit_code = ?status.code(),
        "Entry point exited"
    );
    Ok(status)
}

/// Replace the launcher with the interpreter. Returns only if `execve` fails.
#[cfg(unix)]
pub fn replace_process(plan: &LaunchPlan) -> LaunchError {
    use std::os::unix::process::CommandExt;

    info!(
        target: "app_launcher::launch",
        interpreter = %plan.interpreter.program.display(),
        "Replacing launcher process with entry point"
    );
    let source = build_entry_point_command(plan).exec();
    LaunchError::Spawn {
        interpreter: plan.interpreter.program.clone(),
        source,
    }
}

fn wait_error(interpreter: &Path, source: io::Error) -> LaunchError {
    LaunchError::Wait {
        interpreter: interpreter.to_path_buf(),
        source,
    }
}

#[cfg(unix)]
mod signals {
    use std::{io, process::ExitStatus};

    use tokio::{
        process::Child,
        signal::unix::{signal, Signal, SignalKind},
    };
    use tracing::{debug, warn};

    /// Keeps the launcher alive until its child exits, passing termination requests on.
    pub struct SignalRelay {
        interrupt: Signal,
        terminate: Signal,
        hangup: Signal,
    }

    impl SignalRelay {
        pub fn install() -> Option<Self> {
            let installed = (|| -> io::Result<Self> {
                Ok(Self {
                    interrupt: signal(SignalKind::interrupt())?,
                    terminate: signal(SignalKind::terminate())?,
                    hangup: signal(SignalKind::hangup())?,
                })
            })();
            match installed {
                Ok(relay) => Some(relay),
                Err(err) => {
                    warn!(
                        target: "app_launcher::launch",
                        reason = %err,
                        "Signal forwarding unavailable; waiting without it"
                    );
                    None
                }
            }
        }

        pub async fn wait(mut self, child: &mut super::Child) -> io::Result<ExitStatus> {
            loop {
                let forwarded = tokio::select! {
                    status = child.wait() => return status,
                    _ = self.interrupt.recv() => {
                        // The terminal already delivered SIGINT to the child's process group.
                        debug!(
                            target: "app_launcher::launch",
                            "SIGINT received; waiting for child"
                        );
                        continue;
                    }
                    _ = self.terminate.recv() => libc::SIGTERM,
                    _ = self.hangup.recv() => libc::SIGHUP,
                };
                forward(child, forwarded);
            }
        }
    }

    fn forward(child: &Child, signal: libc::c_int) {
        let Some(pid) = child.id().and_then(|pid| libc::pid_t::try_from(pid).ok()) else {
            return;
        };
        debug!(target: "app_launcher::launch", pid, signal, "Forwarding signal to entry point");
        // SAFETY: kill takes plain integers; pid is our own child, not yet reaped.
        if unsafe { libc::kill(pid, signal) } != 0 {
            warn!(
                target: "app_launcher::launch",
                pid,
                signal,
                reason = %io::Error::last_os_error(),
                "Failed to forward signal"
            );
        }
    }
}

#[cfg(not(unix))]
mod signals {
    use std::{io, process::ExitStatus};

    pub struct SignalRelay;

    impl SignalRelay {
        pub fn install() -> Option<Self> {
            None
        }

        pub async fn wait(self, child: &mut super::Child) -> io::Result<ExitStatus> {
            child.wait().await
        }
    }
}
