use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
    process::{Child, Command, ExitStatus, Output},
    thread,
    time::{Duration, Instant},
};

use tempfile::TempDir;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_app-launcher");
pub const APP_DIR_VAR: &str = "SYFTBOX_APP_DIR";
pub const INTERPRETER_VAR: &str = "SYFTBOX_APP_PYTHON";
/// File each fake interpreter appends its name to, inside the working directory.
pub const INTERPRETER_LOG: &str = "interpreter.log";
/// File a long-running entry point writes once its traps are installed.
pub const READY_MARKER: &str = "ready.txt";
const PROCESS_TIMEOUT: Duration = Duration::from_secs(10);

/// App directory holding a `main.py` written as a shell script.
///
/// The fake interpreters hand `main.py` to `/bin/sh`, so entry points here are shell code
/// restricted to builtins (the launcher runs with a `PATH` of fake interpreters only).
pub fn app_dir(entry_point: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("can create app directory");
    fs::write(dir.path().join("main.py"), entry_point).expect("can write main.py");
    dir
}

/// Executable that appends `name` to [`INTERPRETER_LOG`] in its cwd and runs its arguments
/// with `/bin/sh`.
pub fn fake_interpreter(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let script = format!("#!/bin/sh\necho {name} >> {INTERPRETER_LOG}\nexec /bin/sh \"$@\"\n");
    fs::write(&path, script).expect("can write fake interpreter");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("can chmod");
    path
}

/// Launcher command with a clean environment whose `PATH` is only `search_path`.
pub fn launcher(app_dir: &Path, search_path: &Path) -> Command {
    let mut command = Command::new(BINARY_PATH);
    command
        .env_clear()
        .env("PATH", search_path)
        .env(APP_DIR_VAR, app_dir);
    command
}

/// Run the launcher, retrying when a freshly written fake interpreter is still busy (ETXTBSY).
pub fn run(mut command: Command) -> Output {
    for _ in 0..3 {
        let output = command.output().expect("launcher should start");
        if output.status.code() != Some(126) || !stderr(&output).contains("Text file busy") {
            return output;
        }
    }
    command.output().expect("launcher should start")
}

pub fn interpreter_log(app_dir: &Path) -> String {
    fs::read_to_string(app_dir.join(INTERPRETER_LOG)).unwrap_or_default()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Start the launcher in the background and block until the entry point writes [`READY_MARKER`].
pub fn spawn_until_ready(command: &mut Command, app_dir: &Path) -> Child {
    for _ in 0..3 {
        let mut child = command.spawn().expect("launcher should start");
        let deadline = Instant::now() + PROCESS_TIMEOUT;
        loop {
            if app_dir.join(READY_MARKER).exists() {
                return child;
            }
            if let Some(status) = child.try_wait().expect("can poll launcher") {
                // ETXTBSY on a freshly written fake interpreter; try again.
                assert_eq!(status.code(), Some(126), "launcher exited early: {status:?}");
                break;
            }
            if Instant::now() > deadline {
                let _ = child.kill();
                panic!("entry point never became ready");
            }
            thread::sleep(Duration::from_millis(20));
        }
    }
    panic!("launcher could not start the entry point");
}

/// Wait for the launcher to exit, killing it if it outlives [`PROCESS_TIMEOUT`].
pub fn wait_for_exit(child: &mut Child) -> ExitStatus {
    let deadline = Instant::now() + PROCESS_TIMEOUT;
    loop {
        if let Some(status) = child.try_wait().expect("can poll launcher") {
            return status;
        }
        if Instant::now() > deadline {
            let _ = child.kill();
            panic!("launcher did not exit in time");
        }
        thread::sleep(Duration::from_millis(20));
    }
}

pub fn send_signal(child: &Child, signal: libc::c_int) {
    let pid = libc::pid_t::try_from(child.id()).expect("pid fits in pid_t");
    // SAFETY: kill only takes integers; the launcher has not been reaped yet.
    let result = unsafe { libc::kill(pid, signal) };
    assert_eq!(result, 0, "kill failed: {}", std::io::Error::last_os_error());
}
