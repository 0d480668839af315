use std::fs;

use tempfile::tempdir;

use crate::common::{app_dir, fake_interpreter, interpreter_log, launcher, run, stderr};

#[test]
fn entry_point_runs_inside_working_directory() {
    let app = app_dir("pwd -P > cwd.txt\n");
    let bin = tempdir().expect("can create bin directory");
    fake_interpreter(bin.path(), "python3");

    let output = run(launcher(app.path(), bin.path()));

    assert!(output.status.success(), "{output:?}");
    let recorded = fs::read_to_string(app.path().join("cwd.txt")).expect("cwd.txt written");
    let expected = app.path().canonicalize().expect("app dir canonicalizes");
    assert_eq!(recorded.trim_end(), expected.to_string_lossy());
}

#[test]
fn missing_directory_fails_before_interpreter_resolution() {
    let parent = tempdir().expect("can create parent directory");
    let missing = parent.path().join("gone");
    let empty = tempdir().expect("can create empty directory");

    // No interpreter is available either; a directory failure must win.
    let output = run(launcher(&missing, empty.path()));

    assert_eq!(output.status.code(), Some(1), "{output:?}");
    let message = stderr(&output);
    assert!(message.contains("Cannot enter working directory"), "stderr: {message}");
    assert!(!message.contains("No interpreter found"), "stderr: {message}");
}

#[test]
fn unset_directory_names_the_variable() {
    let bin = tempdir().expect("can create bin directory");
    fake_interpreter(bin.path(), "python3");

    let mut command = launcher(bin.path(), bin.path());
    command.env_remove("SYFTBOX_APP_DIR");
    let output = run(command);

    assert_eq!(output.status.code(), Some(1), "{output:?}");
    assert!(stderr(&output).contains("SYFTBOX_APP_DIR"));
}

#[test]
fn app_dir_flag_overrides_environment() {
    let app = app_dir("exit 0\n");
    let decoy = app_dir("exit 9\n");
    let bin = tempdir().expect("can create bin directory");
    fake_interpreter(bin.path(), "python3");

    let mut command = launcher(decoy.path(), bin.path());
    command.arg("--app-dir").arg(app.path());
    let output = run(command);

    assert!(output.status.success(), "{output:?}");
    assert_eq!(interpreter_log(app.path()), "python3\n");
    assert_eq!(interpreter_log(decoy.path()), "");
}
