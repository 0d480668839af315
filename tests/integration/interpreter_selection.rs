use std::fs;

use tempfile::tempdir;

use crate::common::{
    app_dir, fake_interpreter, interpreter_log, launcher, run, stderr, INTERPRETER_VAR,
};

#[test]
fn explicit_interpreter_is_used_without_probing() {
    let app = app_dir("exit 0\n");
    let bin = tempdir().expect("can create bin directory");
    let venv = tempdir().expect("can create venv directory");
    fake_interpreter(bin.path(), "python3");
    let explicit = fake_interpreter(venv.path(), "venv-python");

    let mut command = launcher(app.path(), bin.path());
    command.env(INTERPRETER_VAR, &explicit);
    let output = run(command);

    assert!(output.status.success(), "{output:?}");
    assert_eq!(interpreter_log(app.path()), "venv-python\n");
}

#[test]
fn explicit_interpreter_works_with_empty_path() {
    let app = app_dir("exit 0\n");
    let empty = tempdir().expect("can create empty directory");
    let venv = tempdir().expect("can create venv directory");
    let explicit = fake_interpreter(venv.path(), "venv-python");

    let mut command = launcher(app.path(), empty.path());
    command.env(INTERPRETER_VAR, &explicit);
    let output = run(command);

    assert!(output.status.success(), "{output:?}");
    assert_eq!(interpreter_log(app.path()), "venv-python\n");
}

#[test]
fn cli_interpreter_overrides_environment() {
    let app = app_dir("exit 0\n");
    let bin = tempdir().expect("can create bin directory");
    let from_env = fake_interpreter(bin.path(), "env-python");
    let from_cli = fake_interpreter(bin.path(), "cli-python");

    let mut command = launcher(app.path(), bin.path());
    command
        .env(INTERPRETER_VAR, &from_env)
        .arg("--interpreter")
        .arg(&from_cli);
    let output = run(command);

    assert!(output.status.success(), "{output:?}");
    assert_eq!(interpreter_log(app.path()), "cli-python\n");
}

#[test]
fn probing_prefers_first_candidate() {
    let app = app_dir("exit 0\n");
    let bin = tempdir().expect("can create bin directory");
    fake_interpreter(bin.path(), "python");
    fake_interpreter(bin.path(), "python3");

    let output = run(launcher(app.path(), bin.path()));

    assert!(output.status.success(), "{output:?}");
    assert_eq!(interpreter_log(app.path()), "python3\n");
}

#[test]
fn probing_falls_back_to_later_candidate() {
    let app = app_dir("exit 0\n");
    let bin = tempdir().expect("can create bin directory");
    fake_interpreter(bin.path(), "python");

    let output = run(launcher(app.path(), bin.path()));

    assert!(output.status.success(), "{output:?}");
    assert_eq!(interpreter_log(app.path()), "python\n");
}

#[test]
fn missing_interpreter_is_reported_without_running_entry_point() {
    let app = app_dir("echo ran > ran.txt\n");
    let empty = tempdir().expect("can create empty directory");

    let output = run(launcher(app.path(), empty.path()));

    assert_eq!(output.status.code(), Some(3), "{output:?}");
    let message = stderr(&output);
    assert!(message.contains("No interpreter found"), "stderr: {message}");
    assert!(message.contains("python3, python"), "stderr: {message}");
    assert!(!app.path().join("ran.txt").exists());
}

#[test]
fn explicit_policy_without_interpreter_fails() {
    let app = app_dir("exit 0\n");
    let bin = tempdir().expect("can create bin directory");
    fake_interpreter(bin.path(), "python3");

    let mut command = launcher(app.path(), bin.path());
    command.args(["--policy", "explicit"]);
    let output = run(command);

    assert_eq!(output.status.code(), Some(3), "{output:?}");
    assert!(stderr(&output).contains(INTERPRETER_VAR));
    assert_eq!(interpreter_log(app.path()), "");
}

#[test]
fn missing_explicit_interpreter_exits_127() {
    let app = app_dir("exit 0\n");
    let empty = tempdir().expect("can create empty directory");

    let mut command = launcher(app.path(), empty.path());
    command.env(INTERPRETER_VAR, empty.path().join("no-such-python"));
    let output = run(command);

    assert_eq!(output.status.code(), Some(127), "{output:?}");
}

#[test]
fn config_file_changes_candidates() {
    let app = app_dir("exit 0\n");
    let bin = tempdir().expect("can create bin directory");
    fake_interpreter(bin.path(), "python3");
    fake_interpreter(bin.path(), "python3.12");
    let config_dir = tempdir().expect("can create config directory");
    let config_path = config_dir.path().join("launcher.toml");
    fs::write(
        &config_path,
        "[launcher]\ncandidates = [\"python3.12\", \"python3\"]\n",
    )
    .expect("can write config");

    let mut command = launcher(app.path(), bin.path());
    command.env("APP_LAUNCHER_CONFIG", &config_path);
    let output = run(command);

    assert!(output.status.success(), "{output:?}");
    assert_eq!(interpreter_log(app.path()), "python3.12\n");
}
