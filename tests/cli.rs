use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".surf").join("config.json")
}

const BINARY_NAME: &str = "surf";

#[test]
/// Help command should list the subcommands.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("start"))
        .stdout(contains("timeline"))
        .stdout(contains("reset-config"));
}

#[test]
/// Reset command should delete an existing config file.
fn reset_config_deletes_config_file() {
    let tmp = temp_home();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset-config")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Configuration reset"));

    assert!(!config_path.exists());
}

#[test]
/// Reset without a config file is not an error.
fn reset_config_without_file_succeeds() {
    let tmp = temp_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset-config")
        .env("HOME", tmp.path())
        .assert()
        .success();
}

#[test]
/// Timeline runs headless until the loading gate opens.
fn timeline_prints_gate_opening() {
    let tmp = temp_home();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["timeline", "--splash-ms", "300"])
        .env("HOME", tmp.path())
        .env("RUST_LOG", "info")
        .assert()
        .success()
        .stdout(contains("Starting headless mode"))
        .stdout(contains("Loading gate opened"))
        .stdout(contains("exited successfully"));
}

#[test]
/// A broken config file falls back to defaults with a warning.
fn timeline_survives_invalid_config() {
    let tmp = temp_home();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "not json").unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["timeline", "--splash-ms", "100"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stderr(contains("[WARN]"));
}
