use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn appreg(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_appreg"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn list_prints_tab_separated_entries() {
    let output = appreg(&["--builtin", "list"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "bonda\tlocalhost:8000\nvrhorror\tlocalhost:8000\n"
    );
}

#[test]
fn list_json_uses_admin_tool_keys() {
    let output = appreg(&["--builtin", "list", "--json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["appName"], "bonda");
    assert_eq!(value[0]["apiServerURL"], "localhost:8000");
    assert_eq!(value[1]["appName"], "vrhorror");
    assert_eq!(value.as_array().unwrap().len(), 2);
}

#[test]
fn resolve_known_app() {
    let output = appreg(&["--builtin", "resolve", "bonda"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "localhost:8000\n");
}

#[test]
fn resolve_unknown_app_exits_1() {
    let output = appreg(&["--builtin", "resolve", "nonexistent"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown app: nonexistent"));
}

#[test]
fn rust_log_overrides_info_default() {
    let quiet = Command::new(env!("CARGO_BIN_EXE_appreg"))
        .args(["--builtin", "resolve", "bonda"])
        .env("RUST_LOG", "warn")
        .output()
        .unwrap();
    assert!(quiet.status.success());
    assert!(!String::from_utf8(quiet.stderr).unwrap().contains(" INFO "));

    let chatty = appreg(&["--builtin", "resolve", "bonda"]);
    assert!(String::from_utf8(chatty.stderr).unwrap().contains(" INFO "));
}

#[test]
fn explicit_config_is_used() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("apps.toml");
    fs::write(
        &path,
        "[[apps]]\nappName = \"spacetimi\"\napiServerURL = \"10.0.0.5:9000\"\n",
    )
    .unwrap();

    let output = appreg(&["-c", path.to_str().unwrap(), "resolve", "spacetimi"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "10.0.0.5:9000\n");
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("typo.toml");

    let output = appreg(&["-c", path.to_str().unwrap(), "resolve", "vrhorror"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!path.exists());
}
