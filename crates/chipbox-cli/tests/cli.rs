use std::fs;
use std::process::Output;

use assert_cmd::Command;
use tempfile::tempdir;

fn run(args: &[&str]) -> Output {
    Command::cargo_bin("chipbox-presets")
        .unwrap()
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn resolves_stock_handle() {
    let output = run(&["resolve", "64"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Square Wave"));
}

#[test]
fn finds_handle_by_name() {
    let output = run(&["find", "Shocker Bass"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("192"));
}

#[test]
fn unknown_handle_exits_with_failure() {
    let output = run(&["resolve", "4095"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("no matching preset"));
}

#[test]
fn exported_catalog_can_be_loaded_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let path_arg = path.to_str().unwrap();

    assert!(run(&["export", "--out", path_arg]).status.success());
    assert!(fs::metadata(&path).unwrap().len() > 0);

    let output = run(&["--catalog", path_arg, "find", "A4 Hi-Hat"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("A4 Hi-Hat"));
}

#[test]
fn toggles_details_alert() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("editor.json");
    let path_arg = path.to_str().unwrap();

    assert!(run(&["--settings", path_arg, "settings", "details-alert", "off"])
        .status
        .success());
    let saved = fs::read_to_string(&path).unwrap();
    assert!(saved.contains("\"showSongDetailsAlert\": false"), "{saved}");
}

#[cfg(target_os = "linux")]
#[test]
fn settings_default_to_user_config_dir() {
    let dir = tempdir().unwrap();
    let status = Command::cargo_bin("chipbox-presets")
        .unwrap()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["settings", "details-alert", "off"])
        .output()
        .unwrap()
        .status;
    assert!(status.success());

    let saved = fs::read_to_string(dir.path().join("ChipBox").join("editor.json")).unwrap();
    assert!(saved.contains("\"showSongDetailsAlert\": false"), "{saved}");
}

#[test]
fn shows_version_and_release_notes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("editor.json");
    let output = run(&["--settings", path.to_str().unwrap(), "settings", "show"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("ChipBox 1.6"), "{text}");
    assert!(text.contains("patch_notes.html"), "{text}");
    assert!(!text.contains("customSamples"), "{text}");
}
