use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn suitelint() -> Command {
    Command::cargo_bin("suitelint").expect("bin")
}

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    path
}

const CLEAN: &str = "class TestSuite:\n    def test_ok(self) -> None:\n        log.info(\"fine\")\n";
const DIRTY: &str =
    "class TestSuite:\n    def test_bad(self) -> None:\n        log.warning(\"issue\")\n";

#[test]
fn no_arguments_is_a_usage_error() {
    suitelint()
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("usage: suitelint"));
}

#[test]
fn clean_file_exits_zero_with_success_glyph() {
    let dir = tempfile::tempdir().unwrap();
    let clean = write_file(&dir, "clean.py", CLEAN);

    suitelint()
        .arg(&clean)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicates::str::contains("✓ no convention violations found"));
}

#[test]
fn violation_exits_one_with_report_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let dirty = write_file(&dir, "dirty.py", DIRTY);

    suitelint()
        .arg(&dirty)
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stdout(predicates::str::contains("TestSuite.test_bad"))
        .stdout(predicates::str::contains("log.warning()"))
        .stdout(predicates::str::contains("Test conventions:"));
}

#[test]
fn missing_file_is_skipped_without_failing() {
    let dir = tempfile::tempdir().unwrap();
    let clean = write_file(&dir, "clean.py", CLEAN);
    let ghost = dir.path().join("ghost.py");

    suitelint()
        .arg(&ghost)
        .arg(&clean)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicates::str::contains("skipped (not found)"));
}

#[test]
fn tool_rule_reports_the_matched_wrapper() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(
        &dir,
        "net.py",
        "class TestSuite:\n    def test_net(self) -> None:\n        node.execute(\"ip addr show\")\n",
    );

    suitelint()
        .arg(&file)
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stdout(predicates::str::contains("use tool Ip instead"));
}

#[test]
fn rule_flag_narrows_the_check() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(
        &dir,
        "both.py",
        "class TestSuite:\n    def test_both(self) -> None:\n        log.warning(\"x\")\n        node.execute(\"ip addr show\")\n",
    );

    // Only the logging rule runs, so the tool violation disappears.
    suitelint()
        .arg(&file)
        .args(["--rule", "logging", "--no-color"])
        .assert()
        .failure()
        .stdout(predicates::str::contains("log.warning()"))
        .stdout(predicates::str::contains("use tool").not());
}

#[test]
fn json_format_emits_machine_readable_report() {
    let dir = tempfile::tempdir().unwrap();
    let dirty = write_file(&dir, "dirty.py", DIRTY);

    let output = suitelint()
        .arg(&dirty)
        .args(["--format", "json"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["violations"][0]["context"], "TestSuite.test_bad");
    assert_eq!(value["violations"][0]["payload"]["rule"], "log_warning");
}

#[test]
fn custom_marker_flag_extends_the_recognized_set() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(
        &dir,
        "marked.py",
        "@CaseMetadata(priority=1)\ndef _probe() -> None:\n    log.warning(\"x\")\n",
    );

    // Without the marker the underscore name exempts the function.
    suitelint().arg(&file).assert().success();

    suitelint()
        .arg(&file)
        .args(["--marker", "CaseMetadata"])
        .assert()
        .failure()
        .code(1);
}
