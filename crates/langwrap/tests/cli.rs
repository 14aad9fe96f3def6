//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// A command running in a fresh temp directory, so config discovery cannot
/// pick up files from the repository or the developer's machine.
fn cmd_in(dir: &std::path::Path) -> Command {
    let mut c = cmd();
    c.args(["-C", dir.to_str().unwrap()]);
    c
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

// =============================================================================
// Ssml Command
// =============================================================================

#[test]
fn ssml_reads_stdin() {
    let dir = tempfile::tempdir().unwrap();
    cmd_in(dir.path())
        .arg("ssml")
        .write_stdin("рус eng")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "рус <lang xml:lang=\"en-US\">eng</lang>\n",
        ));
}

#[test]
fn ssml_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("input.txt");
    std::fs::write(&file, "текст text").unwrap();

    cmd_in(dir.path())
        .args(["ssml", "input.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<lang xml:lang=\"en-US\">text</lang>"));
}

#[test]
fn ssml_latin_free_text_is_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    cmd_in(dir.path())
        .arg("ssml")
        .write_stdin("123")
        .assert()
        .success()
        .stdout(predicate::str::diff("123\n"));
}

#[test]
fn ssml_country_flag_changes_lang() {
    let dir = tempfile::tempdir().unwrap();
    cmd_in(dir.path())
        .args(["ssml", "--country", "uk"])
        .write_stdin("eng")
        .assert()
        .success()
        .stdout(predicate::str::contains("en-UK"));
}

#[test]
fn ssml_rate_and_volume_flags_nest() {
    let dir = tempfile::tempdir().unwrap();
    cmd_in(dir.path())
        .args(["ssml", "--rate", "x-slow", "--volume", "loud"])
        .write_stdin("eng")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "<lang xml:lang=\"en-US\"><prosody volume=\"loud\"><prosody rate=\"x-slow\">\
             eng</prosody></prosody></lang>\n",
        ));
}

#[test]
fn ssml_global_volume_wraps_output() {
    let dir = tempfile::tempdir().unwrap();
    cmd_in(dir.path())
        .args(["ssml", "--global-volume", "soft"])
        .write_stdin("рус")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "<prosody volume=\"soft\">рус</prosody>\n",
        ));
}

#[test]
fn ssml_invalid_flag_value_fails() {
    let dir = tempfile::tempdir().unwrap();
    cmd_in(dir.path())
        .args(["ssml", "--country", "ru"])
        .write_stdin("eng")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn ssml_json_output_is_valid() {
    let dir = tempfile::tempdir().unwrap();
    let output = cmd_in(dir.path())
        .args(["--json", "ssml"])
        .write_stdin("eng")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("ssml --json should output valid JSON");
    assert_eq!(json["ssml"], "<lang xml:lang=\"en-US\">eng</lang>");
}

#[test]
fn ssml_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    cmd_in(dir.path())
        .args(["ssml", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Speak Command
// =============================================================================

#[test]
fn speak_wraps_in_speak_tags() {
    let dir = tempfile::tempdir().unwrap();
    cmd_in(dir.path())
        .arg("speak")
        .write_stdin("рус eng")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "<speak>рус <lang xml:lang=\"en-US\">eng</lang></speak>\n",
        ));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn project_config_file_is_discovered() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".langwrap.toml"), "country = \"uk\"\n").unwrap();

    cmd_in(dir.path())
        .arg("ssml")
        .write_stdin("eng")
        .assert()
        .success()
        .stdout(predicate::str::contains("en-UK"));
}

#[test]
fn flag_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".langwrap.toml"), "country = \"uk\"\n").unwrap();

    cmd_in(dir.path())
        .args(["ssml", "--country", "us"])
        .write_stdin("eng")
        .assert()
        .success()
        .stdout(predicate::str::contains("en-US"));
}

#[test]
fn explicit_config_flag_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("voice.toml");
    std::fs::write(&config_path, "global_volume = \"x-loud\"\n").unwrap();

    cmd_in(dir.path())
        .args(["--config", "voice.toml", "ssml"])
        .write_stdin("рус")
        .assert()
        .success()
        .stdout(predicate::str::contains("<prosody volume=\"x-loud\">"));
}

#[test]
fn env_variable_sets_defaults() {
    let dir = tempfile::tempdir().unwrap();
    cmd_in(dir.path())
        .env("LANGWRAP_COUNTRY", "uk")
        .arg("ssml")
        .write_stdin("eng")
        .assert()
        .success()
        .stdout(predicate::str::contains("en-UK"));
}

#[test]
fn invalid_config_value_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".langwrap.toml"), "country = \"ru\"\n").unwrap();

    cmd_in(dir.path())
        .arg("ssml")
        .write_stdin("eng")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    let dir = tempfile::tempdir().unwrap();
    cmd_in(dir.path())
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = cmd_in(dir.path()).args(["info", "--json"]).assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
