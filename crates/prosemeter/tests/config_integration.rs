//! Quality gates and input limits driven by configuration.
//!
//! Each test writes a config file (or sets `PROSEMETER_*`) in a scratch
//! directory, then runs `analyze` or `readability` there and checks that the
//! setting changed the outcome. Loader mechanics are unit-tested in
//! `prosemeter-core`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PLAIN: &str = "The cat sat. The cat ran.";
const DENSE: &str = "Institutional reconceptualization necessitates comprehensive \
                     interdepartmental collaboration regarding organizational infrastructure.";

#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("PROSEMETER_LOG_DIR")
        .env_remove("PROSEMETER_LOG_PATH");
    cmd
}

/// Scratch project with one document and one config file.
fn project(config_name: &str, config: &str, doc: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(config_name), config).unwrap();
    fs::write(tmp.path().join("doc.txt"), doc).unwrap();
    tmp
}

fn run_in(dir: &Path, args: &[&str]) -> Command {
    let mut c = cmd();
    c.arg("-C").arg(dir).args(args);
    c
}

// =============================================================================
// analyze: min_overall_score
// =============================================================================

#[test]
fn min_overall_score_from_toml_fails_analyze() {
    let tmp = project(".prosemeter.toml", "min_overall_score = 99\n", PLAIN);

    run_in(tmp.path(), &["analyze", "doc.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("below minimum 99"))
        .stderr(predicate::str::contains("doc.txt (51)"));
}

#[test]
fn min_overall_score_below_document_score_passes() {
    let tmp = project("prosemeter.yaml", "min_overall_score: 40\n", PLAIN);

    run_in(tmp.path(), &["analyze", "doc.txt", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"overall_score\": 51"));
}

#[test]
fn min_score_flag_overrides_configured_gate() {
    let tmp = project(".prosemeter.toml", "min_overall_score = 99\n", PLAIN);

    run_in(tmp.path(), &["analyze", "doc.txt", "--min-score", "10"])
        .assert()
        .success();
}

#[test]
fn gate_in_parent_directory_applies_to_nested_run() {
    let tmp = project(".prosemeter.toml", "min_overall_score = 99\n", PLAIN);
    let nested = tmp.path().join("chapters");
    fs::create_dir(&nested).unwrap();
    fs::write(nested.join("one.txt"), PLAIN).unwrap();

    run_in(&nested, &["analyze", "one.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("below minimum 99"));
}

#[test]
fn gate_beyond_git_boundary_is_ignored() {
    let tmp = project(".prosemeter.toml", "min_overall_score = 99\n", PLAIN);
    let repo = tmp.path().join("repo");
    fs::create_dir_all(repo.join(".git")).unwrap();
    fs::write(repo.join("doc.txt"), PLAIN).unwrap();

    run_in(&repo, &["analyze", "doc.txt"]).assert().success();
}

#[test]
fn explicit_config_gate_replaces_discovered_one() {
    let tmp = project(".prosemeter.toml", "min_overall_score = 10\n", PLAIN);
    let strict = tmp.path().join("strict.json");
    fs::write(&strict, r#"{"min_overall_score": 90}"#).unwrap();

    run_in(tmp.path(), &["--config", strict.to_str().unwrap(), "analyze", "doc.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("below minimum 90"));
}

#[test]
fn env_gate_overrides_project_config() {
    let tmp = project(".prosemeter.toml", "min_overall_score = 10\n", PLAIN);

    run_in(tmp.path(), &["analyze", "doc.txt"])
        .env("PROSEMETER_MIN_OVERALL_SCORE", "95")
        .assert()
        .failure()
        .stderr(predicate::str::contains("below minimum 95"));
}

// =============================================================================
// readability: max_grade and min_readability
// =============================================================================

#[test]
fn max_grade_from_yaml_fails_dense_text() {
    let tmp = project(".prosemeter.yaml", "max_grade: 8.0\n", DENSE);

    run_in(tmp.path(), &["readability", "doc.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds maximum 8.0"));
}

#[test]
fn max_grade_env_override_lets_dense_text_pass() {
    let tmp = project(".prosemeter.yaml", "max_grade: 8.0\n", DENSE);

    run_in(tmp.path(), &["readability", "doc.txt", "--json"])
        .env("PROSEMETER_MAX_GRADE", "99.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"max_grade\": 99.0"))
        .stdout(predicate::str::contains("\"pass\": true"));
}

#[test]
fn min_readability_from_json_fails_hard_text() {
    let tmp = project("prosemeter.json", r#"{"min_readability": 60.0}"#, DENSE);

    run_in(tmp.path(), &["readability", "doc.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("below minimum 60.0"));
}

#[test]
fn configured_gates_pass_plain_text() {
    let tmp = project(
        ".prosemeter.toml",
        "max_grade = 8.0\nmin_readability = 60.0\n",
        PLAIN,
    );

    run_in(tmp.path(), &["--color", "never", "readability", "doc.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS: doc.txt"));
}

#[test]
fn max_grade_flag_overrides_configured_gate() {
    let tmp = project(".prosemeter.toml", "max_grade = 8.0\n", DENSE);

    run_in(tmp.path(), &["readability", "doc.txt", "--max-grade", "99"])
        .assert()
        .success();
}

// =============================================================================
// Input limit: max_input_bytes and disable_input_limit
// =============================================================================

#[test]
fn max_input_bytes_rejects_large_file() {
    let tmp = project(".prosemeter.toml", "max_input_bytes = 16\n", PLAIN);

    run_in(tmp.path(), &["readability", "doc.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"))
        .stderr(predicate::str::contains("limit: 16 bytes"));
}

#[test]
fn max_input_bytes_rejects_large_stdin() {
    let tmp = project(".prosemeter.toml", "max_input_bytes = 16\n", PLAIN);

    run_in(tmp.path(), &["analyze", "-"])
        .write_stdin(PLAIN)
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn disable_input_limit_accepts_large_file() {
    let tmp = project(
        ".prosemeter.toml",
        "max_input_bytes = 16\ndisable_input_limit = true\n",
        PLAIN,
    );

    run_in(tmp.path(), &["analyze", "doc.txt", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"word_count\": 6"));
}

#[test]
fn max_input_bytes_env_override() {
    let tmp = project(".prosemeter.toml", "max_input_bytes = 1000\n", PLAIN);

    run_in(tmp.path(), &["analyze", "doc.txt"])
        .env("PROSEMETER_MAX_INPUT_BYTES", "8")
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit: 8 bytes"));
}

// =============================================================================
// Logging level
// =============================================================================

#[test]
fn configured_error_level_hides_debug_events() {
    let tmp = project(".prosemeter.toml", "log_level = \"error\"\n", PLAIN);

    run_in(tmp.path(), &["analyze", "doc.txt", "--json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("document analyzed").not());
}

#[test]
fn log_level_flag_overrides_configured_level() {
    let tmp = project(".prosemeter.toml", "log_level = \"error\"\n", PLAIN);

    run_in(tmp.path(), &["analyze", "doc.txt", "--json", "--log-level", "debug"])
        .assert()
        .success()
        .stderr(predicate::str::contains("document analyzed"));
}

#[test]
fn verbose_steps_up_from_configured_level() {
    let info = project(".prosemeter.toml", "log_level = \"info\"\n", PLAIN);
    run_in(info.path(), &["-v", "analyze", "doc.txt", "--json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("document analyzed"));

    let error = project(".prosemeter.toml", "log_level = \"error\"\n", PLAIN);
    run_in(error.path(), &["-v", "analyze", "doc.txt", "--json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("document analyzed").not());
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn malformed_config_stops_analysis() {
    let tmp = project(".prosemeter.toml", "min_overall_score = [[[", PLAIN);

    run_in(tmp.path(), &["analyze", "doc.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn wrongly_typed_gate_is_rejected() {
    let tmp = project("prosemeter.yaml", "max_grade: very hard\n", PLAIN);

    run_in(tmp.path(), &["readability", "doc.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}
