//! CLI binary smoke tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("campo").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("gradient"));
}

// ---------------------------------------------------------------------------
// demo
// ---------------------------------------------------------------------------

#[test]
fn demo_runs_float_and_int_fields() {
    cmd()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("| 10 | 8 | 5 |"))
        .stdout(predicate::str::contains("2.375"))
        .stdout(predicate::str::contains("99.9"))
        .stdout(predicate::str::contains("| 10 | 11 | 12 | 13 |"))
        .stdout(predicate::str::contains("): 5 units"));
}

#[test]
fn demo_rejects_unknown_element() {
    cmd()
        .args(["demo", "--element", "complex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown element type"));
}

// ---------------------------------------------------------------------------
// gradient
// ---------------------------------------------------------------------------

#[test]
fn gradient_of_whole_grid() {
    cmd()
        .args(["gradient", "-s", "3x3", "-v", "10,8,5,12,9,6,15,11,7"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("2.375\n"));
}

#[test]
fn gradient_thin_region_prints_zero() {
    cmd()
        .args(["gradient", "-s", "2x2", "-v", "1,2,3,4", "-r", "0:1,0:2", "-e", "i32"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("0\n"));
}

#[test]
fn gradient_invalid_region_fails() {
    cmd()
        .args(["gradient", "-s", "2x2", "-v", "1,2,3,4", "-r", "0:3,0:2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid region"));
}

#[test]
fn gradient_shape_mismatch_fails() {
    cmd()
        .args(["gradient", "-s", "2x2", "-v", "1,2,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to build grid"));
}

#[test]
fn gradient_oversized_shape_reports_error() {
    cmd()
        .args(["gradient", "-s", "9223372036854775808x2", "-v", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid dimensions"))
        .stderr(predicate::str::contains("panicked").not());
}
