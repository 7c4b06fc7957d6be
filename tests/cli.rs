//! End-to-end tests for the passforge binary

use assert_cmd::Command;
use predicates::prelude::*;

fn passforge() -> Command {
    Command::cargo_bin("passforge").unwrap()
}

#[test]
fn test_enumerates_a_two_symbol_square() {
    passforge()
        .args(["2", "AB"])
        .assert()
        .success()
        .stdout("AA\nAB\nBA\nBB\n");
}

#[test]
fn test_little_endian_flag_flips_the_order() {
    passforge()
        .args(["2", "AB", "--little-endian"])
        .assert()
        .success()
        .stdout("AA\nBA\nAB\nBB\n");
}

#[test]
fn test_no_consecutive_flag() {
    passforge()
        .args(["2", "AB", "--no-consecutive"])
        .assert()
        .success()
        .stdout("AB\nBA\n");
}

#[test]
fn test_permutation_flag() {
    passforge()
        .args(["2", "ABC", "--permutation"])
        .assert()
        .success()
        .stdout("AB\nAC\nBA\nBC\nCA\nCB\n");
}

#[test]
fn test_no_repeat_alias() {
    passforge()
        .args(["2", "ABC", "--no-repeat"])
        .assert()
        .success()
        .stdout("AB\nAC\nBA\nBC\nCA\nCB\n");
}

#[test]
fn test_unsatisfiable_permutation_exits_with_code_three() {
    passforge()
        .args(["3", "AB", "--permutation"])
        .assert()
        .failure()
        .code(3)
        .stdout("")
        .stderr(predicate::str::contains("Unsatisfiable"));
}

#[test]
fn test_constraint_flags_conflict() {
    passforge()
        .args(["2", "ABC", "--permutation", "--no-consecutive"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_zero_length_is_a_usage_error() {
    passforge().args(["0", "AB"]).assert().failure().code(2);
}

#[test]
fn test_empty_alphabet_is_rejected() {
    passforge()
        .args(["1", ""])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("alphabet"));
}

#[test]
fn test_skip_and_generate_define_a_window() {
    passforge()
        .args(["-q", "-s", "37", "-g", "3", "3", "0123456789"])
        .assert()
        .success()
        .stdout("037\n038\n039\n");
}

#[test]
fn test_window_runs_out_at_the_end_of_the_keyspace() {
    passforge()
        .args(["-s", "9995", "-g", "10", "4", "0123456789"])
        .assert()
        .success()
        .stdout("9995\n9996\n9997\n9998\n9999\n");
}

#[test]
fn test_scaled_skip_suffix() {
    let assert = passforge().args(["-q", "-s", "1K", "10", "01"]).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    // 2^10 = 1024 candidates, minus the 1000 skipped
    assert_eq!(lines.len(), 24);
    assert_eq!(lines[0], "1111101000"); // 1000 in binary over alphabet "01"
    assert_eq!(lines[23], "1111111111");
}

#[test]
fn test_generate_beyond_the_keyspace_emits_everything() {
    let assert = passforge()
        .args(["-g", "1K", "2", "0123456789"])
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output.lines().count(), 100);
}

#[test]
fn test_malformed_count_is_a_usage_error() {
    passforge().args(["-g", "5X", "2", "AB"]).assert().failure().code(2);
}

#[test]
fn test_overflowing_count_is_a_usage_error() {
    passforge()
        .args(["-g", "2147483648P", "2", "AB"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_missing_arguments_print_usage() {
    passforge()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_version_flag() {
    passforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("passforge"));
}

#[test]
fn test_help_lists_the_knobs() {
    passforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-consecutive"))
        .stdout(predicate::str::contains("--little-endian"))
        .stdout(predicate::str::contains("--generate"));
}
