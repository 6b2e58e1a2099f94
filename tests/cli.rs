//! Integration tests for the flagutil binary

use assert_cmd::Command;
use predicates::prelude::*;

fn flagutil() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("flagutil"))
}

#[test]
fn test_cli_help() {
    flagutil()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("usage"));
}

#[test]
fn test_check_merges_config() {
    flagutil()
        .args([
            "check",
            "--flags",
            "tests/data/flags.json",
            "--config",
            "tests/data/config.json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1m39s"))
        .stdout(predicate::str::contains("a string"))
        .stdout(predicate::str::contains("Applied 5 config values to 'test'"));
}

#[test]
fn test_check_strict_rejects_unknown_key() {
    flagutil()
        .args([
            "check",
            "--flags",
            "tests/data/flags.json",
            "--config",
            "tests/data/unknown.json",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: unknown flag 'unknown'"));
}

#[test]
fn test_check_lenient_skips_unknown_key() {
    flagutil()
        .args([
            "check",
            "--flags",
            "tests/data/flags.toml",
            "--config",
            "tests/data/unknown.json",
            "--lenient",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied 0 config values"))
        .stdout(predicate::str::contains("1 skipped"));
}

#[test]
fn test_check_reports_conversion_error() {
    flagutil()
        .args([
            "check",
            "--flags",
            "tests/data/flags.yaml",
            "--config",
            "tests/data/bad_value.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "error: invalid value 'notabool' for flag 'testbool'",
        ));
}

#[test]
fn test_check_applies_overrides_after_config() {
    flagutil()
        .args([
            "check",
            "--flags",
            "tests/data/flags.json",
            "--config",
            "tests/data/config.json",
            "--set",
            "testint=7",
            "--set",
            "teststring=from the command line",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("from the command line"))
        .stdout(predicate::str::contains("2 overrides"));
}

#[test]
fn test_check_bad_override_prints_usage() {
    flagutil()
        .args(["check", "--flags", "tests/data/flags.json", "--set", "testint"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "error: invalid override 'testint': expected NAME=VALUE",
        ))
        .stdout(predicate::str::contains("Flags accepted by --set for 'test':"))
        .stdout(predicate::str::contains("--testint=0"));
}

#[test]
fn test_check_quiet_prints_nothing() {
    flagutil()
        .args([
            "check",
            "--flags",
            "tests/data/flags.json",
            "--config",
            "tests/data/config.json",
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_usage_prints_preamble_table_and_postamble() {
    flagutil()
        .args([
            "usage",
            "--flags",
            "tests/data/flags.json",
            "--width",
            "60",
            "--preamble",
            "Usage: demo [flags]",
            "--postamble",
            "Bye.",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Usage: demo [flags]\n\n"))
        .stdout(predicate::str::contains(
            "  -b, --testbool=false test bool\n",
        ))
        .stdout(predicate::str::ends_with("\nBye.\n"));
}

#[test]
fn test_usage_missing_declarations_fails() {
    flagutil()
        .args(["usage", "--flags", "tests/data/nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: File error: failed to open file"));
}
