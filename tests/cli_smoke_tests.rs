mod common;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

const BIN_NAME: &str = "bookkeeper_cli";

fn script_command() -> Command {
    let (home, _config) = common::setup_test_env();
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("BOOKKEEPER_CLI_SCRIPT", "1")
        .env("BOOKKEEPER_HOME", home);
    cmd
}

#[test]
fn cli_help_command_prints_overview() {
    script_command()
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(contains("Available commands").and(contains("inventory")));
}

#[test]
fn cli_help_for_single_command_shows_usage() {
    script_command()
        .write_stdin("help transaction\nexit\n")
        .assert()
        .success()
        .stdout(contains("transaction add <account> <amount> <credit|debit>"));
}

#[test]
fn cli_version_command_prints_version_info() {
    script_command()
        .write_stdin("version\nexit\n")
        .assert()
        .success()
        .stdout(contains("Bookkeeper").and(contains("Build hash")));
}

#[test]
fn cli_suggests_close_commands() {
    script_command()
        .write_stdin("reprot\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `reprot`").and(contains("Suggestion: `report`?")));
}
