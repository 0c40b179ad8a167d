//! End-to-end CLI tests driving the built `monkey` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn monkey_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_monkey"))
}

fn write_temp_source(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(name);
    let mut file = std::fs::File::create(&path).expect("create temp source file");
    file.write_all(contents.as_bytes()).expect("write temp source file");
    path
}

#[test]
fn run_evaluates_a_file_and_prints_the_result() {
    let path = write_temp_source(
        "monkey_cli_run_evaluates.monkey",
        "let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));",
    );

    monkey_bin()
        .arg("run")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("20"));
}

#[test]
fn run_reports_parse_errors_and_exits_nonzero() {
    let path = write_temp_source("monkey_cli_run_parse_error.monkey", "let = 5;");

    monkey_bin()
        .arg("run")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected next token to be IDENT"));
}

#[test]
fn run_reports_runtime_errors_and_exits_nonzero() {
    let path = write_temp_source("monkey_cli_run_runtime_error.monkey", "5 + true;");

    monkey_bin()
        .arg("run")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("ERROR: type mismatch: INTEGER + BOOLEAN"));
}

#[test]
fn run_on_missing_file_fails_with_a_clear_message() {
    monkey_bin()
        .arg("run")
        .arg("/nonexistent/path/to/a/file.monkey")
        .assert()
        .failure()
        .stderr(predicate::str::contains("source file not found"));
}

#[test]
fn repl_reads_from_stdin_and_prints_prompts() {
    monkey_bin()
        .arg("repl")
        .write_stdin("let a = 5;\na * 2;\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(">>> "))
        .stdout(predicate::str::contains("10"));
}

#[test]
fn help_mentions_both_subcommands() {
    monkey_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("repl"))
        .stdout(predicate::str::contains("run"));
}
