//! Execution-mode selection specs.
//!
//! Interactive mode needs a terminal stdin and is covered by the
//! in-crate state-machine tests; everything here runs with a pipe.

use crate::prelude::*;

#[test]
fn help_shows_usage() {
    cli().args(&["--help"]).passes().stdout_has("Usage:");
}

#[test]
fn version_prints_the_package_version() {
    cli().args(&["--version"]).passes().stdout_has("shoal");
}

#[test]
fn no_arguments_with_closed_stdin_runs_an_empty_script() {
    cli().passes().stdout_eq("").stderr_empty();
}

#[test]
fn piped_stdin_executes_as_one_script() {
    cli()
        .stdin("GREETING=hello; echo $GREETING world\n")
        .passes()
        .stdout_eq("hello world\n");
}

#[test]
fn stdin_script_controls_the_exit_status() {
    cli().stdin("exit 4\n").exits(4).stderr_empty();
}

#[test]
fn stdin_script_spans_multiple_lines() {
    cli()
        .stdin("echo 'first\nsecond'\n")
        .passes()
        .stdout_eq("first\nsecond\n");
}

#[test]
fn inline_command_takes_priority_over_stdin() {
    cli()
        .args(&["-c", "echo inline"])
        .stdin("echo piped\n")
        .passes()
        .stdout_eq("inline\n");
}
