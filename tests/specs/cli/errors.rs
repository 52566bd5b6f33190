//! Error taxonomy specs: resolution, parse, runtime, exit-status.

use crate::prelude::*;

#[test]
fn inline_exit_status_propagates_with_no_report() {
    cli().args(&["-c", "exit 7"]).exits(7).stderr_empty();
}

#[test]
fn inline_runtime_failure_reports_once_and_exits_one() {
    cli()
        .args(&["-c", "no_such_command_shoal_spec"])
        .exits(1)
        .stderr_lines(1)
        .stderr_has("command not found")
        .stderr_has("no_such_command_shoal_spec");
}

#[test]
fn missing_script_file_is_a_resolution_error() {
    cli()
        .args(&["definitely/not/here.sh"])
        .exits(1)
        .stderr_has("definitely/not/here.sh");
}

#[test]
fn parse_error_names_the_offending_source() {
    let dir = test_dir();
    let path = script(&dir, "broken.sh", "echo 'never closed\n");
    cli()
        .args(&[&path])
        .exits(1)
        .stderr_has("broken.sh")
        .stderr_has("unterminated");
}

#[test]
fn scripts_that_fail_to_parse_never_partially_execute() {
    let dir = test_dir();
    let path = script(&dir, "broken.sh", "echo before\necho 'never closed\n");
    cli().args(&[&path]).exits(1).stdout_eq("");
}

#[test]
fn inline_command_alongside_scripts_is_a_usage_error() {
    let dir = test_dir();
    let path = script(&dir, "a.sh", "true\n");
    cli()
        .args(&["-c", "echo hi", &path])
        .fails()
        .stderr_has("cannot be used with");
}

#[test]
fn inline_command_alongside_concurrent_flag_is_a_usage_error() {
    cli()
        .args(&["-c", "echo hi", "-a", "x.sh"])
        .fails()
        .stderr_has("cannot be used with");
}

#[test]
fn failing_last_command_maps_to_exit_one() {
    cli().args(&["-c", "false"]).exits(1);
}
