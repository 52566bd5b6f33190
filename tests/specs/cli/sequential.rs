//! Sequential runner specs: ordering, fail-fast, session reset.

use crate::prelude::*;

#[test]
fn scripts_run_in_listed_order() {
    let dir = test_dir();
    let first = script(&dir, "first.sh", "echo one\n");
    let second = script(&dir, "second.sh", "echo two\n");

    cli()
        .args(&[&first, &second])
        .passes()
        .stdout_eq("one\ntwo\n");
}

#[test]
fn first_failure_short_circuits_later_scripts() {
    let dir = test_dir();
    let ok = script(&dir, "ok.sh", "echo ran\n");
    let bad = script(&dir, "bad.sh", "no_such_command_shoal_spec\n");
    let marker = dir.path().join("ran-third");
    let never = script(&dir, "never.sh", &format!("mkdir {}\n", marker.display()));

    cli()
        .args(&[&ok, &bad, &never])
        .exits(1)
        .stdout_eq("ran\n")
        .stderr_has("no_such_command_shoal_spec");
    assert!(!marker.exists(), "script after the failure must never run");
}

#[test]
fn variables_persist_within_one_script() {
    let dir = test_dir();
    let path = script(&dir, "vars.sh", "X=5\necho val:$X\n");
    cli().args(&[&path]).passes().stdout_eq("val:5\n");
}

#[test]
fn session_is_reset_between_scripts() {
    // Each full-script run starts from clean interpreter state; only
    // process-external effects carry across.
    let dir = test_dir();
    let set = script(&dir, "set.sh", "X=5\n");
    let read = script(&dir, "read.sh", "echo val:$X\n");
    cli().args(&[&set, &read]).passes().stdout_eq("val:\n");
}

#[test]
fn script_exit_status_propagates() {
    let dir = test_dir();
    let path = script(&dir, "exit.sh", "exit 9\n");
    cli().args(&[&path]).exits(9).stderr_empty();
}

#[test]
fn exit_zero_continues_to_the_next_script() {
    let dir = test_dir();
    let first = script(&dir, "first.sh", "echo one\nexit 0\necho skipped\n");
    let second = script(&dir, "second.sh", "echo two\n");
    cli()
        .args(&[&first, &second])
        .passes()
        .stdout_eq("one\ntwo\n");
}
