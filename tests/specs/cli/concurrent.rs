//! Concurrent runner specs: isolation, aggregation, no cancellation.

use crate::prelude::*;

#[test]
fn concurrent_scripts_all_run() {
    let dir = test_dir();
    let a = script(&dir, "a.sh", "echo alpha\n");
    let b = script(&dir, "b.sh", "echo beta\n");

    // Output order between siblings is unspecified.
    cli()
        .args(&["-a", &a, "-a", &b])
        .passes()
        .stdout_has("alpha")
        .stdout_has("beta");
}

#[test]
fn comma_separated_list_is_equivalent_to_repeats() {
    let dir = test_dir();
    let a = script(&dir, "a.sh", "echo alpha\n");
    let b = script(&dir, "b.sh", "echo beta\n");

    cli()
        .args(&["-a", &format!("{a},{b}")])
        .passes()
        .stdout_has("alpha")
        .stdout_has("beta");
}

#[test]
fn siblings_never_observe_each_others_variables() {
    let dir = test_dir();
    let setter = script(&dir, "setter.sh", "X=1\n");
    let reader = script(&dir, "reader.sh", "echo sibling:$X\n");

    cli()
        .args(&["-a", &setter, "-a", &reader])
        .passes()
        .stdout_has("sibling:")
        .stdout_lacks("sibling:1");
}

#[test]
fn sequential_scripts_run_before_the_concurrent_set() {
    let dir = test_dir();
    let seq = script(&dir, "seq.sh", "echo sequential\n");
    let conc = script(&dir, "conc.sh", "echo concurrent\n");

    cli()
        .args(&[&seq, "-a", &conc])
        .passes()
        .stdout_eq("sequential\nconcurrent\n");
}

#[test]
fn every_failure_is_aggregated() {
    let dir = test_dir();
    let bad_exit = script(&dir, "bad_exit.sh", "exit 3\n");
    let bad_syntax = script(&dir, "bad_syntax.sh", "echo | |\n");

    // Two failures, one line each (plus the report prefix on the first
    // line); the exit-status signal does not survive aggregation, so
    // the process exits with the generic failure code.
    cli()
        .args(&["-a", &bad_exit, "-a", &bad_syntax])
        .exits(1)
        .stderr_lines(2)
        .stderr_has("exit 3")
        .stderr_has("unexpected token");
}

#[test]
fn a_single_concurrent_exit_status_is_still_generic() {
    let dir = test_dir();
    let bad_exit = script(&dir, "bad_exit.sh", "exit 3\n");
    cli().args(&["-a", &bad_exit]).exits(1);
}

#[test]
fn a_failing_sibling_cancels_nothing() {
    let dir = test_dir();
    let failing = script(&dir, "failing.sh", "false\n");
    let marker = dir.path().join("completed");
    let working = script(&dir, "working.sh", &format!("mkdir {}\n", marker.display()));

    cli().args(&["-a", &failing, "-a", &working]).exits(1);
    assert!(marker.exists(), "sibling must run to completion");
}

#[test]
fn all_successes_aggregate_to_success() {
    let dir = test_dir();
    let a = script(&dir, "a.sh", "true\n");
    let b = script(&dir, "b.sh", "X=1\n");
    cli().args(&["-a", &a, "-a", &b]).passes().stderr_empty();
}
