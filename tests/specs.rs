//! Behavioral specifications for the shoal CLI.
//!
//! These tests are black-box: they invoke the built binary and verify
//! stdout, stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// cli/
#[path = "specs/cli/concurrent.rs"]
mod cli_concurrent;
#[path = "specs/cli/errors.rs"]
mod cli_errors;
#[path = "specs/cli/modes.rs"]
mod cli_modes;
#[path = "specs/cli/sequential.rs"]
mod cli_sequential;
