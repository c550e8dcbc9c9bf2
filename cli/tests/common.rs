//! # pkgkit CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`fs.rs`, `run.rs`, etc.).
//! Each `.rs` file in `cli/tests/` is compiled as a separate test crate that
//! drives the compiled `pkgkit` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// An `assert_cmd::Command` for the `pkgkit` binary built for this test run.
///
/// `RUST_LOG` is cleared so the caller's environment cannot change what the
/// binary logs.
///
/// ## Panics
/// Panics if the `pkgkit` binary cannot be found via `Command::cargo_bin`.
pub fn pkgkit_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pkgkit").expect("Failed to find pkgkit binary for testing");
    cmd.env_remove("RUST_LOG")
        .env_remove("PKGKIT_LOGLEVEL")
        .env_remove("PKGKIT_LOGFILE");
    cmd
}

/// Path argument as `&str`; test paths are always UTF-8.
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("test paths are UTF-8")
}
