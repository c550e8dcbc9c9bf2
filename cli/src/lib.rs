//! # pkgkit Library Root
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! Low-level helpers for build and package-management tooling. Every helper
//! wraps one OS or string operation and is independent of the others:
//!
//! - [`common::ui`]: verbosity-gated status and error messages.
//! - [`common::fs`]: existence and mtime probes, directory listings, the
//!   ancestor search, continuation-aware line reading, copying.
//! - [`common::process`]: batch shell commands and interactive children.
//! - [`common::text`]: de-duplication and sorting of string lists.
//! - [`core::config`]: YAML configuration files.
//! - [`core::error`] and [`core::logging`]: the shared error type and the
//!   `tracing` set-up.
//!
//! The `pkgkit` binary is a thin command-line front end over these modules.
//!
pub mod common;
pub mod core;
