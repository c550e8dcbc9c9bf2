//! # pkgkit Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Root of the shared helper modules used by build and package-management
//! commands. Each helper wraps a single OS or string operation and keeps no
//! state between calls; the groups only share the error type from
//! `core::error`.
//!
//! ## Architecture
//!
//! - **`fs`**: existence and mtime probes, directory listings and the
//!   ancestor search, continuation-aware line reading, copying.
//! - **`process`**: batch shell commands with combined output, interactive
//!   commands on the caller's terminal.
//! - **`system`**: process-wide OS state (signal ownership).
//! - **`text`**: de-duplication and sorting of string lists, `key=value` parsing.
//! - **`ui`**: verbosity-aware status and error messages.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pkgkit::common::{fs, process, text, ui::{Console, Verbosity}};
//!
//! # fn main() -> pkgkit::core::error::Result<()> {
//! let mut console = Console::new(Verbosity::Default);
//! for pkg in fs::descendant_dirs_of_ancestor("repos", "pkgs", true)? {
//!     console.status(Verbosity::Verbose, format_args!("found {}\n", pkg.display()));
//! }
//! let flags = text::sort_fields(["-O2 -Wall", "-Wall -g"]);
//! let out = process::run_shell_command(&format!("cc {} -c main.c", flags.join(" ")))?;
//! # Ok(())
//! # }
//! ```
//!

/// Filesystem probes, traversal, line reading and copying.
pub mod fs;
/// Running external commands, batch and interactive.
pub mod process;
/// Process-wide OS state such as signal handling.
pub mod system;
/// String-list helpers.
pub mod text;
/// Verbosity-aware console output.
pub mod ui;
