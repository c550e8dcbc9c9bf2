//! # pkgkit Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Entry point for the filesystem helpers. Functionality is split by concern:
//!
//! - **`probe`**: single-node questions: `exists`, `not_exists`, `modification_time`.
//! - **`walk`**: directory listings: `child_directories` and the ancestor
//!   search `descendant_dirs_of_ancestor`.
//! - **`io`**: `read_lines` with backslash continuation, `ensure_dir_exists`.
//! - **`copy`**: `copy_file` / `copy_dir` with `cp -Rf` semantics.
//!
//! The most used functions are re-exported here.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pkgkit::common::fs;
//!
//! # fn main() -> pkgkit::core::error::Result<()> {
//! if fs::exists("project.yml") {
//!     for pkg in fs::descendant_dirs_of_ancestor(".", "apps", true)? {
//!         println!("{}", pkg.display());
//!     }
//! }
//! let lines = fs::read_lines("pkg.cfg")?;
//! # Ok(())
//! # }
//! ```
//!

/// Copying files and directory trees.
pub mod copy;
/// Line reading and directory creation.
pub mod io;
/// Existence and modification-time probes.
pub mod probe;
/// Directory listing and the ancestor search.
pub mod walk;

pub use copy::{copy_dir, copy_file};
pub use io::{ensure_dir_exists, lossy_lines, read_lines, ContinuationLines};
pub use probe::{exists, modification_time, not_exists};
pub use walk::{child_directories, descendant_dirs_of_ancestor};
