//! # pkgkit System Utilities Module (`common::system`)
//!
//! File: cli/src/common/system/mod.rs
//!
//! ## Overview
//!
//! Interaction with process-wide OS state. Currently this is signal
//! handling around interactive child processes (see [`signals`]), used by
//! `common::process::run_interactive_command`.
//!
//! ```rust
//! use pkgkit::common::system::signals::SignalGuard;
//!
//! # fn main() -> pkgkit::core::error::Result<()> {
//! {
//!     let _signals = SignalGuard::acquire()?;
//!     // Ctrl-C no longer terminates this process here.
//! }
//! // Previous handling is back in place.
//! # Ok(())
//! # }
//! ```
//!

/// Scoped ownership of `SIGINT` and `SIGTERM`.
pub mod signals;
