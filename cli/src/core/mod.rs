//! # pkgkit Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundations shared by every helper in `common` and by the command
//! handlers:
//! - `config`: loading YAML configuration files into a key-lookup handle
//! - `error`: the `UtilError` type and the library `Result` alias
//! - `logging`: installing the `tracing` subscriber (level names, log file tee)
//!
//! ## Usage
//!
//! ```rust
//! use pkgkit::core::config; // For loading <name>.yml files
//! use pkgkit::core::error::{Result, UtilError}; // For error handling
//! use pkgkit::core::logging; // For start-up logging configuration
//! ```
//!
pub mod config;
pub mod error;
pub mod logging;
