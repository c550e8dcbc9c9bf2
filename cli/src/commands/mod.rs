//! # pkgkit Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the command groups of the `pkgkit` front end. Each
//! group exposes one library area from the command line:
//!
//! - `config`: YAML configuration lookups (`core::config`)
//! - `fs`: filesystem probes, listings and copies (`common::fs`)
//! - `run`: batch and interactive commands (`common::process`)
//! - `text`: line reading and string-list helpers (`common::fs::io`, `common::text`)
//!
//! Each group defines its own `<Group>Args` struct, a `Subcommand` enum and a
//! `handle_<group>` function. Handlers write results through the `Console` at
//! `Default` verbosity and return `anyhow::Result<()>`; library errors are
//! converted with `?`.
//!

/// Command group for reading YAML configuration files. Subcommand: `get`.
pub mod config;
/// Command group for filesystem helpers. Subcommands: `exists`, `mtime`, `children`, `descendants`, `copy`.
pub mod fs;
/// Command group for running external programs. Subcommands: `sh`, `exec`.
pub mod run;
/// Command group for text helpers. Subcommands: `lines`, `unique`, `fields`, `pair`.
pub mod text;
