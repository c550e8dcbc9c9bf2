//! # pkgkit Filesystem Command Group
//!
//! File: cli/src/commands/fs.rs
//!
//! ## Overview
//!
//! Implements `pkgkit fs`, a command-line view of `common::fs`:
//!
//! - `exists <PATH>`: prints `true` or `false`. A path whose existence cannot
//!   be decided (e.g. permission denied) prints `false`.
//! - `mtime <PATH>`: prints the modification time in RFC 3339; a missing path
//!   prints the Unix epoch.
//! - `children <PATH>`: one non-hidden child directory per line, sorted.
//! - `descendants <ROOT> <ANCESTOR> [--full-path]`: the children of every
//!   directory named `ANCESTOR` below `ROOT`.
//! - `copy <SRC> <DEST>`: `cp -Rf` style copy; creates `DEST`'s parents.
//!
//! ## Usage
//!
//! ```bash
//! pkgkit fs exists project.yml
//! pkgkit fs descendants repos apps --full-path
//! pkgkit fs copy bin/app.elf out/app.elf
//! ```
//!
use anyhow::Result;
use clap::{Parser, Subcommand};
use pkgkit::common::fs;
use pkgkit::common::ui::{Console, Verbosity};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// # Filesystem Command Group Arguments (`FsArgs`)
#[derive(Parser, Debug)]
pub struct FsArgs {
    #[command(subcommand)]
    command: FsCommand,
}

#[derive(Subcommand, Debug)]
enum FsCommand {
    /// Print whether a path exists.
    Exists {
        path: PathBuf,
    },
    /// Print a path's modification time (the epoch if it is missing).
    Mtime {
        path: PathBuf,
    },
    /// List non-hidden child directories.
    Children {
        path: PathBuf,
    },
    /// List the children of every directory named ANCESTOR below ROOT.
    Descendants {
        root: PathBuf,
        ancestor: String,
        /// Print `<ancestor path>/<child>` instead of the bare child name.
        #[arg(long)]
        full_path: bool,
    },
    /// Copy a file or directory tree, creating the destination's parents.
    Copy {
        src: PathBuf,
        dest: PathBuf,
    },
}

/// Routes `pkgkit fs <subcommand>`.
pub fn handle_fs<O: Write, E: Write>(args: FsArgs, console: &mut Console<O, E>) -> Result<()> {
    debug!("Handling fs command: {:?}", args.command);
    match args.command {
        FsCommand::Exists { path } => {
            console.status(Verbosity::Default, format_args!("{}\n", fs::exists(&path)));
        }
        FsCommand::Mtime { path } => {
            let mtime = fs::modification_time(&path)?;
            console.status(Verbosity::Default, format_args!("{}\n", mtime.to_rfc3339()));
        }
        FsCommand::Children { path } => {
            for name in fs::child_directories(&path)? {
                console.status(Verbosity::Default, format_args!("{}\n", name));
            }
        }
        FsCommand::Descendants {
            root,
            ancestor,
            full_path,
        } => {
            let found = fs::descendant_dirs_of_ancestor(&root, &ancestor, full_path)?;
            if found.is_empty() {
                console.status(
                    Verbosity::Verbose,
                    format_args!("No directories named '{}' below {}\n", ancestor, root.display()),
                );
            }
            for dir in found {
                console.status(Verbosity::Default, format_args!("{}\n", dir.display()));
            }
        }
        FsCommand::Copy { src, dest } => {
            fs::copy_file(&src, &dest)?;
            console.status(
                Verbosity::Verbose,
                format_args!("Copied {} to {}\n", src.display(), dest.display()),
            );
        }
    }
    Ok(())
}
