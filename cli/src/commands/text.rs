//! # pkgkit Text Command Group
//!
//! File: cli/src/commands/text.rs
//!
//! ## Overview
//!
//! Implements `pkgkit text`:
//!
//! - `lines <FILE>`: prints the file's logical lines, with backslash
//!   continuations joined. If reading fails part way, the lines read so far
//!   are still printed before the error.
//! - `unique <ITEMS>...`: prints each distinct item once, in first-seen order.
//! - `fields <STRINGS>...`: splits every argument on whitespace and prints
//!   the distinct tokens sorted, space separated (the shape of a flag list).
//! - `pair <KEY=VALUE>`: prints the key and the value on separate lines.
//!
//! ## Usage
//!
//! ```bash
//! pkgkit text lines pkg.cfg
//! pkgkit text fields "-O2 -Wall" "-Wall -g"    # -> "-O2 -Wall -g"
//! ```
//!
use anyhow::Result;
use clap::{Parser, Subcommand};
use pkgkit::common::ui::{Console, Verbosity};
use pkgkit::common::{fs, text};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// # Text Command Group Arguments (`TextArgs`)
#[derive(Parser, Debug)]
pub struct TextArgs {
    #[command(subcommand)]
    command: TextCommand,
}

#[derive(Subcommand, Debug)]
enum TextCommand {
    /// Print a file's logical lines (backslash continuations joined).
    Lines { file: PathBuf },
    /// Print each distinct item once, keeping first-seen order.
    Unique {
        #[arg(required = true, allow_hyphen_values = true)]
        items: Vec<String>,
    },
    /// Print the sorted, distinct whitespace-separated tokens of all arguments.
    Fields {
        #[arg(required = true, allow_hyphen_values = true)]
        strings: Vec<String>,
    },
    /// Split a KEY=VALUE setting.
    Pair { setting: String },
}

/// Routes `pkgkit text <subcommand>`.
pub fn handle_text<O: Write, E: Write>(args: TextArgs, console: &mut Console<O, E>) -> Result<()> {
    debug!("Handling text command: {:?}", args.command);
    match args.command {
        TextCommand::Lines { file } => match fs::read_lines(&file) {
            Ok(lines) => print_lines(console, &lines),
            Err(e) => {
                print_lines(console, e.partial_lines());
                return Err(e.into());
            }
        },
        TextCommand::Unique { items } => print_lines(console, &text::unique_strings(items)),
        TextCommand::Fields { strings } => {
            let fields = text::sort_fields(&strings);
            console.status(Verbosity::Default, format_args!("{}\n", fields.join(" ")));
        }
        TextCommand::Pair { setting } => {
            let (key, value) = text::parse_equals_pair(&setting)?;
            console.status(Verbosity::Default, format_args!("{}\n{}\n", key, value));
        }
    }
    Ok(())
}

fn print_lines<O: Write, E: Write>(console: &mut Console<O, E>, lines: &[String]) {
    for line in lines {
        console.status(Verbosity::Default, format_args!("{}\n", line));
    }
}
