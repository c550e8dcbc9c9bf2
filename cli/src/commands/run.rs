//! # pkgkit Run Command Group
//!
//! File: cli/src/commands/run.rs
//!
//! ## Overview
//!
//! Implements `pkgkit run`, the front end of `common::process`:
//!
//! - `sh <CMD>`: runs `CMD` through `sh -c` and prints its combined output.
//!   When the command fails, whatever it printed is shown on stderr before
//!   the error.
//! - `exec <PROGRAM> [ARGS]...`: runs `PROGRAM` on the current terminal.
//!   `PROGRAM` is a path, not looked up on `PATH`. While it runs, Ctrl-C goes
//!   to the child only. A non-zero exit status fails the command.
//!
//! ## Usage
//!
//! ```bash
//! pkgkit run sh "arm-none-eabi-size bin/app.elf"
//! pkgkit run exec /usr/bin/gdb -q bin/app.elf
//! ```
//!
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use pkgkit::common::process;
use pkgkit::common::ui::{Console, Verbosity};
use std::ffi::OsString;
use std::io::Write;
use tracing::debug;

/// # Run Command Group Arguments (`RunArgs`)
#[derive(Parser, Debug)]
pub struct RunArgs {
    #[command(subcommand)]
    command: RunCommand,
}

#[derive(Subcommand, Debug)]
enum RunCommand {
    /// Run a command line through `sh -c` and print its combined output.
    Sh {
        /// The command line, passed to the shell as one argument.
        cmd: String,
    },
    /// Run a program attached to the terminal.
    Exec {
        /// Program path followed by its arguments.
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        argv: Vec<OsString>,
    },
}

/// Routes `pkgkit run <subcommand>`.
pub fn handle_run<O: Write, E: Write>(args: RunArgs, console: &mut Console<O, E>) -> Result<()> {
    debug!("Handling run command: {:?}", args.command);
    match args.command {
        RunCommand::Sh { cmd } => match process::run_shell_command(&cmd) {
            Ok(output) => {
                console.status(
                    Verbosity::Default,
                    format_args!("{}", String::from_utf8_lossy(&output)),
                );
            }
            Err(e) => {
                console.error(
                    Verbosity::Quiet,
                    format_args!("{}", String::from_utf8_lossy(e.output())),
                );
                return Err(e.into());
            }
        },
        RunCommand::Exec { argv } => {
            let status = process::run_interactive_command(&argv)?;
            if !status.success() {
                bail!("{} exited with {}", argv[0].to_string_lossy(), status);
            }
        }
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn run(argv: &[&str]) -> (Result<()>, String, String) {
        let args = RunArgs::try_parse_from(std::iter::once("run").chain(argv.iter().copied()))
            .expect("arguments should parse");
        let mut console = Console::with_writers(Verbosity::Default, Vec::new(), Vec::new());
        let result = handle_run(args, &mut console);
        let (out, err) = console.into_writers();
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_sh_prints_combined_output() {
        let (result, out, err) = run(&["sh", "echo one; echo two 1>&2"]);
        assert!(result.is_ok());
        assert_eq!(out, "one\ntwo\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_sh_failure_shows_captured_output() {
        let (result, out, err) = run(&["sh", "echo compiling; exit 2"]);
        assert!(result.is_err());
        assert!(out.is_empty());
        assert_eq!(err, "compiling\n");
    }

    #[test]
    fn test_exec_accepts_hyphenated_arguments() {
        let (result, _, _) = run(&["exec", "/bin/sh", "-c", "exit 0"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_exec_nonzero_exit_is_reported() {
        let (result, _, _) = run(&["exec", "/bin/sh", "-c", "exit 4"]);
        let message = result.unwrap_err().to_string();
        assert!(message.starts_with("/bin/sh exited with"));
    }

    #[test]
    fn test_exec_requires_program() {
        assert!(RunArgs::try_parse_from(["run", "exec"]).is_err());
    }
}
