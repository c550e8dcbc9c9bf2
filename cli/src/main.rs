//! # pkgkit Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Command-line front end for the `pkgkit` helpers. It handles:
//! - Command-line argument parsing using Clap
//! - Logger set-up from `--loglevel`/`--logfile`
//! - Choosing the console verbosity from `-v`/`-q`/`-s`
//! - Routing execution to the command group handlers
//!
//! ## Architecture
//!
//! - Each command group (`fs`, `run`, `text`, `config`) is a variant of the
//!   `Commands` enum and has a handler in `commands::<group>`.
//! - Handlers print their results through the shared `Console` and return
//!   `anyhow::Result<()>`.
//! - All errors are propagated to this level: the message is printed as
//!   `Error: <message>`, followed by the rendered stack trace in verbose mode,
//!   and the process exits with status 1.
//!
//! ## Examples
//!
//! ```bash
//! # Find every package directory below an `apps` directory
//! pkgkit fs descendants . apps --full-path
//!
//! # Run a shell command, logging it at VERBOSE level
//! pkgkit -l verbose run sh "make -C hw/bsp"
//!
//! # Read a key from ./pkg.yml
//! pkgkit config get . pkg pkg.name
//! ```
//!
use clap::Parser;
use pkgkit::common::ui::{Console, Verbosity};
use pkgkit::core::{error::UtilError, logging};
use std::path::PathBuf;

mod commands;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "pkgkit",
    about = "pkgkit: helpers for build and package-management tooling",
    long_about = "Exposes the pkgkit helpers (filesystem probes, process execution,\n\
                  text utilities and YAML config loading) from the command line.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print extra status output and stack traces on failure.
    #[arg(short, long, global = true, conflicts_with_all = ["quiet", "silent"])]
    verbose: bool,

    /// Only print essential output.
    #[arg(short, long, global = true, conflicts_with = "silent")]
    quiet: bool,

    /// Print nothing except errors.
    #[arg(short, long, global = true)]
    silent: bool,

    /// Log level: DEBUG, VERBOSE, INFO, WARN or ERROR.
    #[arg(short = 'l', long, global = true, env = "PKGKIT_LOGLEVEL", default_value = "WARN")]
    loglevel: String,

    /// Also write log records to this file.
    #[arg(short = 'o', long, global = true, env = "PKGKIT_LOGFILE")]
    logfile: Option<PathBuf>,
}

impl Cli {
    fn verbosity(&self) -> Verbosity {
        if self.silent {
            Verbosity::Silent
        } else if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Default
        }
    }
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Filesystem probes, listings and copies.
    Fs(commands::fs::FsArgs),
    /// Run shell or interactive commands.
    Run(commands::run::RunArgs),
    /// Line reading and string-list utilities.
    Text(commands::text::TextArgs),
    /// Read YAML configuration files.
    Config(commands::config::ConfigArgs),
}

fn main() {
    let cli = Cli::parse();
    let mut console = Console::new(cli.verbosity());

    if let Err(e) = logging::init(&cli.loglevel, cli.logfile.as_deref()) {
        console.error(Verbosity::Silent, format_args!("Error: {}\n", e));
        std::process::exit(1);
    }
    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Fs(args) => commands::fs::handle_fs(args, &mut console),
        Commands::Run(args) => commands::run::handle_run(args, &mut console),
        Commands::Text(args) => commands::text::handle_text(args, &mut console),
        Commands::Config(args) => commands::config::handle_config(args, &mut console),
    };

    if let Err(e) = command_result {
        tracing::debug!("Command execution failed: {:?}", e);
        console.error(Verbosity::Silent, format_args!("Error: {}\n", e));
        if console.enabled(Verbosity::Verbose) {
            let trace = match e.downcast_ref::<UtilError>() {
                Some(util) => util.render(),
                None => format!("{:?}", e),
            };
            console.error(Verbosity::Verbose, format_args!("{}\n", trace));
        }
        std::process::exit(1);
    }
}
