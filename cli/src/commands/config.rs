//! # pkgkit Config Command Group
//!
//! File: cli/src/commands/config.rs
//!
//! ## Overview
//!
//! Implements `pkgkit config get <DIR> <NAME> [KEY]`, which loads
//! `<DIR>/<NAME>.yml` (or `.yaml`) through `core::config` and prints:
//!
//! - without `KEY`: the whole document, re-serialized as YAML;
//! - a scalar `KEY`: its value;
//! - a sequence `KEY`: one item per line;
//! - a mapping `KEY`: the sub-document as YAML.
//!
//! Keys are dotted paths matched without regard to case. An unset key is an
//! error.
//!
//! ## Usage
//!
//! ```bash
//! pkgkit config get ~/repos/blinky pkg pkg.deps
//! ```
//!
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pkgkit::common::ui::{Console, Verbosity};
use pkgkit::core::config::{self, YamlConfig};
use serde_yaml::Value;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// # Config Command Group Arguments (`ConfigArgs`)
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print a configuration file, or one key of it.
    Get {
        /// Directory holding the file; `~` is expanded.
        dir: PathBuf,
        /// File name without the `.yml`/`.yaml` extension.
        name: String,
        /// Dotted key path, e.g. `pkg.deps`.
        key: Option<String>,
    },
}

/// Routes `pkgkit config <subcommand>`.
pub fn handle_config<O: Write, E: Write>(
    args: ConfigArgs,
    console: &mut Console<O, E>,
) -> Result<()> {
    debug!("Handling config command: {:?}", args.command);
    match args.command {
        ConfigCommand::Get { dir, name, key } => {
            let cfg = config::load_yaml_config(&dir, &name)?;
            console.status(
                Verbosity::Verbose,
                format_args!("Read {}\n", cfg.path().display()),
            );
            match key {
                Some(key) => print_key(console, &cfg, &key)?,
                None => {
                    let document: Value = cfg.deserialize()?;
                    print_yaml(console, &document)?;
                }
            }
        }
    }
    Ok(())
}

fn print_key<O: Write, E: Write>(
    console: &mut Console<O, E>,
    cfg: &YamlConfig,
    key: &str,
) -> Result<()> {
    match cfg.get(key) {
        None => bail!("Key '{}' is not set in {}", key, cfg.path().display()),
        Some(Value::Sequence(_)) => {
            for item in cfg.get_string_list(key) {
                console.status(Verbosity::Default, format_args!("{}\n", item));
            }
        }
        Some(value) => match cfg.get_string(key) {
            Some(scalar) => console.status(Verbosity::Default, format_args!("{}\n", scalar)),
            None => print_yaml(console, value)?,
        },
    }
    Ok(())
}

fn print_yaml<O: Write, E: Write>(console: &mut Console<O, E>, value: &Value) -> Result<()> {
    let text = serde_yaml::to_string(value).context("Failed to serialize configuration")?;
    console.status(Verbosity::Default, format_args!("{}", text));
    Ok(())
}
