//! # pkgkit Console Output (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Status and error messages shown to the user are filtered by a verbosity
//! level chosen once at start-up (`-s`, `-q`, default, `-v`). Instead of a
//! process-wide variable, the level lives in a [`Console`] value created by
//! the entry point and handed to whatever needs to print.
//!
//! - [`Console::status`] writes to stdout and always flushes afterwards, so
//!   progress text shows up before a long-running child process starts.
//! - [`Console::error`] writes to stderr.
//!
//! Both print only when the console's verbosity is at least the message's
//! level. Write failures are ignored: a closed terminal must not turn a
//! successful operation into a failed one.
//!
//! ## Usage
//!
//! ```rust
//! use pkgkit::common::ui::{Console, Verbosity};
//!
//! let mut console = Console::with_writers(Verbosity::Quiet, Vec::new(), Vec::new());
//! console.status(Verbosity::Quiet, format_args!("Building {}\n", "app"));
//! console.status(Verbosity::Verbose, format_args!("cc -c main.c\n"));
//! let (out, _err) = console.into_writers();
//! assert_eq!(out, b"Building app\n");
//! ```
//!
use std::fmt;
use std::io::{self, Stderr, Stdout, Write};

/// How much the user wants to hear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    #[default]
    Default = 2,
    Verbose = 3,
}

impl From<u8> for Verbosity {
    /// Values above 3 clamp to `Verbose`.
    fn from(level: u8) -> Self {
        match level {
            0 => Verbosity::Silent,
            1 => Verbosity::Quiet,
            2 => Verbosity::Default,
            _ => Verbosity::Verbose,
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verbosity::Silent => "silent",
            Verbosity::Quiet => "quiet",
            Verbosity::Default => "default",
            Verbosity::Verbose => "verbose",
        };
        f.write_str(name)
    }
}

/// Verbosity-aware writer pair.
#[derive(Debug)]
pub struct Console<O = Stdout, E = Stderr> {
    verbosity: Verbosity,
    out: O,
    err: E,
}

impl Console {
    /// A console bound to the process's stdout and stderr.
    pub fn new(verbosity: Verbosity) -> Self {
        Console::with_writers(verbosity, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Console<O, E> {
    /// A console bound to arbitrary writers.
    pub fn with_writers(verbosity: Verbosity, out: O, err: E) -> Self {
        Console { verbosity, out, err }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// True when a message at `level` would be printed.
    pub fn enabled(&self, level: Verbosity) -> bool {
        self.verbosity >= level
    }

    /// Prints a status message on stdout if `level` is enabled, then flushes.
    pub fn status(&mut self, level: Verbosity, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            let _ = self.out.write_fmt(args);
        }
        let _ = self.out.flush();
    }

    /// Prints an error message on stderr if `level` is enabled.
    pub fn error(&mut self, level: Verbosity, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            let _ = self.err.write_fmt(args);
        }
    }

    /// Gives the writers back, mostly for inspecting captured output.
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }
}
