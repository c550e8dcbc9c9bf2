//! # pkgkit Error Type
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! Every fallible helper in the library reports failure through a single error
//! type, [`UtilError`]. It carries:
//! - a human-readable message (what `Display` prints),
//! - an optional underlying cause, reachable through `Error::source`,
//! - an optional salvage payload: the captured output of a failed shell
//!   command, or the lines read before a read failure,
//! - a stack trace captured when the error is built.
//!
//! The trace uses `std::backtrace::Backtrace::capture`, so it is only
//! materialised when `RUST_BACKTRACE` or `RUST_LIB_BACKTRACE` asks for it.
//! [`UtilError::render`] produces the diagnostic form: the message, the cause
//! chain, then the trace text, bounded to [`STACK_TRACE_LIMIT`] bytes.
//!
//! ## Examples
//!
//! ```rust
//! use pkgkit::core::error::{Result, UtilError};
//!
//! fn check(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(UtilError::new("name must not be empty"));
//!     }
//!     Ok(())
//! }
//!
//! let err = check("").unwrap_err();
//! assert_eq!(err.to_string(), "name must not be empty");
//! assert!(err.render().starts_with("name must not be empty\n"));
//! ```
//!
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error as StdError;
use std::fmt::Write as _;
use std::io;
use thiserror::Error;

/// Upper bound, in bytes, on the stack trace text included by [`UtilError::render`].
pub const STACK_TRACE_LIMIT: usize = 1 << 16;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

// Named apart from `Backtrace` so the derive does not generate `Error::provide`,
// which is unstable.
type StackTrace = Backtrace;

/// Data recovered from an operation that failed part way.
#[derive(Debug)]
enum Salvage {
    Nothing,
    /// Combined stdout/stderr of a shell command.
    Output(Vec<u8>),
    /// Logical lines completed before a read failure.
    Lines(Vec<String>),
}

/// The error type shared by every pkgkit helper.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct UtilError {
    message: String,
    #[source]
    source: Option<BoxError>,
    salvage: Salvage,
    backtrace: StackTrace,
}

/// Result alias used across the library.
pub type Result<T, E = UtilError> = std::result::Result<T, E>;

impl UtilError {
    /// Builds an error from a message, capturing the current stack.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
            salvage: Salvage::Nothing,
            backtrace: Backtrace::capture(),
        }
    }

    /// Builds an error that wraps an underlying cause.
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::new(message)
        }
    }

    /// Attaches the combined output of a failed command.
    pub(crate) fn with_output(mut self, output: Vec<u8>) -> Self {
        self.salvage = Salvage::Output(output);
        self
    }

    /// Attaches the lines read before a failure.
    pub(crate) fn with_lines(mut self, lines: Vec<String>) -> Self {
        self.salvage = Salvage::Lines(lines);
        self
    }

    /// The message, without cause or trace.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Output captured from a failed shell command; empty otherwise.
    pub fn output(&self) -> &[u8] {
        match &self.salvage {
            Salvage::Output(bytes) => bytes,
            _ => &[],
        }
    }

    /// Lines read before a read failure; empty otherwise.
    pub fn partial_lines(&self) -> &[String] {
        match &self.salvage {
            Salvage::Lines(lines) => lines,
            _ => &[],
        }
    }

    /// The stack captured at construction.
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    /// Renders `message + "\n" + stack trace`.
    ///
    /// Causes are listed between the message and the trace, one per line.
    /// When no trace was captured the trace section says so. The trace text
    /// is cut at [`STACK_TRACE_LIMIT`] bytes.
    pub fn render(&self) -> String {
        let mut text = self.message.clone();
        let mut cause = self.source.as_deref().map(|e| e as &(dyn StdError + 'static));
        while let Some(err) = cause {
            let _ = write!(text, "\n  caused by: {}", err);
            cause = err.source();
        }
        text.push('\n');
        text.push_str(&stack_trace_text(&self.backtrace));
        text
    }
}

impl From<io::Error> for UtilError {
    fn from(err: io::Error) -> Self {
        UtilError::with_source(err.to_string(), err)
    }
}

fn stack_trace_text(backtrace: &Backtrace) -> String {
    let mut trace = match backtrace.status() {
        BacktraceStatus::Captured => backtrace.to_string(),
        BacktraceStatus::Disabled => {
            "stack trace disabled; set RUST_BACKTRACE=1 to capture".to_string()
        }
        _ => "stack trace unavailable".to_string(),
    };
    truncate_trace(&mut trace);
    trace
}

fn truncate_trace(trace: &mut String) {
    if trace.len() > STACK_TRACE_LIMIT {
        let mut end = STACK_TRACE_LIMIT;
        while !trace.is_char_boundary(end) {
            end -= 1;
        }
        trace.truncate(end);
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_message_only() {
        let err = UtilError::new("Error reading pkg.yml: missing");
        assert_eq!(err.to_string(), "Error reading pkg.yml: missing");
        assert_eq!(err.message(), "Error reading pkg.yml: missing");
    }

    #[test]
    fn test_render_includes_message_and_trace_section() {
        let err = UtilError::new("boom");
        let rendered = err.render();
        let (head, trace) = rendered.split_once('\n').unwrap();
        assert_eq!(head, "boom");
        assert!(!trace.is_empty());
        assert!(trace.len() <= STACK_TRACE_LIMIT);
    }

    #[test]
    fn test_io_error_becomes_source() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = UtilError::from(io_err);
        assert_eq!(err.to_string(), "denied");
        let source = err.source().expect("io error kept as source");
        assert_eq!(source.to_string(), "denied");
        assert!(err.render().contains("caused by: denied"));
    }

    #[test]
    fn test_salvage_accessors() {
        let err = UtilError::new("exit status: 1").with_output(b"partial".to_vec());
        assert_eq!(err.output(), b"partial");
        assert!(err.partial_lines().is_empty());

        let err = UtilError::new("bad utf-8").with_lines(vec!["a".into(), "b".into()]);
        assert_eq!(err.partial_lines(), ["a", "b"]);
        assert!(err.output().is_empty());
    }

    #[test]
    fn test_render_with_source_and_captured_trace() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = UtilError {
            backtrace: Backtrace::force_capture(),
            ..UtilError::with_source("Error reading pkg.yml", io_err)
        };
        assert_eq!(err.backtrace().status(), BacktraceStatus::Captured);
        assert_eq!(err.source().unwrap().to_string(), "no such file");

        let rendered = err.render();
        assert!(rendered.starts_with("Error reading pkg.yml\n  caused by: no such file\n"));
        assert!(!rendered.contains("stack trace disabled"));
        assert!(rendered.len() <= err.message().len() + 64 + STACK_TRACE_LIMIT);
    }

    #[test]
    fn test_trace_truncated_on_char_boundary() {
        // Two-byte chars straddle the limit when the prefix is odd.
        let mut trace = format!("x{}", "é".repeat(STACK_TRACE_LIMIT));
        truncate_trace(&mut trace);
        assert_eq!(trace.len(), STACK_TRACE_LIMIT - 1);
        trace.remove(0);
        assert!(trace.chars().all(|c| c == 'é'));
    }
}
