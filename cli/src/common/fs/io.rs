//! # pkgkit Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Line-oriented reading of build description files, plus directory creation
//! used by the copy helpers.
//!
//! ## Architecture
//!
//! - **`read_lines`**: reads a text file into logical lines. A physical line
//!   whose accumulated text ends in a backslash is joined to the next one:
//!   the backslash is dropped and the next line is appended with nothing in
//!   between, so `"foo\\"` + `"bar"` becomes `"foobar"`. Joins chain through
//!   any number of lines. A backslash on the very last line of the file has
//!   nothing to join with and is kept as-is. There is no escape for a line
//!   that should genuinely end in a backslash.
//! - **`ContinuationLines`**: the iterator that does the joining, usable on
//!   any `BufRead` source.
//! - **`lossy_lines`**: splits a `BufRead` source on `\n`, drops a trailing
//!   `\r`, and decodes each line leniently. Bytes that are not UTF-8 become
//!   U+FFFD instead of failing the read.
//! - **`ensure_dir_exists`**: `mkdir -p`, refusing paths that exist as files.
//!
//! ## Usage
//!
//! ```rust
//! use pkgkit::common::fs::io::ContinuationLines;
//! use std::io::BufRead;
//!
//! let text = "CFLAGS = -O2 \\\n    -Wall\nLDFLAGS =\n";
//! let lines: Vec<String> = ContinuationLines::new(text.as_bytes().lines())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(lines, ["CFLAGS = -O2     -Wall", "LDFLAGS ="]);
//! ```
//!
use crate::core::error::{Result, UtilError};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Joins backslash-continued lines from an underlying line iterator.
///
/// Each item is one logical line. An error from the source ends the
/// iteration; whatever line was being assembled is yielded first, then the
/// error.
pub struct ContinuationLines<I> {
    source: I,
    pending: Option<String>,
    failed: Option<io::Error>,
    done: bool,
}

impl<I> ContinuationLines<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    pub fn new(source: I) -> Self {
        ContinuationLines {
            source,
            pending: None,
            failed: None,
            done: false,
        }
    }
}

impl<I> Iterator for ContinuationLines<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(e) = self.failed.take() {
            return Some(Err(e));
        }
        if self.done {
            return None;
        }
        loop {
            match self.source.next() {
                Some(Ok(line)) => match self.pending.take() {
                    Some(mut current) if current.ends_with('\\') => {
                        current.pop();
                        current.push_str(&line);
                        self.pending = Some(current);
                    }
                    Some(current) => {
                        self.pending = Some(line);
                        return Some(Ok(current));
                    }
                    None => self.pending = Some(line),
                },
                Some(Err(e)) => {
                    self.done = true;
                    return match self.pending.take() {
                        Some(current) => {
                            self.failed = Some(e);
                            Some(Ok(current))
                        }
                        None => Some(Err(e)),
                    };
                }
                None => {
                    self.done = true;
                    return self.pending.take().map(Ok);
                }
            }
        }
    }
}

/// Physical lines of `reader`, without their `\n` or `\r\n` terminators.
///
/// Unlike [`BufRead::lines`], invalid UTF-8 is not an error: offending bytes
/// are replaced with U+FFFD. Only genuine I/O failures are yielded as `Err`.
///
/// # Arguments
///
/// * `reader` - Any buffered source (a file, a byte slice, a socket).
///
/// # Returns
///
/// An iterator suitable for [`ContinuationLines::new`].
pub fn lossy_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n').map(|line| {
        let mut bytes = line?;
        // `split` removed the `\n`; a CRLF file still leaves the `\r`.
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    })
}

/// Reads `path` into logical lines, joining backslash continuations.
///
/// # Arguments
///
/// * `path` - The file to read.
///
/// # Returns
///
/// * `Result<Vec<String>>` - The logical lines, in file order. Bytes that
///   are not valid UTF-8 are replaced, not rejected.
///
/// # Errors
///
/// Fails if the file cannot be opened. An I/O failure while reading returns
/// an error whose [`UtilError::partial_lines`] holds the lines completed
/// before it.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        UtilError::with_source(format!("Failed to open {:?}: {}", path, e), e)
    })?;

    let mut lines = Vec::new();
    for line in ContinuationLines::new(lossy_lines(BufReader::new(file))) {
        match line {
            Ok(line) => lines.push(line),
            // Keep what was read so callers can still report it.
            Err(e) => {
                let message = format!("Failed to read {:?}: {}", path, e);
                return Err(UtilError::with_source(message, e).with_lines(lines));
            }
        }
    }
    debug!("Read {} logical lines from {:?}", lines.len(), path);
    Ok(lines)
}

/// `mkdir -p`: creates `path` and its missing parents unless it is already a directory.
///
/// # Errors
///
/// Fails when `path` exists as something other than a directory, or when it
/// cannot be created.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    // Nothing there yet: create it along with any missing parents.
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| {
            UtilError::with_source(format!("Failed to create directory {:?}: {}", path, e), e)
        })?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        // A file (or other node) is in the way.
        return Err(UtilError::new(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}
