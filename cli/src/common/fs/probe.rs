//! # pkgkit Filesystem Probes
//!
//! File: cli/src/common/fs/probe.rs
//!
//! ## Overview
//!
//! Cheap questions about a single filesystem node, answered with one `stat`
//! (`std::fs::metadata`, which follows symlinks):
//!
//! - **`exists`**: the stat succeeded.
//! - **`not_exists`**: the stat failed with "not found".
//! - **`modification_time`**: the node's mtime, or the Unix epoch when the
//!   node is missing.
//!
//! `exists` and `not_exists` are not negations of each other. A stat that
//! fails for another reason (permission denied on a parent, a dangling
//! symlink loop) makes *both* return `false`: `exists` treats it as absent,
//! `not_exists` treats it as present. Callers that care about the difference
//! should stat the path themselves.
//!
use crate::core::error::{Result, UtilError};
use chrono::{DateTime, Utc};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::SystemTime;
use tracing::debug;

/// True iff `path` can be stat'ed.
///
/// Any failure counts as absence, including permission errors, so a path can
/// be neither `exists` nor `not_exists`.
pub fn exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path.as_ref()).is_ok()
}

/// True iff stat'ing `path` fails with `NotFound`.
pub fn not_exists(path: impl AsRef<Path>) -> bool {
    matches!(fs::metadata(path.as_ref()), Err(e) if e.kind() == ErrorKind::NotFound)
}

/// Returns the modification time of `path`.
///
/// A missing node yields the Unix epoch and no error, which makes "never
/// built" compare older than any real file.
///
/// # Arguments
///
/// * `path` - File or directory to stat. Symlinks are followed.
///
/// # Returns
///
/// * `Result<DateTime<Utc>>` - The mtime, or `1970-01-01T00:00:00Z` for a
///   missing node.
///
/// # Errors
///
/// Any stat failure other than `NotFound`, or a platform without mtime support.
pub fn modification_time(path: impl AsRef<Path>) -> Result<DateTime<Utc>> {
    let path = path.as_ref();
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No node at {:?}; using epoch as modification time", path);
            return Ok(DateTime::<Utc>::from(SystemTime::UNIX_EPOCH));
        }
        Err(e) => return Err(UtilError::from(e)),
    };
    // Not every platform records an mtime.
    let modified = metadata.modified()?;
    Ok(DateTime::<Utc>::from(modified))
}
