//! # pkgkit Directory Traversal
//!
//! File: cli/src/common/fs/walk.rs
//!
//! ## Overview
//!
//! Two directory-listing helpers used to discover packages on disk:
//!
//! - **`child_directories`**: the visible (non-dot) subdirectories directly
//!   under a directory, as bare names.
//! - **`descendant_dirs_of_ancestor`**: an *ancestor directory search*. Walk
//!   down from a root; whenever a directory named `ancestor` is reached,
//!   collect its visible child directories and do not descend any further
//!   into that branch. With `root/x/pkgs/{p1,p2}` and `root/y/pkgs/p3`,
//!   searching `root` for `pkgs` yields `p1`, `p2`, `p3`.
//!
//! Entries are reported in file-name order. Symlinks to directories are not
//! treated as directories (they are neither listed nor followed), except for
//! the root itself.
//!
//! ## Architecture
//!
//! The descent uses `walkdir`, pruning hidden directories and matched
//! ancestors with `skip_current_dir`. Any I/O error met on the way aborts the
//! whole search.
//!
use crate::common::fs::probe::not_exists;
use crate::core::error::{Result, UtilError};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Lists the non-hidden child directories of `path`, by name.
///
/// # Arguments
///
/// * `path` - The directory to list.
///
/// # Returns
///
/// * `Result<Vec<String>>` - Bare names, sorted. Files, symlinks and names
///   starting with `.` are left out.
///
/// # Errors
///
/// Returns an error if `path` cannot be listed or an entry cannot be inspected.
pub fn child_directories(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let entries = fs::read_dir(path).map_err(|e| {
        UtilError::with_source(format!("Failed to list directory {:?}: {}", path, e), e)
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        // `file_type` does not follow symlinks.
        if !is_hidden(&name) && entry.file_type()?.is_dir() {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Collects the child directories of every directory named `ancestor` under `root`.
///
/// When `full_path` is false the bare child names are returned; otherwise
/// each result is `<ancestor dir>/<child>`, rooted at the cleaned `root`.
/// `root` itself counts: if its own name is `ancestor`, its children are the
/// whole answer.
///
/// A missing `root` is not an error; the result is simply empty.
///
/// # Arguments
///
/// * `root` - Where the walk starts. It is cleaned lexically first, so
///   `repo/pkgs/p1/..` searches from `repo/pkgs`.
/// * `ancestor` - The directory name to look for.
/// * `full_path` - Return `<ancestor dir>/<child>` instead of `<child>`.
///
/// # Returns
///
/// * `Result<Vec<PathBuf>>` - The collected child directories in walk order.
///
/// # Errors
///
/// Any failure to read a directory during the walk.
pub fn descendant_dirs_of_ancestor(
    root: impl AsRef<Path>,
    ancestor: &str,
    full_path: bool,
) -> Result<Vec<PathBuf>> {
    let root = clean(root.as_ref());
    if not_exists(&root) {
        debug!("Search root {:?} does not exist", root);
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    let mut walker = WalkDir::new(&root).sort_by_file_name().into_iter();
    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| {
            let message = format!("Failed to walk {:?}: {}", root, e);
            UtilError::with_source(message, e)
        })?;

        // The root is taken as given, even when its name starts with a dot.
        if entry.depth() == 0 {
            if !entry.path().is_dir() {
                return Err(UtilError::new(format!("{:?} is not a directory", root)));
            }
        } else {
            if !entry.file_type().is_dir() {
                continue;
            }
            if is_hidden(&entry.file_name().to_string_lossy()) {
                walker.skip_current_dir();
                continue;
            }
        }

        if base_name(entry.path()) == Some(ancestor) {
            for child in child_directories(entry.path())? {
                if full_path {
                    found.push(entry.path().join(child));
                } else {
                    found.push(PathBuf::from(child));
                }
            }
            // Matched ancestors are not searched any deeper.
            walker.skip_current_dir();
        }
    }

    debug!(
        "Found {} directories under '{}' ancestors in {:?}",
        found.len(),
        ancestor,
        root
    );
    Ok(found)
}

/// Last normal component of `path`, with `.`/`..` left alone.
fn base_name(path: &Path) -> Option<&str> {
    match path.components().next_back()? {
        Component::Normal(name) => name.to_str(),
        Component::CurDir => Some("."),
        Component::ParentDir => Some(".."),
        _ => None,
    }
}

/// Lexical cleanup: drops `.` components and repeated or trailing
/// separators, and resolves `..` against the preceding name.
///
/// Leading `..` on a relative path is kept; `..` directly under the root is
/// dropped. The filesystem is not consulted, so symlinks are not resolved.
fn clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // Nothing above the root.
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                // Empty, or already climbing: `..` stays.
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    let cleaned: PathBuf = parts.into_iter().collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}
