//! # pkgkit Filesystem Copy Operations
//!
//! File: cli/src/common/fs/copy.rs
//!
//! ## Overview
//!
//! Copies files and directory trees with the semantics of `cp -Rf`, after
//! making sure the destination's parent directories exist (`mkdir -p`):
//!
//! - a directory source is copied recursively;
//! - if the destination already exists as a directory, the source lands
//!   *inside* it under its own name; otherwise the destination becomes the copy;
//! - existing files are overwritten.
//!
//! ## Architecture
//!
//! The recursive work is done by the `fs_extra` crate. Its `copy_inside`
//! option gives the `cp -r` placement rule for directories; plain files go
//! through `fs_extra::file::copy` with the placement rule applied here.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pkgkit::common::fs::copy;
//!
//! # fn main() -> pkgkit::core::error::Result<()> {
//! copy::copy_file("bin/app.elf", "out/targets/app/app.elf")?;
//! copy::copy_dir("templates/app", "out/apps/new_app")?;
//! # Ok(())
//! # }
//! ```
//!
use crate::common::fs::io::ensure_dir_exists;
use crate::core::error::{Result, UtilError};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Copies `src` (file or directory) to `dest`, creating `dest`'s parents.
///
/// # Arguments
///
/// * `src` - File or directory to copy.
/// * `dest` - Target path. An existing directory receives `src` under its
///   own name; anything else becomes the copy.
///
/// # Errors
///
/// Returns an `Err` if `src` does not exist, the parent of `dest` cannot be
/// created, or any file fails to copy.
pub fn copy_file(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<()> {
    let (src, dest) = (src.as_ref(), dest.as_ref());
    debug!("Copying {:?} to {:?}", src, dest);

    // `mkdir -p` the parent; a bare relative name has an empty parent.
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }

    if src.is_dir() {
        let mut options = fs_extra::dir::CopyOptions::new();
        options.overwrite = true;
        // Missing `dest` becomes the copy; an existing one receives `src/`.
        options.copy_inside = true;
        fs_extra::dir::copy(src, dest, &options).map_err(|e| {
            let message = format!("Failed to copy dir {:?} to {:?}: {}", src, dest, e);
            UtilError::with_source(message, e)
        })?;
    } else {
        let target = file_target(src, dest);
        let mut options = fs_extra::file::CopyOptions::new();
        options.overwrite = true;
        fs_extra::file::copy(src, &target, &options).map_err(|e| {
            let message = format!("Failed to copy {:?} to {:?}: {}", src, target, e);
            UtilError::with_source(message, e)
        })?;
    }

    info!("Copied {:?} to {:?}", src, dest);
    Ok(())
}

/// Copies a directory tree; same rules as [`copy_file`].
pub fn copy_dir(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<()> {
    copy_file(src, dest)
}

/// A file copied onto an existing directory goes inside it.
fn file_target(src: &Path, dest: &Path) -> PathBuf {
    match src.file_name() {
        Some(name) if dest.is_dir() => dest.join(name),
        _ => dest.to_path_buf(),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_copy_file_creates_parent_dirs() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let src = dir.path().join("app.elf");
        fs::write(&src, "ELF")?;
        let dest = dir.path().join("bin/targets/app/app.elf");
        copy_file(&src, &dest)?;
        assert_eq!(fs::read_to_string(&dest)?, "ELF");
        Ok(())
    }

    #[test]
    fn test_copy_file_overwrites() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let src = dir.path().join("new.txt");
        let dest = dir.path().join("old.txt");
        fs::write(&src, "new")?;
        fs::write(&dest, "old")?;
        copy_file(&src, &dest)?;
        assert_eq!(fs::read_to_string(&dest)?, "new");
        Ok(())
    }

    #[test]
    fn test_copy_file_into_existing_directory() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let src = dir.path().join("pkg.yml");
        fs::write(&src, "name: x")?;
        let dest = dir.path().join("dest");
        fs::create_dir(&dest)?;
        copy_file(&src, &dest)?;
        assert_eq!(fs::read_to_string(dest.join("pkg.yml"))?, "name: x");
        Ok(())
    }

    #[test]
    fn test_copy_dir_to_new_name() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let src = dir.path().join("template");
        fs::create_dir_all(src.join("src"))?;
        fs::write(src.join("src/main.c"), "int main;")?;
        let dest = dir.path().join("apps/blinky");
        copy_dir(&src, &dest)?;
        assert_eq!(fs::read_to_string(dest.join("src/main.c"))?, "int main;");
        Ok(())
    }

    #[test]
    fn test_copy_dir_into_existing_directory() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let src = dir.path().join("template");
        fs::create_dir_all(&src)?;
        fs::write(src.join("pkg.yml"), "x")?;
        let dest = dir.path().join("apps");
        fs::create_dir(&dest)?;
        copy_dir(&src, &dest)?;
        assert!(dest.join("template/pkg.yml").is_file());
        Ok(())
    }

    #[test]
    fn test_copy_missing_source_fails() {
        let dir = tempdir().unwrap();
        let result = copy_file(dir.path().join("absent"), dir.path().join("dest"));
        assert!(result.is_err());
    }
}
