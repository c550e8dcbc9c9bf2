//! # pkgkit Configuration Loading
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! Build and package descriptions are YAML files found by directory and
//! base name: `load_yaml_config("apps/blinky", "pkg")` reads
//! `apps/blinky/pkg.yml` (or `pkg.yaml`). The result is a [`YamlConfig`], a
//! schema-less handle that answers key lookups; what the keys mean is up to
//! the caller.
//!
//! ## Architecture
//!
//! - The directory may start with `~`, which is expanded with `shellexpand`.
//! - `<name>.yml` is tried before `<name>.yaml`.
//! - The document is parsed with `serde_yaml` into a `serde_yaml::Value`.
//!   An empty file is an empty configuration; any other top level than a
//!   mapping is rejected.
//! - Every failure (missing file, I/O, syntax) is reported as
//!   `Error reading <dir>/<name>.yml: <cause>`.
//!
//! Lookups take dotted paths (`pkg.deps`) and match mapping keys without
//! regard to ASCII case, so `Pkg.Name` and `pkg.name` are the same key.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use pkgkit::core::config::load_yaml_config;
//!
//! # fn main() -> pkgkit::core::error::Result<()> {
//! let cfg = load_yaml_config("~/repos/blinky", "pkg")?;
//! let name = cfg.get_string("pkg.name").unwrap_or_default();
//! let deps = cfg.get_string_list("pkg.deps");
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{Result, UtilError};
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Extensions tried, in order, after the base name.
pub const CONFIG_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// A parsed YAML configuration file.
#[derive(Debug, Clone)]
pub struct YamlConfig {
    path: PathBuf,
    root: Value,
}

/// Loads `<dir>/<name>.yml` (or `.yaml`).
///
/// # Arguments
///
/// * `dir` - Directory holding the file. A leading `~` is expanded.
/// * `name` - File name without extension.
///
/// # Returns
///
/// * `Result<YamlConfig>` - The parsed document, remembering which file it came from.
///
/// # Errors
///
/// Returns an error naming `<dir>/<name>.yml` if no file is found, it
/// cannot be read, or it is not a valid YAML mapping.
pub fn load_yaml_config(dir: impl AsRef<Path>, name: &str) -> Result<YamlConfig> {
    let dir = expand_dir(dir.as_ref());
    let expected = dir.join(format!("{}.yml", name));
    let fail = |cause: String| format!("Error reading {}: {}", expected.display(), cause);

    let path = find_config_file(&dir, name).ok_or_else(|| {
        UtilError::new(fail(format!(
            "no {}.yml or {}.yaml found in {}",
            name,
            name,
            dir.display()
        )))
    })?;

    let content = fs::read_to_string(&path)
        .map_err(|e| UtilError::with_source(fail(e.to_string()), e))?;
    // Keep the parser error as the cause so `render()` can show it.
    let root: Value = serde_yaml::from_str(&content)
        .map_err(|e| UtilError::with_source(fail(e.to_string()), e))?;
    let config = YamlConfig::from_value_at(root, path)
        .map_err(|e| UtilError::new(fail(e.message().to_string())))?;
    info!("Loaded configuration from {}", config.path.display());
    Ok(config)
}

fn expand_dir(dir: &Path) -> PathBuf {
    let raw = dir.to_string_lossy();
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}

fn find_config_file(dir: &Path, name: &str) -> Option<PathBuf> {
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", name, ext)))
        .find(|candidate| {
            debug!("Looking for configuration at {}", candidate.display());
            candidate.is_file()
        })
}

impl YamlConfig {
    /// Parses YAML text; `path` is only recorded for diagnostics.
    pub fn from_str_at(content: &str, path: impl Into<PathBuf>) -> Result<Self> {
        let root: Value = serde_yaml::from_str(content)
            .map_err(|e| UtilError::with_source(e.to_string(), e))?;
        Self::from_value_at(root, path)
    }

    /// Wraps an already parsed document. A null document is an empty
    /// mapping; any other non-mapping is rejected.
    pub fn from_value_at(root: Value, path: impl Into<PathBuf>) -> Result<Self> {
        let root = match root {
            Value::Null => Value::Mapping(Mapping::new()),
            Value::Mapping(_) => root,
            _ => return Err(UtilError::new("top level of the document must be a mapping")),
        };
        Ok(YamlConfig {
            path: path.into(),
            root,
        })
    }

    /// File the configuration was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Top-level keys, as written in the file.
    pub fn keys(&self) -> Vec<String> {
        match &self.root {
            Value::Mapping(map) => map.keys().filter_map(scalar_to_string).collect(),
            _ => Vec::new(),
        }
    }

    /// Looks up a dotted key path.
    pub fn get(&self, key: &str) -> Option<&Value> {
        key.split('.').try_fold(&self.root, |node, part| match node {
            Value::Mapping(map) => map
                .iter()
                .find(|(k, _)| key_matches(k, part))
                .map(|(_, v)| v),
            _ => None,
        })
    }

    /// True when `key` is present, even if its value is null.
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Scalar value rendered as a string (numbers and booleans included).
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_to_string)
    }

    /// Boolean value; the strings `true`/`false` are accepted too.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.trim().to_ascii_lowercase().parse().ok(),
            _ => None,
        }
    }

    /// Integer value; numeric strings are accepted too.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// List of strings; empty when the key is unset.
    ///
    /// A sequence yields its scalar items, a string is split on whitespace,
    /// and any other scalar becomes a one-item list.
    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Sequence(items)) => items.iter().filter_map(scalar_to_string).collect(),
            Some(Value::String(s)) => s.split_whitespace().map(str::to_owned).collect(),
            Some(other) => scalar_to_string(other).into_iter().collect(),
            None => Vec::new(),
        }
    }

    /// Deserializes the value at `key` into `T`; `Ok(None)` when unset.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key) {
            Some(value) => serde_yaml::from_value(value.clone()).map(Some).map_err(|e| {
                let message = format!("Invalid value for '{}' in {}: {}", key, self.path.display(), e);
                UtilError::with_source(message, e)
            }),
            None => Ok(None),
        }
    }

    /// Deserializes the whole document into `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        serde_yaml::from_value(self.root.clone()).map_err(|e| {
            let message = format!("Invalid configuration in {}: {}", self.path.display(), e);
            UtilError::with_source(message, e)
        })
    }
}

fn key_matches(key: &Value, wanted: &str) -> bool {
    match key {
        Value::String(s) => s.eq_ignore_ascii_case(wanted),
        other => scalar_to_string(other).is_some_and(|s| s == wanted),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
