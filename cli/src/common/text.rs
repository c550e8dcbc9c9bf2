//! # pkgkit Text Utilities (`common::text`)
//!
//! File: cli/src/common/text.rs
//!
//! ## Overview
//!
//! Small string-list helpers used when assembling flag lists and dependency
//! sets:
//!
//! - **`unique_strings`**: drops repeated items, keeping the first of each
//!   and the order in which they first appeared.
//! - **`sort_fields`**: splits whitespace-separated lists, merges them,
//!   drops repeats and sorts what is left.
//! - **`parse_equals_pair`**: splits a `key=value` setting.
//!
use crate::core::error::{Result, UtilError};
use std::collections::HashSet;
use std::hash::Hash;

/// Removes duplicates, preserving the order of first occurrences.
///
/// ```rust
/// use pkgkit::common::text::unique_strings;
///
/// assert_eq!(unique_strings(["b", "a", "b", "c", "a"]), ["b", "a", "c"]);
/// ```
pub fn unique_strings<I, T>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Splits every input on whitespace and returns the distinct tokens, sorted.
///
/// ```rust
/// use pkgkit::common::text::sort_fields;
///
/// assert_eq!(sort_fields(["b a", "c  a"]), ["a", "b", "c"]);
/// ```
pub fn sort_fields<I, S>(inputs: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens: Vec<String> = Vec::new();
    for input in inputs {
        tokens.extend(input.as_ref().split_whitespace().map(str::to_owned));
    }
    let mut tokens = unique_strings(tokens);
    tokens.sort();
    tokens
}

/// Splits `key=value` into its two halves.
///
/// Only the text between the first and second `=` is taken as the value;
/// `"a=b=c"` parses as `("a", "b")`.
///
/// # Arguments
///
/// * `setting` - Text of the form `KEY=VALUE`.
///
/// # Returns
///
/// * `Result<(String, String)>` - The key and the value; either may be empty.
///
/// # Errors
///
/// Returns an error when `setting` contains no `=`.
pub fn parse_equals_pair(setting: &str) -> Result<(String, String)> {
    let mut parts = setting.split('=');
    match (parts.next(), parts.next()) {
        (Some(key), Some(value)) => Ok((key.to_string(), value.to_string())),
        _ => Err(UtilError::new(format!(
            "Invalid setting '{}'; expected KEY=VALUE",
            setting
        ))),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_keeps_first_occurrence_order() {
        let items = vec!["b", "a", "b", "c", "a"];
        assert_eq!(unique_strings(items), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_unique_owned_strings_and_empty() {
        let items: Vec<String> = vec!["x".into(), "x".into(), "".into(), "".into()];
        assert_eq!(unique_strings(items), ["x", ""]);
        assert!(unique_strings(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_unique_is_case_sensitive() {
        assert_eq!(unique_strings(["Lib", "lib", "Lib"]), ["Lib", "lib"]);
    }

    #[test]
    fn test_sort_fields_merges_and_dedupes() {
        assert_eq!(sort_fields(["b a", "c  a"]), ["a", "b", "c"]);
    }

    #[test]
    fn test_sort_fields_mixed_whitespace_and_byte_order() {
        let fields = sort_fields(["  -Wall\t-O2\n", "-DNDEBUG -Wall", ""]);
        assert_eq!(fields, ["-DNDEBUG", "-O2", "-Wall"]);
        // Upper case sorts before lower case.
        assert_eq!(sort_fields(["beta Alpha alpha"]), ["Alpha", "alpha", "beta"]);
    }

    #[test]
    fn test_sort_fields_no_input() {
        assert!(sort_fields(Vec::<&str>::new()).is_empty());
        assert!(sort_fields(["   "]).is_empty());
    }

    #[test]
    fn test_parse_equals_pair() {
        assert_eq!(
            parse_equals_pair("ARCH=cortex_m4").unwrap(),
            ("ARCH".to_string(), "cortex_m4".to_string())
        );
        assert_eq!(
            parse_equals_pair("EMPTY=").unwrap(),
            ("EMPTY".to_string(), String::new())
        );
        assert_eq!(
            parse_equals_pair("a=b=c").unwrap(),
            ("a".to_string(), "b".to_string())
        );
    }

    #[test]
    fn test_parse_equals_pair_requires_separator() {
        let err = parse_equals_pair("novalue").unwrap_err();
        assert!(err.to_string().contains("expected KEY=VALUE"));
    }
}
