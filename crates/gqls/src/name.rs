/*
 * name.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Fragment name extraction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex pattern for a fragment definition header.
///
/// Matches `fragment <name> on <Type>` with any whitespace between the
/// words. Captures the fragment name in group 1.
///
/// The keyword must stand on its own (`fragmentedData` does not match) and
/// the `on` clause is required. That filters text like `# fragment below`,
/// but any text shaped like `fragment <word> on <word>` matches, comments
/// included: `# this fragment is on hold` yields the name `is`.
static FRAGMENT_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bfragment\s+(\S+)\s+on\s+\S").unwrap());

/// Extract the declared name of the first fragment definition in `text`.
///
/// Returns `None` when the text holds no fragment definition, e.g. an
/// operation, a field list, or arbitrary content. Only the first match is
/// used; a value is expected to define at most one fragment.
///
/// # Example
///
/// ```
/// use gqls::extract_fragment_name;
///
/// assert_eq!(extract_fragment_name("fragment user on User { id }"), Some("user"));
/// assert_eq!(extract_fragment_name("query { me { id } }"), None);
/// ```
pub fn extract_fragment_name(text: &str) -> Option<&str> {
    FRAGMENT_HEADER
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str())
}
