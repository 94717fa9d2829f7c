/*
 * normalize.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Whitespace canonicalization for fragment comparison.
//!
//! Two fragment bodies that differ only in indentation, line breaks, or the
//! length of whitespace runs between tokens normalize to the same string.
//! Everything else, comments included, is kept as-is.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static OPEN_BRACE_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\s+").unwrap());

static SPACE_CLOSE_BRACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+\}").unwrap());

static OPEN_PAREN_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\s+").unwrap());

static SPACE_CLOSE_PAREN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+\)").unwrap());

/// Normalize fragment text for equality comparison.
///
/// # Behavior
///
/// - Every whitespace run becomes a single space
/// - Whitespace after `{` and before `}` becomes a single space
/// - Whitespace after `(` and before `)` is removed
/// - The result is trimmed
///
/// # Example
///
/// ```
/// use gqls::normalize;
///
/// assert_eq!(
///     normalize("fragment u on U {\n  id\n  name\n}"),
///     "fragment u on U { id name }"
/// );
/// ```
pub fn normalize(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    let collapsed = OPEN_BRACE_SPACE.replace_all(&collapsed, "{ ");
    let collapsed = SPACE_CLOSE_BRACE.replace_all(&collapsed, " }");
    let collapsed = OPEN_PAREN_SPACE.replace_all(&collapsed, "(");
    let collapsed = SPACE_CLOSE_PAREN.replace_all(&collapsed, ")");
    collapsed.trim().to_string()
}
