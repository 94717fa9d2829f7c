/*
 * template.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Template front end.
//!
//! [`GqlTemplate`] collects literal text and substituted values in call
//! order and hands them to the assembler. The [`gqls!`](crate::gqls) macro is
//! shorthand for the common case where the whole template is known at the
//! call site.
//!
//! The output of one template is an ordinary string, so it can be passed as
//! a value into another template. Fragments are deduplicated within a single
//! render only.

use crate::assembler::{Segment, assemble_segments};
use crate::error::FragmentResult;
use crate::options::AssembleOptions;

/// An ordered list of literal chunks and substituted values.
///
/// # Example
///
/// ```
/// use gqls::GqlTemplate;
///
/// let user = "fragment user on User { id name }";
///
/// let output = GqlTemplate::new()
///     .value(user)
///     .literal("\nquery { me { ...user } }")
///     .render()
///     .unwrap();
///
/// assert_eq!(output, "fragment user on User { id name }\n\nquery { me { ...user } }");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GqlTemplate {
    segments: Vec<Segment>,
}

impl GqlTemplate {
    /// Create an empty template.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Append literal template text.
    pub fn literal(mut self, text: impl Into<String>) -> Self {
        self.push_literal(text);
        self
    }

    /// Append a substituted value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.push_value(value);
        self
    }

    pub fn push_literal(&mut self, text: impl Into<String>) {
        self.segments.push(Segment::Literal(text.into()));
    }

    pub fn push_value(&mut self, value: impl Into<String>) {
        self.segments.push(Segment::Value(value.into()));
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Render with default options.
    pub fn render(&self) -> FragmentResult<String> {
        self.render_with(&AssembleOptions::default())
    }

    /// Render with the given options.
    pub fn render_with(&self, options: &AssembleOptions) -> FragmentResult<String> {
        assemble_segments(&self.segments, options)
    }
}

impl FromIterator<Segment> for GqlTemplate {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl Extend<Segment> for GqlTemplate {
    fn extend<I: IntoIterator<Item = Segment>>(&mut self, iter: I) {
        self.segments.extend(iter);
    }
}

/// Assemble a document from alternating literals and values.
///
/// Arguments alternate `literal, value, literal, ..., literal`, starting and
/// ending with a literal. Any other arity fails to compile. Values may be any
/// `impl Into<String>`; literals are usually string literals.
///
/// Prefix the arguments with `options;` to pass [`AssembleOptions`].
///
/// Returns [`FragmentResult<String>`](crate::FragmentResult).
///
/// # Example
///
/// ```
/// use gqls::{AssembleOptions, gqls};
///
/// let f = "fragment f on T {\n  id\n}";
///
/// let output = gqls!("", f, "\nquery{...f}").unwrap();
/// assert_eq!(output, "fragment f on T {\n  id\n}\n\nquery{...f}");
///
/// let options = AssembleOptions::new().with_normalize(true);
/// let output = gqls!(options; "", f, "\nquery{...f}").unwrap();
/// assert_eq!(output, "fragment f on T { id }\n\nquery{...f}");
/// ```
#[macro_export]
macro_rules! gqls {
    ($options:expr; $first:expr $(, $value:expr, $literal:expr)* $(,)?) => {{
        let mut template = $crate::GqlTemplate::new();
        template.push_literal($first);
        $(
            template.push_value($value);
            template.push_literal($literal);
        )*
        template.render_with(&$options)
    }};
    ($first:expr $(, $value:expr, $literal:expr)* $(,)?) => {
        $crate::gqls!($crate::AssembleOptions::default(); $first $(, $value, $literal)*)
    };
}
