/*
 * assembler.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Document assembly.
//!
//! An assembly call walks the substituted values of one template, hoists
//! every fragment definition to the top of the output (once per name, in
//! first-seen order) and reproduces the literal text around them verbatim.
//!
//! ```text
//! literals: ["", "\nquery{...f}"]
//! values:   ["fragment f on T { id }"]
//!
//! output:   "fragment f on T { id }\n" + "" + "" + "\nquery{...f}"
//!            ^ fragment block             ^ skeleton
//! ```
//!
//! Each call builds a fresh [`FragmentTable`]. Nothing is shared between
//! calls.

use tracing::{debug, trace};

use crate::error::{FragmentError, FragmentResult};
use crate::name::extract_fragment_name;
use crate::options::AssembleOptions;
use crate::table::{FragmentTable, InsertOutcome};

/// One piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Template text, emitted verbatim.
    Literal(String),
    /// A value supplied at call time. May or may not be a fragment definition.
    Value(String),
}

impl Segment {
    pub fn literal(text: impl Into<String>) -> Self {
        Segment::Literal(text.into())
    }

    pub fn value(text: impl Into<String>) -> Self {
        Segment::Value(text.into())
    }
}

/// Assemble a document with default options.
///
/// `literals` must hold exactly one more chunk than `values`:
/// `lit, value, lit, value, ..., lit`.
///
/// # Example
///
/// ```
/// use gqls::assemble;
///
/// let output = assemble(&["", "\nquery{...f}"], &["fragment f on T { id }"]).unwrap();
/// assert_eq!(output, "fragment f on T { id }\n\nquery{...f}");
/// ```
pub fn assemble<L, V>(literals: &[L], values: &[V]) -> FragmentResult<String>
where
    L: AsRef<str>,
    V: AsRef<str>,
{
    assemble_with(literals, values, &AssembleOptions::default())
}

/// Assemble a document.
///
/// # Errors
///
/// - [`FragmentError::Conflict`] when two values define the same fragment
///   name with different normalized content. No partial output is produced.
/// - [`FragmentError::SegmentMismatch`] when the chunk counts do not
///   interleave.
pub fn assemble_with<L, V>(
    literals: &[L],
    values: &[V],
    options: &AssembleOptions,
) -> FragmentResult<String>
where
    L: AsRef<str>,
    V: AsRef<str>,
{
    if literals.len() != values.len() + 1 {
        return Err(FragmentError::SegmentMismatch {
            literals: literals.len(),
            values: values.len(),
        });
    }

    let mut table = FragmentTable::new();
    let hoisted = collect_fragments(values, &mut table)?;

    let mut output = String::with_capacity(
        literals.iter().map(|l| l.as_ref().len()).sum::<usize>()
            + values.iter().map(|v| v.as_ref().len() + 1).sum::<usize>(),
    );

    for record in table.iter() {
        if options.normalize {
            output.push_str(record.normalized_content());
        } else {
            output.push_str(record.raw_content());
        }
        output.push('\n');
    }

    output.push_str(literals[0].as_ref());
    for ((value, is_fragment), literal) in values.iter().zip(&hoisted).zip(&literals[1..]) {
        if !is_fragment {
            output.push_str(value.as_ref());
        }
        output.push_str(literal.as_ref());
    }

    debug!(
        fragments = table.len(),
        values = values.len(),
        output_len = output.len(),
        "Assembled document"
    );

    Ok(output)
}

/// Assemble a document from an arbitrary sequence of segments.
///
/// Adjacent literals are joined and an empty literal is implied between
/// adjacent values, so every sequence has a well-formed interleaving.
pub fn assemble_segments(segments: &[Segment], options: &AssembleOptions) -> FragmentResult<String> {
    let (literals, values) = interleave(segments);
    assemble_with(&literals, &values, options)
}

/// Split segments into `k + 1` literal chunks and `k` values.
pub(crate) fn interleave(segments: &[Segment]) -> (Vec<String>, Vec<String>) {
    let mut literals = vec![String::new()];
    let mut values = Vec::new();

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(last) = literals.last_mut() {
                    last.push_str(text);
                }
            }
            Segment::Value(text) => {
                values.push(text.clone());
                literals.push(String::new());
            }
        }
    }

    (literals, values)
}

/// Classify each value and record its fragment, if any.
///
/// Returns one flag per value: `true` when the value is a fragment
/// definition and must be left out of the skeleton.
fn collect_fragments<V: AsRef<str>>(
    values: &[V],
    table: &mut FragmentTable,
) -> FragmentResult<Vec<bool>> {
    let mut hoisted = Vec::with_capacity(values.len());

    for (index, value) in values.iter().enumerate() {
        let value = value.as_ref();
        let Some(name) = extract_fragment_name(value) else {
            trace!(index, "Passing value through");
            hoisted.push(false);
            continue;
        };

        match table.insert(name, value) {
            Ok(InsertOutcome::Inserted) => {
                trace!(index, fragment = name, "Collected fragment");
            }
            Ok(InsertOutcome::Duplicate) => {
                debug!(index, fragment = name, "Skipping duplicate fragment");
            }
            Err(err) => {
                debug!(index, fragment = name, "Conflicting fragment definition");
                return Err(err);
            }
        }
        hoisted.push(true);
    }

    Ok(hoisted)
}
