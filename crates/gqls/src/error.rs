/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for fragment assembly.

use thiserror::Error;

/// Errors that can occur while assembling a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    /// The same fragment name was seen twice with different normalized content.
    ///
    /// Both `existing` and `new` hold the normalized form.
    #[error(
        "Fragment \"{name}\" defined twice with different selection sets.\nExisting: {existing}\nNew: {new}"
    )]
    Conflict {
        name: String,
        existing: String,
        new: String,
    },

    /// Literal chunks and substituted values do not interleave.
    ///
    /// A call needs exactly one more literal chunk than substituted values.
    #[error(
        "Expected {} literal chunks for {values} substituted values, got {literals}",
        .values + 1
    )]
    SegmentMismatch { literals: usize, values: usize },
}

impl FragmentError {
    /// Name of the conflicting fragment, if this is a conflict.
    pub fn fragment_name(&self) -> Option<&str> {
        match self {
            FragmentError::Conflict { name, .. } => Some(name),
            FragmentError::SegmentMismatch { .. } => None,
        }
    }
}

/// Result type for fragment assembly.
pub type FragmentResult<T> = Result<T, FragmentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message() {
        let err = FragmentError::Conflict {
            name: "user".to_string(),
            existing: "fragment user on User { id }".to_string(),
            new: "fragment user on User { name }".to_string(),
        };

        insta::assert_snapshot!(err.to_string(), @r#"
        Fragment "user" defined twice with different selection sets.
        Existing: fragment user on User { id }
        New: fragment user on User { name }
        "#);
        assert_eq!(err.fragment_name(), Some("user"));
    }

    #[test]
    fn test_segment_mismatch_message() {
        let err = FragmentError::SegmentMismatch {
            literals: 1,
            values: 2,
        };
        assert_eq!(
            err.to_string(),
            "Expected 3 literal chunks for 2 substituted values, got 1"
        );
        assert_eq!(err.fragment_name(), None);
    }
}
