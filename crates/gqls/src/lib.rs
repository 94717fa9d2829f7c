/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! GraphQL document composition from fragments and literal template text.
//!
//! A template is a sequence of literal text chunks interleaved with
//! substituted values. Some values are fragment definitions
//! (`fragment <Name> on <Type> { ... }`). Assembling a template:
//!
//! - Hoists every fragment definition to the top of the output, once per name,
//!   in first-seen order
//! - Treats two definitions of the same name as the same fragment when they
//!   differ only in whitespace
//! - Fails with [`FragmentError::Conflict`] when they differ in anything else
//! - Reproduces the literal text verbatim, with non-fragment values inlined
//!   where they appear
//!
//! Fragment bodies are opaque text. Nothing here parses or validates GraphQL.
//!
//! # Example
//!
//! ```
//! use gqls::gqls;
//!
//! let user_fields = "fragment userFields on User {\n  id\n  name\n}";
//!
//! let query = gqls!(
//!     "",
//!     user_fields,
//!     "\n",
//!     user_fields,
//!     "\nquery { me { ...userFields } }"
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     query,
//!     "fragment userFields on User {\n  id\n  name\n}\n\n\nquery { me { ...userFields } }"
//! );
//! ```

pub mod assembler;
pub mod error;
pub mod name;
pub mod normalize;
pub mod options;
pub mod table;
pub mod template;

// Re-export main types at crate root
pub use assembler::{Segment, assemble, assemble_segments, assemble_with};
pub use error::{FragmentError, FragmentResult};
pub use name::extract_fragment_name;
pub use normalize::normalize;
pub use options::AssembleOptions;
pub use table::{FragmentRecord, FragmentTable, InsertOutcome};
pub use template::GqlTemplate;
