/*
 * table.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Per-call fragment bookkeeping.
//!
//! A [`FragmentTable`] lives for one assembly call. It maps fragment names to
//! their first-seen record and keeps first-seen order in a separate list, so
//! emission order never depends on map iteration order.

use std::collections::HashMap;

use crate::error::{FragmentError, FragmentResult};
use crate::normalize::normalize;

/// A fragment definition as first seen during an assembly call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentRecord {
    name: String,
    raw_content: String,
    normalized_content: String,
}

impl FragmentRecord {
    /// Create a record, normalizing `raw_content` once.
    pub fn new(name: impl Into<String>, raw_content: impl Into<String>) -> Self {
        let raw_content = raw_content.into();
        let normalized_content = normalize(&raw_content);
        Self {
            name: name.into(),
            raw_content,
            normalized_content,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The exact text of the first occurrence.
    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    /// The whitespace-normalized text used for comparison.
    pub fn normalized_content(&self) -> &str {
        &self.normalized_content
    }
}

/// What [`FragmentTable::insert`] did with a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// First occurrence of this name; a record was stored.
    Inserted,
    /// Same name and same normalized content as a stored record.
    Duplicate,
}

/// Fragment records keyed by name, with explicit first-seen order.
#[derive(Debug, Default)]
pub struct FragmentTable {
    records: HashMap<String, FragmentRecord>,
    order: Vec<String>,
}

impl FragmentTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Record a fragment definition.
    ///
    /// A new name is stored and appended to the order list. A known name is
    /// compared by normalized content: equal content is a duplicate, different
    /// content is a [`FragmentError::Conflict`] and the table is left unchanged.
    pub fn insert(&mut self, name: &str, raw_content: &str) -> FragmentResult<InsertOutcome> {
        if let Some(existing) = self.records.get(name) {
            let normalized = normalize(raw_content);
            if existing.normalized_content == normalized {
                return Ok(InsertOutcome::Duplicate);
            }
            return Err(FragmentError::Conflict {
                name: name.to_string(),
                existing: existing.normalized_content.clone(),
                new: normalized,
            });
        }

        self.records
            .insert(name.to_string(), FragmentRecord::new(name, raw_content));
        self.order.push(name.to_string());
        Ok(InsertOutcome::Inserted)
    }

    /// Look up a record by fragment name.
    pub fn get(&self, name: &str) -> Option<&FragmentRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate records in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &FragmentRecord> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_normalizes_once() {
        let record = FragmentRecord::new("u", "fragment u on U {\n  id\n}");
        assert_eq!(record.name(), "u");
        assert_eq!(record.raw_content(), "fragment u on U {\n  id\n}");
        assert_eq!(record.normalized_content(), "fragment u on U { id }");
    }

    #[test]
    fn test_insert_new_names_keeps_order() {
        let mut table = FragmentTable::new();
        assert!(table.is_empty());

        for name in ["c", "a", "b"] {
            let text = format!("fragment {name} on T {{ id }}");
            assert_eq!(table.insert(name, &text), Ok(InsertOutcome::Inserted));
        }

        let names: Vec<&str> = table.iter().map(FragmentRecord::name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_duplicate_keeps_first_raw_content() {
        let mut table = FragmentTable::new();
        table.insert("f", "fragment f on T {\n  id\n}").unwrap();

        let outcome = table.insert("f", "fragment f on T { id }").unwrap();
        assert_eq!(outcome, InsertOutcome::Duplicate);
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get("f").map(FragmentRecord::raw_content),
            Some("fragment f on T {\n  id\n}")
        );
    }

    #[test]
    fn test_conflict_leaves_table_unchanged() {
        let mut table = FragmentTable::new();
        table.insert("f", "fragment f on T { a }").unwrap();

        let err = table.insert("f", "fragment f on T { b }").unwrap_err();
        assert_eq!(
            err,
            FragmentError::Conflict {
                name: "f".to_string(),
                existing: "fragment f on T { a }".to_string(),
                new: "fragment f on T { b }".to_string(),
            }
        );
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get("f").map(FragmentRecord::normalized_content),
            Some("fragment f on T { a }")
        );
    }

    #[test]
    fn test_contains() {
        let mut table = FragmentTable::new();
        table.insert("f", "fragment f on T { a }").unwrap();
        assert!(table.contains("f"));
        assert!(!table.contains("g"));
    }
}
