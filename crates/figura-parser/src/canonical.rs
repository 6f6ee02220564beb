//! Canonicalization of records.
//!
//! Keys and top-level text values are stripped of every whitespace character
//! and lowercased. Numbers, booleans, nulls and lists pass through unchanged.
//! When two keys collapse onto the same canonical key, the later one wins.

use std::ops::Deref;

use crate::record::{Record, Value};

/// A record whose keys and text values are in canonical form.
///
/// Only [`canonicalize`] produces one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CanonicalRecord(Record);

impl CanonicalRecord {
    /// Returns the underlying record.
    pub fn into_record(self) -> Record {
        self.0
    }
}

impl Deref for CanonicalRecord {
    type Target = Record;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Canonical form of a piece of text: no whitespace, lowercase.
///
/// # Examples
///
/// ```
/// use figura_parser::canonical::canonical_text;
///
/// assert_eq!(canonical_text(" Double Arrow\t"), "doublearrow");
/// assert_eq!(canonical_text("Light Blue"), "lightblue");
/// ```
pub fn canonical_text(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Canonicalize a record. Pure and idempotent.
pub fn canonicalize(record: &Record) -> CanonicalRecord {
    let mut canonical = Record::new();
    for (name, value) in record.iter() {
        let value = match value {
            Value::Text(text) => Value::Text(canonical_text(text)),
            other => other.clone(),
        };
        canonical.insert(canonical_text(name), value);
    }
    if let Some(span) = record.span() {
        canonical = canonical.with_span(span);
    }
    CanonicalRecord(canonical)
}
