//! Error document types

use super::violation::Violation;
use crate::types::{JsonObject, UNPROCESSABLE_ENTITY};
use serde::{Deserialize, Serialize};

/// Location of the offending value in the original request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSource {
    /// JSON pointer, e.g. `/page/number`
    pub pointer: String,
}

/// A single error record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// HTTP status code as a string (always `"422"` here)
    pub status: String,
    /// Short, fixed category string
    pub title: String,
    /// Human readable sentence
    pub detail: String,
    /// Where the error was found
    pub source: ErrorSource,
    /// Auxiliary machine readable values
    #[serde(default)]
    pub meta: JsonObject,
}

impl ErrorRecord {
    /// Create a 422 record
    pub fn new(
        title: impl Into<String>,
        detail: impl Into<String>,
        pointer: impl Into<String>,
        meta: JsonObject,
    ) -> Self {
        Self {
            status: UNPROCESSABLE_ENTITY.to_string(),
            title: title.into(),
            detail: detail.into(),
            source: ErrorSource {
                pointer: pointer.into(),
            },
            meta,
        }
    }

    /// Pointer of the offending value
    pub fn pointer(&self) -> &str {
        &self.source.pointer
    }
}

impl From<Violation> for ErrorRecord {
    fn from(violation: Violation) -> Self {
        violation.to_record()
    }
}

impl From<&Violation> for ErrorRecord {
    fn from(violation: &Violation) -> Self {
        violation.to_record()
    }
}

/// Ordered list of error records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorDocument {
    /// The records, in the order the violations were found
    pub errors: Vec<ErrorRecord>,
}

impl ErrorDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document holding exactly one violation
    pub fn single(violation: Violation) -> Self {
        Self {
            errors: vec![violation.to_record()],
        }
    }

    /// Append a record
    pub fn push(&mut self, record: impl Into<ErrorRecord>) {
        self.errors.push(record.into());
    }

    /// Append every record of another document, keeping order
    pub fn merge(&mut self, other: ErrorDocument) {
        self.errors.extend(other.errors);
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if the document holds no records
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The records
    pub fn records(&self) -> &[ErrorRecord] {
        &self.errors
    }

    /// Status to use for the response carrying this document
    pub fn status(&self) -> &'static str {
        UNPROCESSABLE_ENTITY
    }
}

impl From<Violation> for ErrorDocument {
    fn from(violation: Violation) -> Self {
        Self::single(violation)
    }
}

impl FromIterator<Violation> for ErrorDocument {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().map(ErrorRecord::from).collect(),
        }
    }
}

impl Extend<Violation> for ErrorDocument {
    fn extend<I: IntoIterator<Item = Violation>>(&mut self, iter: I) {
        self.errors.extend(iter.into_iter().map(ErrorRecord::from));
    }
}
