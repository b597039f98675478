//! Violation taxonomy
//!
//! Every structural problem this crate can report to a client.

use super::types::ErrorRecord;
use crate::types::JsonObject;
use serde_json::json;
use thiserror::Error;

/// A single reportable problem with the pagination parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("`{pointer}` type is not object")]
    NotAnObject { pointer: String },

    #[error("`{}` is missing", child_pointer(.pointer, .child))]
    MissingChild { pointer: String, child: String },

    #[error("`{pointer}` type is not integer")]
    NotAnInteger { pointer: String },

    #[error("`{pointer}` type is not quoted integer")]
    NotAQuotedInteger { pointer: String },

    #[error("`{pointer}` has excess text `{excess}` after quoted integer {integer}")]
    ExcessTextAfterQuotedInteger {
        pointer: String,
        integer: i64,
        excess: String,
    },

    #[error("`{pointer}` type is not positive integer")]
    NotAPositiveInteger { pointer: String },

    #[error("Page number ({number}) must be between 1 and the page count ({count})")]
    PageNumberOutOfRange {
        pointer: String,
        number: u64,
        count: u64,
    },
}

impl Violation {
    /// Short, fixed category string
    pub fn title(&self) -> &'static str {
        match self {
            Self::NotAnObject { .. }
            | Self::NotAnInteger { .. }
            | Self::NotAQuotedInteger { .. }
            | Self::NotAPositiveInteger { .. } => "Type is wrong",
            Self::MissingChild { .. } => "Child missing",
            Self::ExcessTextAfterQuotedInteger { .. } => "Excess text in quoted integer",
            Self::PageNumberOutOfRange { .. } => {
                "Page number must be between 1 and the page count"
            }
        }
    }

    /// JSON pointer reported as the record source.
    ///
    /// For a missing child this is the parent object, since the child itself
    /// does not exist.
    pub fn pointer(&self) -> &str {
        match self {
            Self::NotAnObject { pointer }
            | Self::MissingChild { pointer, .. }
            | Self::NotAnInteger { pointer }
            | Self::NotAQuotedInteger { pointer }
            | Self::ExcessTextAfterQuotedInteger { pointer, .. }
            | Self::NotAPositiveInteger { pointer }
            | Self::PageNumberOutOfRange { pointer, .. } => pointer,
        }
    }

    /// Machine readable metadata
    pub fn meta(&self) -> JsonObject {
        let meta = match self {
            Self::NotAnObject { .. } => json!({"type": "object"}),
            Self::MissingChild { child, .. } => json!({"child": child}),
            Self::NotAnInteger { .. } => json!({"type": "integer"}),
            Self::NotAQuotedInteger { .. } => json!({"type": "quoted integer"}),
            Self::ExcessTextAfterQuotedInteger {
                integer, excess, ..
            } => json!({"excess": excess, "integer": integer, "type": "quoted integer"}),
            Self::NotAPositiveInteger { .. } => json!({"type": "positive integer"}),
            Self::PageNumberOutOfRange { number, count, .. } => {
                json!({"count": count, "number": number})
            }
        };

        match meta {
            serde_json::Value::Object(map) => map,
            _ => JsonObject::new(),
        }
    }

    /// Build the error record for this violation
    pub fn to_record(&self) -> ErrorRecord {
        ErrorRecord::new(self.title(), self.to_string(), self.pointer(), self.meta())
    }
}

/// Build a JSON pointer (RFC 6901) from unescaped reference tokens
pub fn json_pointer<'a>(tokens: impl IntoIterator<Item = &'a str>) -> String {
    let mut pointer = String::new();
    for token in tokens {
        pointer.push('/');
        pointer.push_str(&escape_token(token));
    }
    pointer
}

/// Pointer to a named child of the object at `parent`
pub(crate) fn child_pointer(parent: &str, child: &str) -> String {
    format!("{parent}/{}", escape_token(child))
}

fn escape_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}
