//! Field descriptors
//!
//! Declarative validation of the children of a JSON object. Each [`Field`]
//! names a child, says whether it must be present and how to convert it.
//! [`extract`] folds over the descriptors and either returns every converted
//! value or an [`ErrorDocument`] holding one record per failing field.

use crate::document::{json_pointer, ErrorDocument, Violation};
use crate::types::{JsonObject, JsonValue};
use tracing::trace;

/// Converts a child value found at `pointer`
pub type Convert<T> = fn(pointer: &str, value: &JsonValue) -> Result<T, Violation>;

/// Describes one child field of an object
#[derive(Clone, Copy)]
pub struct Field<'a, T> {
    /// Key of the child in the parent object
    pub name: &'a str,
    /// Whether a missing child is a violation
    pub required: bool,
    /// Conversion applied to the child value
    pub convert: Convert<T>,
}

impl<'a, T> Field<'a, T> {
    /// A child that must be present
    pub fn required(name: &'a str, convert: Convert<T>) -> Self {
        Self {
            name,
            required: true,
            convert,
        }
    }

    /// A child that may be absent
    pub fn optional(name: &'a str, convert: Convert<T>) -> Self {
        Self {
            name,
            required: false,
            convert,
        }
    }
}

/// Extract every described field from `object`, located at `pointer`.
///
/// Values come back in descriptor order; an absent optional field yields
/// `None`. Failures do not short-circuit: every failing field contributes its
/// own record to the returned document.
pub fn extract<T>(
    pointer: &str,
    object: &JsonObject,
    fields: &[Field<'_, T>],
) -> Result<Vec<Option<T>>, ErrorDocument> {
    let mut values = Vec::with_capacity(fields.len());
    let mut errors = ErrorDocument::new();

    for field in fields {
        match object.get(field.name) {
            None if field.required => {
                trace!(pointer, child = field.name, "required child missing");
                errors.push(Violation::MissingChild {
                    pointer: pointer.to_string(),
                    child: field.name.to_string(),
                });
            }
            None => values.push(None),
            Some(value) => {
                let child = format!("{pointer}{}", json_pointer([field.name]));
                match (field.convert)(&child, value) {
                    Ok(converted) => values.push(Some(converted)),
                    Err(violation) => {
                        trace!(pointer = %child, %violation, "child rejected");
                        errors.push(violation);
                    }
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}
