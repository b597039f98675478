//! Error document module
//!
//! Client-facing validation failures, shaped as a JSON:API error document:
//!
//! ```json
//! {"errors": [{"status": "422", "title": "...", "detail": "...",
//!              "source": {"pointer": "/page/number"}, "meta": {...}}]}
//! ```
//!
//! # Overview
//!
//! Each distinct violation is a [`Violation`] value. Its `Display` output is the
//! human readable `detail`; [`Violation::to_record`] attaches the title, source
//! pointer and machine readable metadata. Documents are built fresh per failure
//! and never mutated after being returned to the caller.

mod types;
mod violation;

pub use types::{ErrorDocument, ErrorRecord, ErrorSource};
pub use violation::{json_pointer, Violation};
