// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # jsonapi-pagination
//!
//! Page-based pagination for JSON:API style requests.
//!
//! ## Features
//!
//! - **Params validation**: read `{"page": {"number": .., "size": ..}}` out of
//!   untrusted parameters, telling apart no pagination, an explicit opt-out,
//!   a valid page and a malformed one
//! - **Error documents**: every violation becomes a 422 error record with a
//!   JSON pointer, ready to be used as a response body
//! - **Query strings**: read and write `page[number]=2&page[size]=10`
//! - **Pagination**: page count plus first, last, next and previous pages
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonapi_pagination::{from_params, to_pagination, to_query, PageRequest};
//! use serde_json::json;
//!
//! let params = json!({"page": {"number": "2", "size": 10}});
//! let params = params.as_object().unwrap();
//!
//! match from_params(params) {
//!     Ok(PageRequest::Page(page)) => {
//!         let pagination = to_pagination(&page, 45).unwrap();
//!         assert_eq!(pagination.page_count(), 5);
//!         let next = pagination.next.unwrap();
//!         assert_eq!(to_query(&next), "page%5Bnumber%5D=3&page%5Bsize%5D=10");
//!     }
//!     Ok(PageRequest::NoPagination | PageRequest::OptOut) => unreachable!(),
//!     Err(errors) => panic!("{errors:?}"),
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! params ──► params::from_params ──┐
//!                                  ├──► Page ──► pagination::to_pagination ──► Pagination
//! query  ──► query::from_query ────┘                         │
//!                                                            └──► ErrorDocument (422)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// JSON:API error documents
pub mod document;

/// Declarative field extraction
pub mod fields;

/// Page entity and integer converters
pub mod page;

/// Parameter map validation and serialization
pub mod params;

/// Query string codec
pub mod query;

/// Page count and neighboring pages
pub mod pagination;

/// Parameter name configuration
pub mod config;

/// Configured entry point
pub mod codec;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use codec::PageCodec;
pub use config::PaginationConfig;
pub use document::{ErrorDocument, ErrorRecord, ErrorSource, Violation};
pub use page::Page;
pub use pagination::{to_pagination, Pagination};
pub use params::{from_params, to_params, PageRequest};
pub use query::{from_query, to_query};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
