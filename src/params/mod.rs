//! Params module
//!
//! Reads a page request out of a decoded parameter map and writes it back.
//!
//! # Overview
//!
//! | Parameters                               | Outcome                        |
//! |------------------------------------------|--------------------------------|
//! | no `page` key                            | `Ok(PageRequest::NoPagination)` |
//! | `{"page": null}`                         | `Ok(PageRequest::OptOut)`       |
//! | `{"page": {"number": 2, "size": "10"}}`  | `Ok(PageRequest::Page(..))`     |
//! | anything else                            | `Err(ErrorDocument)`            |
//!
//! The number and size are validated independently, so a request with both
//! children wrong gets one record per child.

mod types;
mod validator;

pub use types::PageRequest;
pub use validator::{from_params, from_params_with, to_params, to_params_with};
