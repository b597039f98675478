//! Pagination module
//!
//! Computes page counts and neighboring pages for a requested [`Page`] and a
//! total item count.
//!
//! # Overview
//!
//! The numeric helpers ([`count`], [`first`], [`last`], [`next`],
//! [`previous`]) are total over valid pages. [`to_pagination`] combines them
//! after checking that the requested page exists, and reports an
//! out-of-range page number as an error document.
//!
//! [`Page`]: crate::page::Page

mod compute;
mod types;

pub use compute::{count, first, last, next, previous, to_pagination, to_pagination_with};
pub use types::Pagination;
