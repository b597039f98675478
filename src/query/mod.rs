//! Query module
//!
//! Reads and writes pages as URL query strings:
//! `page%5Bnumber%5D=2&page%5Bsize%5D=10`.
//!
//! # Overview
//!
//! Query strings are produced by this crate when building links, so they are
//! trusted. Decoding performs no structural validation: a page is only
//! recognized when both keys are present, and a value that is not an integer
//! is a fatal [`Error`](crate::Error), not an error document.

mod codec;

pub use codec::{
    from_query, from_query_with, from_uri, from_url, from_url_with, set_on_url, set_on_url_with,
    to_query, to_query_with,
};
