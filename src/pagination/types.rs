//! Pagination types

use crate::page::Page;
use serde::Serialize;

/// Neighboring pages of a request, used to build navigation links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Always page 1
    pub first: Page,
    /// The page numbered by the page count
    pub last: Page,
    /// Present when the requested page is before the last page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Page>,
    /// Present when the requested page is after the first page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<Page>,
    /// Total number of items across all pages
    pub total_size: u64,
}

impl Pagination {
    /// Number of pages
    pub fn page_count(&self) -> u64 {
        self.last.number()
    }

    /// Size shared by every page
    pub fn page_size(&self) -> u64 {
        self.first.size()
    }
}
