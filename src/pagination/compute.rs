//! Page boundary arithmetic

use super::types::Pagination;
use crate::config::PaginationConfig;
use crate::document::{ErrorDocument, Violation};
use crate::page::Page;
use std::num::NonZeroU64;
use tracing::debug;

/// Number of pages needed for `total_size` items.
///
/// There is always at least one page, even for an empty collection.
pub fn count(size: NonZeroU64, total_size: u64) -> NonZeroU64 {
    NonZeroU64::new(total_size.div_ceil(size.get())).unwrap_or(NonZeroU64::MIN)
}

/// Page 1
pub fn first(page: &Page) -> Page {
    Page::from_parts(NonZeroU64::MIN, page.non_zero_size())
}

/// The page numbered `count`
pub fn last(page: &Page, count: NonZeroU64) -> Page {
    Page::from_parts(count, page.non_zero_size())
}

/// The page after `page`, unless `page` is the last one or beyond it
pub fn next(page: &Page, count: NonZeroU64) -> Option<Page> {
    if page.non_zero_number() >= count {
        return None;
    }
    page.non_zero_number()
        .checked_add(1)
        .map(|number| Page::from_parts(number, page.non_zero_size()))
}

/// The page before `page`, unless `page` is the first one
pub fn previous(page: &Page) -> Option<Page> {
    NonZeroU64::new(page.number() - 1).map(|number| Page::from_parts(number, page.non_zero_size()))
}

/// Compute the pagination for `page` using the default parameter names
pub fn to_pagination(page: &Page, total_size: u64) -> Result<Pagination, ErrorDocument> {
    to_pagination_with(&PaginationConfig::default(), page, total_size)
}

/// Compute the pagination for `page` over `total_size` items.
///
/// Fails with a single record pointing at the page number when the page is
/// past the last one.
pub fn to_pagination_with(
    config: &PaginationConfig,
    page: &Page,
    total_size: u64,
) -> Result<Pagination, ErrorDocument> {
    let count = count(page.non_zero_size(), total_size);

    if page.non_zero_number() > count {
        debug!(
            number = page.number(),
            count = count.get(),
            "page number out of range"
        );
        return Err(ErrorDocument::single(Violation::PageNumberOutOfRange {
            pointer: config.number_pointer(),
            number: page.number(),
            count: count.get(),
        }));
    }

    Ok(Pagination {
        first: first(page),
        last: last(page, count),
        next: next(page, count),
        previous: previous(page),
        total_size,
    })
}
