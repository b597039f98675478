//! Page request types

use crate::page::Page;

/// A successfully read pagination request
///
/// Together with the `Err(ErrorDocument)` arm of the parse result this forms
/// the four mutually exclusive outcomes of reading the parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageRequest {
    /// No page parameter at all
    NoPagination,
    /// Page parameter explicitly null: return the whole collection
    OptOut,
    /// A well formed page
    Page(Page),
}

impl PageRequest {
    /// The requested page, if any
    pub fn page(&self) -> Option<Page> {
        match self {
            Self::Page(page) => Some(*page),
            Self::NoPagination | Self::OptOut => None,
        }
    }

    /// Check if pagination was explicitly disabled
    pub fn is_opt_out(&self) -> bool {
        matches!(self, Self::OptOut)
    }

    /// Check if no pagination was requested
    pub fn is_no_pagination(&self) -> bool {
        matches!(self, Self::NoPagination)
    }
}

impl From<Page> for PageRequest {
    fn from(page: Page) -> Self {
        Self::Page(page)
    }
}

impl From<Option<Page>> for PageRequest {
    /// `None` maps to [`PageRequest::NoPagination`]
    fn from(page: Option<Page>) -> Self {
        page.map_or(Self::NoPagination, Self::Page)
    }
}
