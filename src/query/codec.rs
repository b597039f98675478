//! Query string codec

use crate::config::PaginationConfig;
use crate::error::{Error, Result};
use crate::page::Page;
use tracing::{debug, trace, warn};
use url::{form_urlencoded, Url};

/// Read a page from a query string using the default parameter names
pub fn from_query(query: &str) -> Result<Option<Page>> {
    from_query_with(&PaginationConfig::default(), query)
}

/// Read a page from a query string.
///
/// A leading `?` is ignored. Later occurrences of a key override earlier
/// ones. Returns `Ok(None)` unless both the number and the size are present.
pub fn from_query_with(config: &PaginationConfig, query: &str) -> Result<Option<Page>> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let number_key = config.number_key();
    let size_key = config.size_key();

    let mut number = None;
    let mut size = None;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if key == number_key.as_str() {
            number = Some(parse_integer(&key, &value)?);
        } else if key == size_key.as_str() {
            size = Some(parse_integer(&key, &value)?);
        } else {
            trace!(key = %key, "ignoring query parameter");
        }
    }

    match (number, size) {
        (Some(number), Some(size)) => Page::from_signed(number, size).map(Some),
        (number, size) => {
            debug!(
                has_number = number.is_some(),
                has_size = size.is_some(),
                "no page in query"
            );
            Ok(None)
        }
    }
}

/// Read a page from the query of a URL using the default parameter names
pub fn from_url(url: &Url) -> Result<Option<Page>> {
    from_url_with(&PaginationConfig::default(), url)
}

/// Read a page from the query of a URL
pub fn from_url_with(config: &PaginationConfig, url: &Url) -> Result<Option<Page>> {
    match url.query() {
        Some(query) => from_query_with(config, query),
        None => Ok(None),
    }
}

/// Parse a URI and read a page from its query
pub fn from_uri(uri: &str) -> Result<Option<Page>> {
    from_url(&Url::parse(uri)?)
}

/// Write a page as a query string using the default parameter names
pub fn to_query(page: &Page) -> String {
    to_query_with(&PaginationConfig::default(), page)
}

/// Write a page as a percent-encoded query string
pub fn to_query_with(config: &PaginationConfig, page: &Page) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(&config.number_key(), &page.number().to_string())
        .append_pair(&config.size_key(), &page.size().to_string())
        .finish()
}

/// Point a URL at a page using the default parameter names
pub fn set_on_url(url: &mut Url, page: &Page) {
    set_on_url_with(&PaginationConfig::default(), url, page);
}

/// Point a URL at a page, replacing any page parameters it already has and
/// keeping every other query parameter in order
pub fn set_on_url_with(config: &PaginationConfig, url: &mut Url, page: &Page) {
    let number_key = config.number_key();
    let size_key = config.size_key();

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != number_key.as_str() && key != size_key.as_str())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(&number_key, &page.number().to_string())
        .append_pair(&size_key, &page.size().to_string());
}

fn parse_integer(key: &str, value: &str) -> Result<i64> {
    value.parse::<i64>().map_err(|_| {
        warn!(key, value, "query page parameter is not an integer");
        Error::query_integer(key, value)
    })
}
