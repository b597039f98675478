//! Configured pagination codec
//!
//! [`PageCodec`] carries one [`PaginationConfig`] and exposes every
//! pagination operation under it, so callers with custom parameter names
//! configure them once.

use crate::config::PaginationConfig;
use crate::document::ErrorDocument;
use crate::error::Result;
use crate::page::Page;
use crate::pagination::{self, Pagination};
use crate::params::{self, PageRequest};
use crate::query;
use crate::types::JsonObject;
use url::Url;

/// Reads, writes and paginates pages using one set of parameter names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageCodec {
    config: PaginationConfig,
}

impl PageCodec {
    /// Create a codec, checking that the config is usable
    pub fn new(config: PaginationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a codec from a YAML config
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(Self {
            config: PaginationConfig::from_yaml_str(yaml)?,
        })
    }

    /// The parameter names in use
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Read the page request from decoded parameters
    pub fn parse_params(
        &self,
        params: &JsonObject,
    ) -> std::result::Result<PageRequest, ErrorDocument> {
        params::from_params_with(&self.config, params)
    }

    /// Write the page request as parameters
    pub fn to_params(&self, request: &PageRequest) -> JsonObject {
        params::to_params_with(&self.config, request)
    }

    /// Read a page from a query string
    pub fn parse_query(&self, query: &str) -> Result<Option<Page>> {
        query::from_query_with(&self.config, query)
    }

    /// Read a page from the query of a URL
    pub fn parse_url(&self, url: &Url) -> Result<Option<Page>> {
        query::from_url_with(&self.config, url)
    }

    /// Write a page as a query string
    pub fn to_query(&self, page: &Page) -> String {
        query::to_query_with(&self.config, page)
    }

    /// Point a URL at a page
    pub fn set_on_url(&self, url: &mut Url, page: &Page) {
        query::set_on_url_with(&self.config, url, page);
    }

    /// Compute the pagination for `page` over `total_size` items
    pub fn to_pagination(
        &self,
        page: &Page,
        total_size: u64,
    ) -> std::result::Result<Pagination, ErrorDocument> {
        pagination::to_pagination_with(&self.config, page, total_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn test_new_rejects_bad_config() {
        let err = PageCodec::new(PaginationConfig::new("", "number", "size")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_custom_codec_end_to_end() {
        let codec = PageCodec::from_yaml_str("page_param: p\nsize_param: limit\n").unwrap();

        let params = match json!({"p": {"number": "2", "limit": 5}}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        let page = codec.parse_params(&params).unwrap().page().unwrap();
        assert_eq!(page, Page::new(2, 5).unwrap());

        let query = codec.to_query(&page);
        assert_eq!(query, "p%5Bnumber%5D=2&p%5Blimit%5D=5");
        assert_eq!(codec.parse_query(&query).unwrap(), Some(page));

        let errors = codec.to_pagination(&page, 5).unwrap_err();
        assert_eq!(errors.records()[0].pointer(), "/p/number");

        let pagination = codec.to_pagination(&page, 12).unwrap();
        assert_eq!(pagination.page_count(), 3);

        let mut url = Url::parse("https://example.com/items").unwrap();
        codec.set_on_url(&mut url, &pagination.last);
        assert_eq!(codec.parse_url(&url).unwrap(), Some(pagination.last));
        assert_eq!(
            json!(codec.to_params(&PageRequest::OptOut)),
            json!({"p": null})
        );
    }

    #[test]
    fn test_default_codec() {
        let codec = PageCodec::default();
        assert_eq!(codec.config(), &PaginationConfig::default());
    }
}
