//! Pagination configuration
//!
//! Names the request parameters pagination is read from and written to.
//! The defaults (`page`, `number`, `size`) give the JSON:API shape
//! `{"page": {"number": 2, "size": 10}}` and `page[number]=2&page[size]=10`.
//!
//! # Example
//!
//! ```yaml
//! page_param: page
//! number_param: number
//! size_param: per_page
//! ```

use crate::document::json_pointer;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Parameter names used for pagination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Top-level parameter holding the page object
    #[serde(default = "default_page_param")]
    pub page_param: String,

    /// Child holding the page number
    #[serde(default = "default_number_param")]
    pub number_param: String,

    /// Child holding the page size
    #[serde(default = "default_size_param")]
    pub size_param: String,
}

fn default_page_param() -> String {
    "page".to_string()
}

fn default_number_param() -> String {
    "number".to_string()
}

fn default_size_param() -> String {
    "size".to_string()
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_param: default_page_param(),
            number_param: default_number_param(),
            size_param: default_size_param(),
        }
    }
}

impl PaginationConfig {
    /// Create a config with custom parameter names
    pub fn new(
        page_param: impl Into<String>,
        number_param: impl Into<String>,
        size_param: impl Into<String>,
    ) -> Self {
        Self {
            page_param: page_param.into(),
            number_param: number_param.into(),
            size_param: size_param.into(),
        }
    }

    /// Load and validate a config from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the names are usable
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("page_param", &self.page_param),
            ("number_param", &self.number_param),
            ("size_param", &self.size_param),
        ] {
            if value.is_empty() {
                return Err(Error::config(format!("{field} must not be empty")));
            }
        }

        if self.number_param == self.size_param {
            return Err(Error::config(format!(
                "number_param and size_param must differ (both '{}')",
                self.number_param
            )));
        }

        Ok(())
    }

    /// Pointer to the page object, e.g. `/page`
    pub fn page_pointer(&self) -> String {
        json_pointer([self.page_param.as_str()])
    }

    /// Pointer to the page number, e.g. `/page/number`
    pub fn number_pointer(&self) -> String {
        json_pointer([self.page_param.as_str(), self.number_param.as_str()])
    }

    /// Query key for the page number, e.g. `page[number]`
    pub fn number_key(&self) -> String {
        format!("{}[{}]", self.page_param, self.number_param)
    }

    /// Query key for the page size, e.g. `page[size]`
    pub fn size_key(&self) -> String {
        format!("{}[{}]", self.page_param, self.size_param)
    }
}
