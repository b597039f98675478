//! Params validation and serialization

use super::types::PageRequest;
use crate::config::PaginationConfig;
use crate::document::{ErrorDocument, Violation};
use crate::fields::{self, Field};
use crate::page::{positive_integer, Page};
use crate::types::{JsonObject, JsonValue};
use serde_json::json;
use std::num::NonZeroU64;
use tracing::debug;

/// Read the page request from `params` using the default parameter names
pub fn from_params(params: &JsonObject) -> Result<PageRequest, ErrorDocument> {
    from_params_with(&PaginationConfig::default(), params)
}

/// Read the page request from `params`
pub fn from_params_with(
    config: &PaginationConfig,
    params: &JsonObject,
) -> Result<PageRequest, ErrorDocument> {
    let page_pointer = config.page_pointer();

    let object = match params.get(&config.page_param) {
        None => {
            debug!(param = %config.page_param, "no pagination requested");
            return Ok(PageRequest::NoPagination);
        }
        Some(JsonValue::Null) => {
            debug!(param = %config.page_param, "pagination disabled by request");
            return Ok(PageRequest::OptOut);
        }
        Some(JsonValue::Object(object)) => object,
        Some(_) => {
            debug!(pointer = %page_pointer, "page parameter is not an object");
            return Err(ErrorDocument::single(Violation::NotAnObject {
                pointer: page_pointer,
            }));
        }
    };

    let descriptors: [Field<'_, NonZeroU64>; 2] = [
        Field::required(&config.number_param, positive_integer),
        Field::required(&config.size_param, positive_integer),
    ];

    let values = fields::extract(&page_pointer, object, &descriptors).inspect_err(|errors| {
        debug!(pointer = %page_pointer, errors = errors.len(), "page parameter rejected");
    })?;

    match values[..] {
        [Some(number), Some(size)] => {
            let page = Page::from_parts(number, size);
            debug!(number = number.get(), size = size.get(), "page requested");
            Ok(PageRequest::Page(page))
        }
        _ => Err(descriptors
            .iter()
            .zip(&values)
            .filter(|(_, value)| value.is_none())
            .map(|(field, _)| Violation::MissingChild {
                pointer: page_pointer.clone(),
                child: field.name.to_string(),
            })
            .collect()),
    }
}

/// Write the page request as parameters using the default parameter names
pub fn to_params(request: &PageRequest) -> JsonObject {
    to_params_with(&PaginationConfig::default(), request)
}

/// Write the page request as parameters.
///
/// No pagination yields an empty map, an opt-out yields `{"page": null}`.
pub fn to_params_with(config: &PaginationConfig, request: &PageRequest) -> JsonObject {
    let mut params = JsonObject::new();
    match request {
        PageRequest::NoPagination => {}
        PageRequest::OptOut => {
            params.insert(config.page_param.clone(), JsonValue::Null);
        }
        PageRequest::Page(page) => {
            let mut object = JsonObject::new();
            object.insert(config.number_param.clone(), json!(page.number()));
            object.insert(config.size_param.clone(), json!(page.size()));
            params.insert(config.page_param.clone(), JsonValue::Object(object));
        }
    }
    params
}
