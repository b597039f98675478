//! Integration tests for the public API
//!
//! Tests the full flow: request parameters → page → pagination → link queries

use jsonapi_pagination::pagination::{count, first, last, next, previous};
use jsonapi_pagination::query::{from_uri, set_on_url};
use jsonapi_pagination::{
    from_params, from_query, to_pagination, to_params, to_query, ErrorDocument, JsonObject, Page,
    PageCodec, PageRequest, PaginationConfig,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use url::Url;

fn params(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        _ => panic!("Expected object"),
    }
}

fn page(number: u64, size: u64) -> Page {
    Page::new(number, size).unwrap()
}

// ============================================================================
// Request Flow Tests
// ============================================================================

#[test]
fn test_params_to_links() {
    let request = from_params(&params(json!({"page": {"number": "2", "size": "10"}}))).unwrap();
    let PageRequest::Page(requested) = request else {
        panic!("Expected a page, got {request:?}");
    };

    let pagination = to_pagination(&requested, 35).unwrap();
    let base = Url::parse("https://api.example.com/articles?sort=-published").unwrap();

    let link = |p: &Page| {
        let mut url = base.clone();
        set_on_url(&mut url, p);
        url.to_string()
    };

    assert_eq!(
        link(&pagination.first),
        "https://api.example.com/articles?sort=-published&page%5Bnumber%5D=1&page%5Bsize%5D=10"
    );
    assert_eq!(
        link(&pagination.last),
        "https://api.example.com/articles?sort=-published&page%5Bnumber%5D=4&page%5Bsize%5D=10"
    );
    assert_eq!(
        pagination.next.as_ref().map(link).as_deref(),
        Some("https://api.example.com/articles?sort=-published&page%5Bnumber%5D=3&page%5Bsize%5D=10")
    );

    // the emitted link reads back as the page it points at
    let next_link = link(&pagination.next.unwrap());
    assert_eq!(from_uri(&next_link).unwrap(), Some(page(3, 10)));
}

#[test]
fn test_invalid_request_produces_422_body() {
    let errors = from_params(&params(json!({"page": {"number": -1, "size": "ten"}}))).unwrap_err();

    assert_eq!(errors.status(), "422");
    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!({
            "errors": [
                {
                    "status": "422",
                    "title": "Type is wrong",
                    "detail": "`/page/number` type is not positive integer",
                    "source": {"pointer": "/page/number"},
                    "meta": {"type": "positive integer"}
                },
                {
                    "status": "422",
                    "title": "Type is wrong",
                    "detail": "`/page/size` type is not quoted integer",
                    "source": {"pointer": "/page/size"},
                    "meta": {"type": "quoted integer"}
                }
            ]
        })
    );

    let body = serde_json::to_string(&errors).unwrap();
    let parsed: ErrorDocument = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed, errors);
}

#[test]
fn test_out_of_range_after_valid_params() {
    let request = from_params(&params(json!({"page": {"number": 4, "size": 10}}))).unwrap();
    let errors = to_pagination(&request.page().unwrap(), 15).unwrap_err();

    assert_eq!(errors.len(), 1);
    let record = &errors.records()[0];
    assert_eq!(
        record.detail,
        "Page number (4) must be between 1 and the page count (2)"
    );
    assert_eq!(json!(record.meta), json!({"count": 2, "number": 4}));
    assert_eq!(record.pointer(), "/page/number");
}

#[test]
fn test_opt_out_and_absence_stay_distinct() {
    let opt_out = from_params(&params(json!({"page": null}))).unwrap();
    let absent = from_params(&params(json!({"include": "author"}))).unwrap();
    let malformed = from_params(&params(json!({"page": 1})));

    assert_eq!(opt_out, PageRequest::OptOut);
    assert_eq!(absent, PageRequest::NoPagination);
    assert!(malformed.is_err());

    assert_eq!(json!(to_params(&opt_out)), json!({"page": null}));
    assert_eq!(json!(to_params(&absent)), json!({}));
}

// ============================================================================
// Round Trip Tests
// ============================================================================

#[test]
fn test_params_and_query_round_trips() {
    for p in [page(1, 1), page(3, 20), page(1000, 7)] {
        let request = PageRequest::Page(p);
        assert_eq!(from_params(&to_params(&request)), Ok(request));
        assert_eq!(from_query(&to_query(&p)).unwrap(), Some(p));
    }
}

#[test]
fn test_query_examples() {
    assert_eq!(
        from_query("page%5Bnumber%5D=2&page%5Bsize%5D=10").unwrap(),
        Some(page(2, 10))
    );
    assert_eq!(from_query("page%5Bnumber%5D=2").unwrap(), None);
}

// ============================================================================
// Arithmetic Tests
// ============================================================================

#[test]
fn test_public_arithmetic() {
    let p = page(2, 10);
    let page_count = count(std::num::NonZeroU64::new(10).unwrap(), 25);

    assert_eq!(page_count.get(), 3);
    assert_eq!(first(&p), page(1, 10));
    assert_eq!(last(&p, page_count), page(3, 10));
    assert_eq!(next(&p, page_count), Some(page(3, 10)));
    assert_eq!(previous(&p), Some(page(1, 10)));
}

// ============================================================================
// Configured Codec Tests
// ============================================================================

#[test]
fn test_codec_from_yaml_config() {
    let yaml = r"
page_param: paging
number_param: index
size_param: per_page
";
    let codec = PageCodec::from_yaml_str(yaml).unwrap();
    assert_eq!(
        codec.config(),
        &PaginationConfig::new("paging", "index", "per_page")
    );

    let request = codec
        .parse_params(&params(json!({"paging": {"index": 1, "per_page": 50}})))
        .unwrap();
    let pagination = codec.to_pagination(&request.page().unwrap(), 120).unwrap();

    assert_eq!(pagination.page_count(), 3);
    assert_eq!(
        codec.to_query(&pagination.last),
        "paging%5Bindex%5D=3&paging%5Bper_page%5D=50"
    );
    assert_eq!(
        json!(codec.to_params(&PageRequest::Page(pagination.next.unwrap()))),
        json!({"paging": {"index": 2, "per_page": 50}})
    );
}
