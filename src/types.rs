//! Common types used throughout jsonapi-pagination

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type, used as the request parameter map
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// HTTP status carried by every error record produced by this crate
pub const UNPROCESSABLE_ENTITY: &str = "422";
