//! Response wrapper for the search resource
//!
//! The API body is normalized into a fixed shape. Construction never fails:
//! any missing or mistyped field falls back to its default.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Documented API-level status codes
///
/// These are distinct from HTTP status codes. Only `Ok` indicates success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatus {
    /// 1: OK
    Ok,
    /// 100: Invalid API Key
    InvalidApiKey,
    /// 101: Object Not Found
    ObjectNotFound,
    /// 102: Error in URL Format
    UrlFormat,
    /// 103: 'jsonp' format requires a 'json_callback' argument
    JsonpCallbackRequired,
    /// 104: Filter Error
    FilterError,
}

impl ApiStatus {
    /// Maps a raw status code to a documented status, if it is one
    pub fn from_code(code: i64) -> Option<ApiStatus> {
        match code {
            1 => Some(ApiStatus::Ok),
            100 => Some(ApiStatus::InvalidApiKey),
            101 => Some(ApiStatus::ObjectNotFound),
            102 => Some(ApiStatus::UrlFormat),
            103 => Some(ApiStatus::JsonpCallbackRequired),
            104 => Some(ApiStatus::FilterError),
            _ => None,
        }
    }

    /// The error text the API documents for this status
    pub fn description(&self) -> &'static str {
        match self {
            ApiStatus::Ok => "OK",
            ApiStatus::InvalidApiKey => "Invalid API Key",
            ApiStatus::ObjectNotFound => "Object Not Found",
            ApiStatus::UrlFormat => "Error in URL Format",
            ApiStatus::JsonpCallbackRequired => "'jsonp' format requires a 'json_callback' argument",
            ApiStatus::FilterError => "Filter Error",
        }
    }
}

/// A single loosely-typed search result record
///
/// Records are kept as raw JSON objects; accessors pull out the fields
/// most callers need.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SearchResult {
    fields: Map<String, Value>,
}

impl SearchResult {
    /// Wraps a JSON object as a result record
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// The resource type of this record, e.g. "issue" or "volume"
    pub fn resource_type(&self) -> Option<&str> {
        self.fields.get("resource_type").and_then(Value::as_str)
    }

    /// The ComicVine id of this record
    pub fn id(&self) -> Option<i64> {
        self.fields.get("id").and_then(Value::as_i64)
    }

    /// The display name of this record
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// Link to the record on the ComicVine site
    pub fn site_detail_url(&self) -> Option<&str> {
        self.fields.get("site_detail_url").and_then(Value::as_str)
    }

    /// Raw access to any field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// Normalized body of a search response
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub status_code: i64,
    pub error: String,
    pub number_of_total_results: i64,
    pub number_of_page_results: i64,
    pub limit: i64,
    pub offset: i64,
    pub results: Vec<SearchResult>,
    /// When this object was built
    pub timestamp: DateTime<Utc>,
    /// Whether the body was served from the response cache
    #[serde(skip)]
    pub from_cache: bool,
}

impl SearchResponse {
    /// Builds a response from a decoded JSON body.
    ///
    /// Non-object bodies produce a response with every field defaulted.
    pub fn from_json(json: &Value) -> Self {
        let empty = Map::new();
        let body = json.as_object().unwrap_or(&empty);

        let int = |key: &str| body.get(key).and_then(Value::as_i64).unwrap_or(0);

        let results = body
            .get("results")
            .and_then(Value::as_array)
            .map(|records| {
                records
                    .iter()
                    .filter_map(Value::as_object)
                    .cloned()
                    .map(SearchResult::new)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            status_code: int("status_code"),
            error: body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            number_of_total_results: int("number_of_total_results"),
            number_of_page_results: int("number_of_page_results"),
            limit: int("limit"),
            offset: int("offset"),
            results,
            timestamp: Utc::now(),
            from_cache: false,
        }
    }

    /// True unless the API reported status code 1 (OK)
    pub fn has_error(&self) -> bool {
        self.status_code != 1
    }

    /// The documented status for `status_code`, if any
    pub fn api_status(&self) -> Option<ApiStatus> {
        ApiStatus::from_code(self.status_code)
    }
}

impl std::fmt::Display for SearchResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<cvsearch::response::SearchResponse(status_code={})>",
            self.status_code
        )
    }
}
