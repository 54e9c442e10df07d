//! Request parameters for the search resource

use crate::resources::validate_resources;

/// The API never returns more than this many results per page
pub const MAX_LIMIT: i64 = 10;

/// Caller-facing options for a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Index of the first record returned. Negative values are sent as 0.
    pub offset: i64,
    /// Records per page. Values above 10 are sent as 10; there is no lower clamp.
    pub limit: i64,
    /// Resource types to restrict results to. Unknown names are ignored.
    pub resources: Option<Vec<String>>,
    /// Whether this call may read from and write to the response cache
    pub use_cache: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: MAX_LIMIT,
            resources: None,
            use_cache: true,
        }
    }
}

impl SearchOptions {
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn resources<I, S>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resources = Some(resources.into_iter().map(Into::into).collect());
        self
    }

    pub fn use_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }
}

/// The parameter set sent with a search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub api_key: String,
    pub format: &'static str,
    pub limit: i64,
    pub offset: i64,
    pub query: String,
    /// Comma-separated resource types, absent when no valid type was requested
    pub resources: Option<String>,
}

impl SearchParams {
    /// Builds the parameters, clamping `limit` to at most 10 and `offset` to at least 0
    pub fn new(api_key: &str, query: &str, options: &SearchOptions) -> Self {
        Self {
            api_key: api_key.to_string(),
            format: "json",
            limit: options.limit.min(MAX_LIMIT),
            offset: options.offset.max(0),
            query: query.to_string(),
            resources: options
                .resources
                .as_deref()
                .and_then(validate_resources),
        }
    }

    /// Query-string pairs in request order. `resources` is left out when absent.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("api_key", self.api_key.clone()),
            ("format", self.format.to_string()),
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
            ("query", self.query.clone()),
        ];

        if let Some(resources) = &self.resources {
            pairs.push(("resources", resources.clone()));
        }

        pairs
    }
}
