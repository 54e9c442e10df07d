//! ComicVine search API client
//!
//! Interacts with the `search` resource of the ComicVine API. Requests need an
//! API key from an account on https://comicvine.gamespot.com/.

mod params;
mod transport;

pub use params::{SearchOptions, SearchParams, MAX_LIMIT};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

use std::sync::Arc;

use log::{debug, warn};
use reqwest::header::HeaderValue;

use crate::cache::{cache_key, ResponseCache};
use crate::config::ClientConfig;
use crate::error::SearchError;
use crate::response::SearchResponse;

/// Client for the ComicVine search resource
///
/// Each client owns its response cache. Successful responses are kept for the
/// configured expiry and shared by every cache-enabled call on this client.
pub struct ComicVineClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    cache: ResponseCache<String>,
}

impl std::fmt::Debug for ComicVineClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComicVineClient")
            .field("base_url", &self.config.base_url)
            .field("cached_entries", &self.cache.len())
            .finish_non_exhaustive()
    }
}

impl ComicVineClient {
    /// Create a client that talks to the API over `reqwest`
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidHeader`] if the configured User-Agent
    /// cannot be sent as a header value.
    pub fn new(config: ClientConfig) -> Result<Self, SearchError> {
        HeaderValue::from_str(&config.user_agent)
            .map_err(|e| SearchError::InvalidHeader(e.to_string()))?;

        Ok(Self::with_transport(config, Arc::new(ReqwestTransport::new())))
    }

    /// Create a client with a custom transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let cache = ResponseCache::new(config.expire_after);
        Self {
            config,
            transport,
            cache,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The response cache owned by this client
    pub fn cache(&self) -> &ResponseCache<String> {
        &self.cache
    }

    /// Drop every cached response
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Search with default options: first page, 10 results, all resource types,
    /// cache enabled.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        self.search_with(query, &SearchOptions::default()).await
    }

    /// Search using the provided query term and options
    ///
    /// # Returns
    /// * `Ok(SearchResponse)` - The parsed body of a successful response
    /// * `Err(SearchError)` - If the request fails, the API returns a
    ///   non-success status, or the body is not JSON
    pub async fn search_with(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResponse, SearchError> {
        let params = SearchParams::new(&self.config.api_key, query, options);
        let request = self.build_request(&params);

        let (body, from_cache) = self.query_api(&request, options.use_cache).await?;
        let json: serde_json::Value = serde_json::from_str(&body)?;

        let mut response = SearchResponse::from_json(&json);
        response.from_cache = from_cache;
        Ok(response)
    }

    fn build_request(&self, params: &SearchParams) -> HttpRequest {
        let mut headers = Vec::new();
        if !self.config.user_agent.is_empty() {
            headers.push(("User-Agent".to_string(), self.config.user_agent.clone()));
        }

        HttpRequest {
            url: self.config.base_url.clone(),
            headers,
            query: params.to_query_pairs(),
        }
    }

    /// Returns the response body and whether it came from the cache
    async fn query_api(
        &self,
        request: &HttpRequest,
        use_cache: bool,
    ) -> Result<(String, bool), SearchError> {
        if !use_cache {
            debug!("cache disabled for this request");
            let response = self.http_get(request).await?;
            return Ok((response.body, false));
        }

        let key = cache_key("GET", &request.url, &request.query);
        if let Some(cached) = self.cache.read(&key) {
            debug!("cache hit (cached at {})", cached.cached_at);
            return Ok((cached.data, true));
        }

        debug!("cache miss");
        let response = self.http_get(request).await?;
        if response.status == 200 {
            self.cache.write(&key, response.body.clone());
        }
        Ok((response.body, false))
    }

    async fn http_get(&self, request: &HttpRequest) -> Result<HttpResponse, SearchError> {
        debug!(
            "GET {} query={:?} limit={:?} offset={:?} resources={:?}",
            request.url,
            request.param("query"),
            request.param("limit"),
            request.param("offset"),
            request.param("resources"),
        );

        let response = self.transport.get(request).await?;
        if !response.is_success() {
            warn!("search request failed: {} {}", response.status, response.reason);
            return Err(SearchError::from_status(response.status, &response.reason));
        }

        Ok(response)
    }
}
