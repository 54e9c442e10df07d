//! Client configuration
//!
//! All values are fixed once a client is built from them.

use chrono::Duration;

/// All API requests are made to this URL
pub const DEFAULT_API_URL: &str = "https://www.comicvine.com/api/search/";

/// The API rejects requests without a browser-like User-Agent with a 403
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:7.0) Gecko/20130825 Firefox/36.0";

/// Default lifetime of a cached response in seconds
pub const DEFAULT_EXPIRE_AFTER_SECS: i64 = 300;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "COMICVINE_API_KEY";

/// Settings for a [`crate::client::ComicVineClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Personal ComicVine API key. Not validated locally.
    pub api_key: String,
    /// Endpoint of the search resource
    pub base_url: String,
    /// Value sent in the User-Agent header
    pub user_agent: String,
    /// How long cached responses stay fresh; `None` keeps them forever
    pub expire_after: Option<Duration>,
}

impl ClientConfig {
    /// Create a configuration with default endpoint, User-Agent and expiry
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            expire_after: Some(Duration::seconds(DEFAULT_EXPIRE_AFTER_SECS)),
        }
    }

    /// Create a configuration whose API key comes from `COMICVINE_API_KEY`
    ///
    /// A missing variable yields an empty key, which the API answers with a 401.
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_KEY_ENV).unwrap_or_default())
    }

    /// Override the search endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the cache expiry
    pub fn with_expire_after(mut self, expire_after: Option<Duration>) -> Self {
        self.expire_after = expire_after;
        self
    }
}
