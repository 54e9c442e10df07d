//! Cache manager for holding API responses in memory
//!
//! Provides a `ResponseCache` that stores response bodies with expiry
//! timestamps. Stale entries are dropped the next time they are looked up.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Wrapper struct for cached data held in memory
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    /// The cached data
    data: T,
    /// When the data was cached
    cached_at: DateTime<Utc>,
    /// When the cache entry expires, `None` for never
    expires_at: Option<DateTime<Utc>>,
}

impl<T> CacheEntry<T> {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }
}

/// Result of a cache hit
#[derive(Debug, Clone, PartialEq)]
pub struct CachedData<T> {
    /// The cached data
    pub data: T,
    /// When the data was originally cached
    pub cached_at: DateTime<Utc>,
}

/// Builds the cache key for a request from its method, URL and query pairs.
///
/// Pairs are sorted by name so that parameter order does not matter.
pub fn cache_key(method: &str, url: &str, query: &[(&str, String)]) -> String {
    let mut pairs: Vec<_> = query.iter().collect();
    pairs.sort();

    let encoded = pairs
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("&");

    format!("{} {}?{}", method, url, encoded)
}

/// Thread-safe in-memory cache with a single expiry applied to every entry
///
/// Reads take a shared lock, so concurrent lookups do not block each other.
#[derive(Debug)]
pub struct ResponseCache<T> {
    entries: RwLock<HashMap<String, CacheEntry<T>>>,
    expire_after: Option<Duration>,
}

impl<T: Clone> ResponseCache<T> {
    /// Creates an empty cache. `None` means entries never expire.
    pub fn new(expire_after: Option<Duration>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            expire_after,
        }
    }

    /// The expiry applied to new entries
    pub fn expire_after(&self) -> Option<Duration> {
        self.expire_after
    }

    /// Stores data under `key`, replacing any existing entry
    pub fn write(&self, key: &str, data: T) {
        let now = Utc::now();
        let entry = CacheEntry {
            data,
            cached_at: now,
            expires_at: self.expire_after.map(|ttl| now + ttl),
        };

        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), entry);
    }

    /// Reads a fresh entry from the cache
    ///
    /// Returns `None` if the key is missing or its entry has expired. Expired
    /// entries are evicted.
    pub fn read(&self, key: &str) -> Option<CachedData<T>> {
        let now = Utc::now();
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            let entry = entries.get(key)?;
            if !entry.is_expired(now) {
                return Some(CachedData {
                    data: entry.data.clone(),
                    cached_at: entry.cached_at,
                });
            }
        }

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.get(key).is_some_and(|entry| entry.is_expired(now)) {
            entries.remove(key);
        }
        None
    }

    /// Removes every expired entry, returning how many were dropped
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }

    /// Removes every entry
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of stored entries, including ones not yet evicted
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
