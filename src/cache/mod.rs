//! In-memory response cache
//!
//! This module provides a cache for successful API response bodies, keyed by
//! request signature and expired after a configurable lifetime. Entries live
//! only as long as the owning client.

mod manager;

pub use manager::{cache_key, CachedData, ResponseCache};
