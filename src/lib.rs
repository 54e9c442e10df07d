//! ComicVine search client library
//!
//! This module exposes the client, its supporting types and the CLI parsing
//! used by the `cvsearch` binary.

pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod resources;
pub mod response;

pub use client::{ComicVineClient, SearchOptions};
pub use config::ClientConfig;
pub use error::{ErrorKind, SearchError};
pub use resources::ResourceType;
pub use response::{SearchResponse, SearchResult};
