//! `rocketreach-http` is an async HTTP client for the RocketReach API.
//!
//! [`RocketReachClient`] hands out fluent builders for each endpoint:
//! - [`RocketReachClient::people_search`]
//! - [`RocketReachClient::person_lookup`]
//! - [`RocketReachClient::person_enrich`]
//!
//! Requests go through a [`Transport`] that retries rate limits, server
//! errors and network failures, and fails fast on other client errors.

mod client;
mod enrich;
mod error;
mod lookup;
mod options;
mod query;
mod response;
mod retry;
mod search;
mod transport;
mod wire;

pub use client::RocketReachClient;
pub use enrich::{PersonEnrich, ENRICH_PATH};
pub use error::RocketReachError;
pub use lookup::{PersonLookup, LOOKUP_PATH};
pub use options::{ClientOptions, DEFAULT_BASE_URL};
pub use query::{LookupQuery, SearchQuery, Values};
pub use response::{EnrichResponse, PersonResponse, SearchResponse};
pub use retry::{RetryPolicy, Sleeper, TokioSleeper, DEFAULT_RETRY_AFTER_SECS};
pub use search::{PeopleSearch, SEARCH_PATH};
pub use transport::{Transport, API_KEY_HEADER, NETWORK_FAILURE_MESSAGE};

/// Decoded JSON object as exchanged with the API.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

pub type Result<T> = std::result::Result<T, RocketReachError>;

/// Re-exported so custom [`Sleeper`] implementations can use the same macro.
pub use async_trait::async_trait;
