//! # Search Repository
//!
//! A typed repository facade over a search engine. It covers index
//! lifecycle, document writes, typed fetches, schema updates, and a small
//! interpreter that turns generic key/value query bodies into boolean
//! queries. The engine's own payloads pass through unreshaped.

pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod query;
pub mod types;

pub use client::SearchClient;
pub use config::ClientConfig;
pub use errors::SearchError;
pub use interfaces::SearchEngineClient;
pub use opensearch::OpenSearchClient;
pub use query::{FieldSort, FieldValue, QueryRequest, SortOrder};
