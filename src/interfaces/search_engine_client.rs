//! Search engine client trait definition.
//!
//! This module defines the abstract interface for search engine operations,
//! allowing for different backend implementations (OpenSearch,
//! Elasticsearch, mocks for testing, etc.).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchError;
use crate::query::QueryRequest;
use crate::types::{
    AcknowledgedResponse, CreateIndexResponse, DeleteByTypeResponse, RefreshResponse,
    WriteResponse,
};

/// Abstract interface for search engine operations.
///
/// This trait defines all the operations required to interact with a search
/// engine. Implementations can be swapped for different backends, enabling
/// easy testing and potential future migrations.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. The client holds no mutable
/// per-request state, so a single handle can be shared across concurrent
/// callers.
///
/// # Error Handling
///
/// All methods return `Result<T, SearchError>`. Every operation is a single
/// request/response with no internal retries; transport timeouts are owned
/// by the underlying connection.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Create a new index.
    ///
    /// The index's existence is checked first and `AlreadyExistsError` is
    /// returned if it is present. The check and the create are two separate
    /// calls, so a concurrent creator can still win the race; the resulting
    /// creation failure also surfaces as `AlreadyExistsError`.
    async fn create_index(&self, index: &str) -> Result<CreateIndexResponse, SearchError>;

    /// Write or overwrite the document at `id`. Last write wins; no
    /// optimistic-concurrency check is performed.
    ///
    /// The body must be a JSON object. The document type is stored in a
    /// `doc_type` field so type-scoped operations can filter on it.
    async fn upsert_document(
        &self,
        index: &str,
        doc_type: &str,
        id: &str,
        body: &Value,
    ) -> Result<WriteResponse, SearchError>;

    /// Remove all documents of the given type from the index. Irreversible.
    async fn delete_by_type(
        &self,
        index: &str,
        doc_type: &str,
    ) -> Result<DeleteByTypeResponse, SearchError>;

    /// Fetch documents whose `id` field matches any of the given
    /// identifiers, capped at `size` results.
    ///
    /// An empty `ids` collection produces a query with no should-clauses,
    /// which the engine interprets as matching nothing.
    async fn fetch_by_ids(
        &self,
        index: &str,
        doc_type: &str,
        ids: &[i64],
        size: usize,
    ) -> Result<Value, SearchError>;

    /// Exact-term match on `field`, sorted ascending by `sort_field`, top
    /// `limit` results from offset 0. No descending option at this layer.
    async fn fetch_by_term_sorted(
        &self,
        index: &str,
        field: &str,
        keyword: &str,
        sort_field: &str,
        limit: usize,
    ) -> Result<Value, SearchError>;

    /// Index a pre-serialized JSON document with an engine-assigned id.
    async fn import_raw(&self, data: &str, index: &str) -> Result<WriteResponse, SearchError>;

    /// Force the index to make recent writes visible to subsequent reads.
    async fn refresh_index(&self, index: &str) -> Result<RefreshResponse, SearchError>;

    /// Forward a raw mapping body to the engine's schema endpoint. No local
    /// validation; a malformed body surfaces as `RejectedError`.
    async fn update_mapping(
        &self,
        index: &str,
        body: &Value,
    ) -> Result<AcknowledgedResponse, SearchError>;

    /// Forward a raw settings body to the engine's settings endpoint. No
    /// local validation; a malformed body surfaces as `RejectedError`.
    async fn update_settings(
        &self,
        index: &str,
        body: &Value,
    ) -> Result<AcknowledgedResponse, SearchError>;

    /// Execute an interpreted query: all conditions AND-ed into a boolean
    /// must query, scoped to `doc_type`, ordered by the request's sort
    /// clauses and capped at its size. The raw result set passes through
    /// unreshaped.
    async fn search(
        &self,
        index: &str,
        doc_type: &str,
        request: &QueryRequest,
    ) -> Result<Value, SearchError>;
}
