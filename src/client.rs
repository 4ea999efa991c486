//! Search repository client.
//!
//! This module provides the main client for interacting with the search
//! engine. Application code constructs it with a backend at its composition
//! root and passes it by reference wherever search access is needed; there
//! is no process-wide handle.

use serde_json::Value;

use crate::errors::SearchError;
use crate::interfaces::SearchEngineClient;
use crate::query::QueryRequest;
use crate::types::{
    AcknowledgedResponse, CreateIndexResponse, DeleteByTypeResponse, RefreshResponse,
    WriteResponse,
};

/// The main client for interacting with the search engine.
///
/// A thin facade over a pluggable backend: it validates the inputs this
/// layer owns (non-empty index and type names, query-body shape) and
/// forwards everything else verbatim, returning the engine's own
/// acknowledgments and result sets.
pub struct SearchClient {
    provider: Box<dyn SearchEngineClient>,
}

impl SearchClient {
    /// Create a new client over the given backend.
    pub fn new(provider: Box<dyn SearchEngineClient>) -> Self {
        Self { provider }
    }

    fn validate_index(index: &str) -> Result<(), SearchError> {
        if index.is_empty() {
            return Err(SearchError::validation("index name is required"));
        }
        Ok(())
    }

    fn validate_doc_type(doc_type: &str) -> Result<(), SearchError> {
        if doc_type.is_empty() {
            return Err(SearchError::validation("document type is required"));
        }
        Ok(())
    }

    /// Create a new index, failing with `AlreadyExistsError` if one of that
    /// name is present. The existence check and the creation are two calls;
    /// a concurrent creator between them also yields `AlreadyExistsError`.
    pub async fn create_index(&self, index: &str) -> Result<CreateIndexResponse, SearchError> {
        Self::validate_index(index)?;
        self.provider.create_index(index).await
    }

    /// Write or overwrite the document at `id`. Last write wins.
    pub async fn upsert_document(
        &self,
        index: &str,
        doc_type: &str,
        id: &str,
        body: &Value,
    ) -> Result<WriteResponse, SearchError> {
        Self::validate_index(index)?;
        Self::validate_doc_type(doc_type)?;
        self.provider.upsert_document(index, doc_type, id, body).await
    }

    /// Remove all documents of the given type. Irreversible.
    pub async fn delete_by_type(
        &self,
        index: &str,
        doc_type: &str,
    ) -> Result<DeleteByTypeResponse, SearchError> {
        Self::validate_index(index)?;
        Self::validate_doc_type(doc_type)?;
        self.provider.delete_by_type(index, doc_type).await
    }

    /// Fetch documents whose `id` field matches any of `ids`, capped at
    /// `size`. An empty collection matches nothing.
    pub async fn fetch_by_ids(
        &self,
        index: &str,
        doc_type: &str,
        ids: &[i64],
        size: usize,
    ) -> Result<Value, SearchError> {
        Self::validate_index(index)?;
        Self::validate_doc_type(doc_type)?;
        self.provider.fetch_by_ids(index, doc_type, ids, size).await
    }

    /// Exact-term fetch sorted ascending by `sort_field`, top `limit`
    /// results from offset 0.
    pub async fn fetch_by_term_sorted(
        &self,
        index: &str,
        field: &str,
        keyword: &str,
        sort_field: &str,
        limit: usize,
    ) -> Result<Value, SearchError> {
        Self::validate_index(index)?;
        self.provider
            .fetch_by_term_sorted(index, field, keyword, sort_field, limit)
            .await
    }

    /// Index a pre-serialized JSON document with an engine-assigned id.
    pub async fn import_raw(&self, data: &str, index: &str) -> Result<WriteResponse, SearchError> {
        Self::validate_index(index)?;
        self.provider.import_raw(data, index).await
    }

    /// Make recent writes visible to subsequent reads.
    pub async fn refresh_index(&self, index: &str) -> Result<RefreshResponse, SearchError> {
        Self::validate_index(index)?;
        self.provider.refresh_index(index).await
    }

    /// Forward a raw mapping body to the engine. No local validation.
    pub async fn update_mapping(
        &self,
        index: &str,
        body: &Value,
    ) -> Result<AcknowledgedResponse, SearchError> {
        Self::validate_index(index)?;
        self.provider.update_mapping(index, body).await
    }

    /// Forward a raw settings body to the engine. No local validation.
    pub async fn update_settings(
        &self,
        index: &str,
        body: &Value,
    ) -> Result<AcknowledgedResponse, SearchError> {
        Self::validate_index(index)?;
        self.provider.update_settings(index, body).await
    }

    /// Execute a structured query against the given index and type.
    pub async fn search(
        &self,
        index: &str,
        doc_type: &str,
        request: &QueryRequest,
    ) -> Result<Value, SearchError> {
        Self::validate_index(index)?;
        Self::validate_doc_type(doc_type)?;
        self.provider.search(index, doc_type, request).await
    }

    /// Interpret a generic query-body map and execute it.
    ///
    /// The body's recognized keys (`match`, `wildcard`, `sort`, `size`)
    /// must have the expected shape or the call fails with
    /// `MalformedQueryError` before anything is sent; unrecognized keys are
    /// ignored.
    pub async fn search_by_map(
        &self,
        index: &str,
        doc_type: &str,
        body: &Value,
    ) -> Result<Value, SearchError> {
        Self::validate_index(index)?;
        Self::validate_doc_type(doc_type)?;
        let request = QueryRequest::from_value(body)?;
        self.provider.search(index, doc_type, &request).await
    }
}
