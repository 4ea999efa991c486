//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{
        IndicesCreateParts, IndicesExistsParts, IndicesPutMappingParts, IndicesPutSettingsParts,
        IndicesRefreshParts,
    },
    DeleteByQueryParts, IndexParts, OpenSearch, SearchParts,
};
use serde_json::Value;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::errors::SearchError;
use crate::interfaces::SearchEngineClient;
use crate::opensearch::queries;
use crate::query::QueryRequest;
use crate::types::{
    AcknowledgedResponse, CreateIndexResponse, DeleteByTypeResponse, RefreshResponse,
    WriteResponse,
};

/// OpenSearch client implementation.
///
/// One handle per endpoint, safe to share across concurrent callers. Every
/// operation is a single blocking request/response with no internal retries.
///
/// # Example
///
/// ```ignore
/// use search_repository::{ClientConfig, OpenSearchClient};
///
/// let config = ClientConfig::new("http://localhost", 9200).with_healthcheck(true);
/// let client = OpenSearchClient::connect(&config).await?;
/// client.create_index("products").await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new client for the configured endpoint.
    ///
    /// When the config's health check is enabled the endpoint is pinged and
    /// an unreachable or rejecting endpoint fails with `ConnectionError`.
    /// Without it, construction is purely local and the first operation
    /// surfaces any connection failure.
    pub async fn connect(config: &ClientConfig) -> Result<Self, SearchError> {
        let endpoint = config.endpoint();
        let parsed_url =
            Url::parse(&endpoint).map_err(|e| SearchError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        if config.sniff {
            // The single-node transport has no sniffing support; the flag is
            // accepted for parity with the original client options.
            warn!("sniffing requested but the single-node transport does not sniff");
        }

        if config.healthcheck {
            let response = client
                .ping()
                .send()
                .await
                .map_err(|e| SearchError::connection(e.to_string()))?;
            let status = response.status_code();
            if !status.is_success() {
                return Err(SearchError::connection(format!(
                    "ping failed with status {}",
                    status
                )));
            }
        }

        info!(endpoint = %endpoint, "created search engine client");

        Ok(Self { client })
    }

    /// Clone the caller's document body with the type recorded in a
    /// `doc_type` field. The body must be a JSON object.
    fn typed_document(doc_type: &str, body: &Value) -> Result<Value, SearchError> {
        let mut document = body
            .as_object()
            .cloned()
            .ok_or_else(|| SearchError::malformed_document("document body must be a JSON object"))?;
        document.insert(
            "doc_type".to_string(),
            Value::String(doc_type.to_string()),
        );
        Ok(Value::Object(document))
    }
}

#[async_trait]
impl SearchEngineClient for OpenSearchClient {
    async fn create_index(&self, index: &str) -> Result<CreateIndexResponse, SearchError> {
        let exists = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = exists.status_code();
        if status.is_success() {
            return Err(SearchError::already_exists(index));
        }
        if status.as_u16() != 404 {
            let body = exists.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "index existence check failed");
            return Err(SearchError::index_creation(format!(
                "existence check failed with status {}: {}",
                status, body
            )));
        }

        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // A concurrent creator can win between the existence check and
            // the create call; report that the same way as a positive check.
            if body.contains("resource_already_exists_exception") {
                return Err(SearchError::already_exists(index));
            }
            error!(status = %status, body = %body, "index creation failed");
            return Err(SearchError::index_creation(format!(
                "create failed with status {}: {}",
                status, body
            )));
        }

        let created = response
            .json::<CreateIndexResponse>()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        debug!(index = %index, "index created");
        Ok(created)
    }

    async fn upsert_document(
        &self,
        index: &str,
        doc_type: &str,
        id: &str,
        body: &Value,
    ) -> Result<WriteResponse, SearchError> {
        let document = Self::typed_document(doc_type, body)?;

        let response = self
            .client
            .index(IndexParts::IndexId(index, id))
            .body(document)
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "upsert request failed");
            return Err(SearchError::index(format!(
                "upsert failed with status {}: {}",
                status, error_body
            )));
        }

        let ack = response
            .json::<WriteResponse>()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        debug!(index = %index, doc_id = %id, result = %ack.result, "document written");
        Ok(ack)
    }

    async fn delete_by_type(
        &self,
        index: &str,
        doc_type: &str,
    ) -> Result<DeleteByTypeResponse, SearchError> {
        let response = self
            .client
            .delete_by_query(DeleteByQueryParts::Index(&[index]))
            .body(queries::build_delete_by_type_body(doc_type))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "delete-by-type request failed");
            return Err(SearchError::delete(format!(
                "delete failed with status {}: {}",
                status, error_body
            )));
        }

        let ack = response
            .json::<DeleteByTypeResponse>()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        debug!(index = %index, doc_type = %doc_type, deleted = ack.deleted, "documents deleted");
        Ok(ack)
    }

    async fn fetch_by_ids(
        &self,
        index: &str,
        doc_type: &str,
        ids: &[i64],
        size: usize,
    ) -> Result<Value, SearchError> {
        let body = queries::build_ids_body(ids, doc_type, size);
        self.execute_search(index, body).await
    }

    async fn fetch_by_term_sorted(
        &self,
        index: &str,
        field: &str,
        keyword: &str,
        sort_field: &str,
        limit: usize,
    ) -> Result<Value, SearchError> {
        let body = queries::build_term_sorted_body(field, keyword, sort_field, limit);
        self.execute_search(index, body).await
    }

    async fn import_raw(&self, data: &str, index: &str) -> Result<WriteResponse, SearchError> {
        let document: Value = serde_json::from_str(data)
            .map_err(|e| SearchError::malformed_document(e.to_string()))?;

        let response = self
            .client
            .index(IndexParts::Index(index))
            .body(document)
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "import request failed");
            return Err(SearchError::index(format!(
                "import failed with status {}: {}",
                status, error_body
            )));
        }

        let ack = response
            .json::<WriteResponse>()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        debug!(index = %index, doc_id = %ack.id, "raw document imported");
        Ok(ack)
    }

    async fn refresh_index(&self, index: &str) -> Result<RefreshResponse, SearchError> {
        let response = self
            .client
            .indices()
            .refresh(IndicesRefreshParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "refresh request failed");
            return Err(SearchError::refresh(format!(
                "refresh failed with status {}: {}",
                status, error_body
            )));
        }

        response
            .json::<RefreshResponse>()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))
    }

    async fn update_mapping(
        &self,
        index: &str,
        body: &Value,
    ) -> Result<AcknowledgedResponse, SearchError> {
        let response = self
            .client
            .indices()
            .put_mapping(IndicesPutMappingParts::Index(&[index]))
            .body(body)
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "mapping update rejected");
            return Err(SearchError::rejected(status.as_u16(), error_body));
        }

        response
            .json::<AcknowledgedResponse>()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))
    }

    async fn update_settings(
        &self,
        index: &str,
        body: &Value,
    ) -> Result<AcknowledgedResponse, SearchError> {
        let response = self
            .client
            .indices()
            .put_settings(IndicesPutSettingsParts::Index(&[index]))
            .body(body)
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "settings update rejected");
            return Err(SearchError::rejected(status.as_u16(), error_body));
        }

        response
            .json::<AcknowledgedResponse>()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))
    }

    async fn search(
        &self,
        index: &str,
        doc_type: &str,
        request: &QueryRequest,
    ) -> Result<Value, SearchError> {
        let body = queries::build_query_body(request, doc_type);
        self.execute_search(index, body).await
    }
}

impl OpenSearchClient {
    /// Send a search body and pass the raw result set through.
    async fn execute_search(&self, index: &str, body: Value) -> Result<Value, SearchError> {
        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .body(body)
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "search request failed");
            return Err(SearchError::query(format!(
                "search failed with status {}: {}",
                status, error_body
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))
    }
}
