//! Search repository error types.
//!
//! This module defines the error types that can occur during search engine
//! operations. Every failure is returned to the immediate caller; nothing is
//! retried or swallowed at this layer.

use thiserror::Error;

/// Errors that can occur during search engine operations.
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    /// Failed to reach the search engine or complete the handshake.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Index creation attempted against an existing (or concurrently created) index.
    #[error("Index '{0}' already exists")]
    AlreadyExistsError(String),

    /// A recognized key in a generic query body does not match the expected shape.
    #[error("Malformed query: {0}")]
    MalformedQueryError(String),

    /// A document body is not usable as a JSON document.
    #[error("Malformed document: {0}")]
    MalformedDocumentError(String),

    /// Validation error (e.g., empty index name).
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Failed to create the search index.
    #[error("Index creation error: {0}")]
    IndexCreationError(String),

    /// Failed to index a document.
    #[error("Index error: {0}")]
    IndexError(String),

    /// Failed to delete documents.
    #[error("Delete error: {0}")]
    DeleteError(String),

    /// Search query execution failed.
    #[error("Query error: {0}")]
    QueryError(String),

    /// Failed to refresh the index.
    #[error("Refresh error: {0}")]
    RefreshError(String),

    /// The engine rejected a mapping or settings body. The body is forwarded
    /// without local validation, so the engine's response is the only report.
    #[error("Rejected by the engine with status {status}: {body}")]
    RejectedError { status: u16, body: String },

    /// Failed to parse a response from the search engine.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl SearchError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an already-exists error for the given index.
    pub fn already_exists(index: impl Into<String>) -> Self {
        Self::AlreadyExistsError(index.into())
    }

    /// Create a malformed query error.
    pub fn malformed_query(msg: impl Into<String>) -> Self {
        Self::MalformedQueryError(msg.into())
    }

    /// Create a malformed document error.
    pub fn malformed_document(msg: impl Into<String>) -> Self {
        Self::MalformedDocumentError(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create an index creation error.
    pub fn index_creation(msg: impl Into<String>) -> Self {
        Self::IndexCreationError(msg.into())
    }

    /// Create an index (write) error.
    pub fn index(msg: impl Into<String>) -> Self {
        Self::IndexError(msg.into())
    }

    /// Create a delete error.
    pub fn delete(msg: impl Into<String>) -> Self {
        Self::DeleteError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create a refresh error.
    pub fn refresh(msg: impl Into<String>) -> Self {
        Self::RefreshError(msg.into())
    }

    /// Create a remote rejection error.
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::RejectedError {
            status,
            body: body.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}
