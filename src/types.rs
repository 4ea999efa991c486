//! Typed views of the engine's acknowledgment payloads.
//!
//! These structs deserialize the engine-native JSON responses for write and
//! schema operations. Search results are not reshaped at this layer; they
//! pass through as raw `serde_json::Value`.

use serde::Deserialize;

/// Acknowledgment returned by index creation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIndexResponse {
    /// Whether the cluster acknowledged the creation.
    pub acknowledged: bool,
    /// Whether the requisite shard copies were started.
    #[serde(default)]
    pub shards_acknowledged: bool,
    /// The name of the created index.
    pub index: String,
}

/// Acknowledgment returned by a document write.
#[derive(Debug, Clone, Deserialize)]
pub struct WriteResponse {
    /// The index the document was written to.
    #[serde(rename = "_index")]
    pub index: String,
    /// The document identifier, engine-assigned when not supplied.
    #[serde(rename = "_id")]
    pub id: String,
    /// The write outcome reported by the engine ("created" or "updated").
    pub result: String,
}

/// Acknowledgment returned by a delete-by-type operation.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteByTypeResponse {
    /// Number of documents removed.
    pub deleted: u64,
    /// Number of documents the query matched.
    #[serde(default)]
    pub total: u64,
}

/// Per-shard outcome counts.
#[derive(Debug, Clone, Deserialize)]
pub struct ShardStats {
    pub total: u32,
    pub successful: u32,
    pub failed: u32,
}

/// Acknowledgment returned by an index refresh.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResponse {
    #[serde(rename = "_shards")]
    pub shards: ShardStats,
}

/// Plain acknowledgment for mapping and settings updates.
#[derive(Debug, Clone, Deserialize)]
pub struct AcknowledgedResponse {
    pub acknowledged: bool,
}
