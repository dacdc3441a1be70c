//! JSON envelopes for the registry's `/v0` listing API.
//!
//! One `ServerListResponse` is produced per page fetch and discarded once the
//! paginator has merged its entries.

use serde::{Deserialize, Serialize};

use crate::domain::models::ServerRecord;

/// One page of the `GET /v0/servers` listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerListResponse {
    /// Entries in registry order
    #[serde(default)]
    pub servers: Vec<ServerEntry>,

    /// Pagination metadata
    #[serde(default)]
    pub metadata: ListMetadata,
}

impl ServerListResponse {
    /// Continuation cursor for the next page, if the registry signalled one.
    pub fn next_cursor(&self) -> Option<&str> {
        self.metadata
            .next_cursor
            .as_deref()
            .filter(|cursor| !cursor.is_empty())
    }
}

/// A single listing entry wrapping the server definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerEntry {
    /// The server definition itself
    pub server: ServerRecord,

    /// Entry-level metadata (publish timestamps, official status)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Listing metadata: total-count hint and continuation cursor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListMetadata {
    /// Total entries matching the request, as hinted by the registry
    #[serde(default)]
    pub count: u64,

    /// Opaque cursor for the next page; absent on the final page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}
