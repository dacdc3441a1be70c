//! HTTP client for the community registry listing API.
//!
//! The client is read-only and unauthenticated. One GET is issued per page;
//! the paginator follows `next_cursor` until the registry stops returning
//! one. No retries happen at this layer: a single failed page aborts the
//! whole listing so callers never observe a truncated registry view.

use std::time::Duration;

use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::domain::models::ServerRecord;
use crate::infrastructure::config::Settings;

use super::error::RegistryError;
use super::server_url::ServerUrl;
use super::types::{ServerEntry, ServerListResponse};

/// Base URL for the community MCP registry.
pub const COMMUNITY_REGISTRY_BASE_URL: &str = "https://registry.modelcontextprotocol.io";

/// Read-only client for the registry's `/v0` API.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    /// Reusable HTTP client with connection pooling
    http: ReqwestClient,
    base_url: String,
}

impl RegistryClient {
    /// Create a client for the community registry with a 20 second request
    /// timeout, matching the defaults in [`Settings`].
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_base_url(COMMUNITY_REGISTRY_BASE_URL, Duration::from_secs(20))
    }

    /// Create a client from loaded settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, RegistryError> {
        Self::with_base_url(&settings.base_url, settings.timeout())
    }

    /// Create a client against an explicit base URL, used by tests to point
    /// at a local mock server.
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RegistryError> {
        let http = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(RegistryError::Transport)?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { http, base_url })
    }

    /// Registry origin this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a single page of the server listing.
    ///
    /// `query` filters by search text (empty means "list all") and `cursor`
    /// continues a previous page (empty means "first page"). `version=latest`
    /// is always requested so only the newest version of each server is
    /// returned.
    pub async fn fetch_page(
        &self,
        query: &str,
        cursor: &str,
    ) -> Result<ServerListResponse, RegistryError> {
        let mut params: Vec<(&str, &str)> = vec![("version", "latest")];
        if !query.is_empty() {
            params.push(("q", query));
        }
        if !cursor.is_empty() {
            params.push(("cursor", cursor));
        }

        let response = self
            .http
            .get(format!("{}/v0/servers", self.base_url))
            .query(&params)
            .send()
            .await
            .map_err(RegistryError::from_request)?;

        Self::decode(response).await
    }

    /// Fetch the complete listing for `query`, following pagination.
    ///
    /// Records preserve registry order within and across pages; no
    /// deduplication or sorting is applied.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn list_servers(&self, query: &str) -> Result<Vec<ServerRecord>, RegistryError> {
        let mut servers = Vec::new();
        let mut cursor = String::new();
        let mut pages = 0u32;

        loop {
            let page = self.fetch_page(query, &cursor).await?;
            pages += 1;
            debug!(
                page = pages,
                entries = page.servers.len(),
                has_next = page.next_cursor().is_some(),
                "fetched registry page"
            );

            let next = page.next_cursor().map(ToString::to_string);
            servers.extend(page.servers.into_iter().map(|entry| entry.server));

            match next {
                Some(next) => cursor = next,
                None => break,
            }
        }

        debug!(total = servers.len(), pages, "registry listing complete");
        Ok(servers)
    }

    /// Look up one published server version.
    pub async fn get_server(&self, url: &ServerUrl) -> Result<ServerRecord, RegistryError> {
        let response = self
            .http
            .get(url.to_string())
            .send()
            .await
            .map_err(RegistryError::from_request)?;

        let entry: ServerEntry = Self::decode(response).await?;
        Ok(entry.server)
    }

    /// List every published version of one server, newest ordering as
    /// returned by the registry.
    pub async fn get_server_versions(
        &self,
        url: &ServerUrl,
    ) -> Result<Vec<ServerRecord>, RegistryError> {
        let response = self
            .http
            .get(url.versions_list_url())
            .send()
            .await
            .map_err(RegistryError::from_request)?;

        let listing: ServerListResponse = Self::decode(response).await?;
        Ok(listing
            .servers
            .into_iter()
            .map(|entry| entry.server)
            .collect())
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RegistryError> {
        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(RegistryError::from_request)?;
        serde_json::from_str(&body).map_err(RegistryError::Decode)
    }
}
