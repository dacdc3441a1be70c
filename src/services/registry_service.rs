//! Cache-aware server listing.
//!
//! Decision policy, in order:
//! 1. Non-empty query: always bypass the cache. A filtered listing is not
//!    representative of "all servers", so it is neither read from nor
//!    written to the cache, and search results stay fresh on every call.
//! 2. Empty query with a valid, non-empty cache: serve from cache, zero
//!    network requests.
//! 3. Empty query otherwise: full paginated fetch, then a best-effort cache
//!    write. A failed write never turns a successful listing into an error.

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::domain::models::ServerRecord;
use crate::domain::ports::{ListingCache, RegistrySource};
use crate::infrastructure::cache::{CacheError, CacheStatus, DiskCache};
use crate::infrastructure::config::Settings;
use crate::infrastructure::registry::{RegistryClient, RegistryError};

/// Server listing front door: a registry source behind a listing cache.
///
/// Generic over the ports so the decision policy can be exercised with stub
/// sources and caches in tests.
#[derive(Debug)]
pub struct RegistryService<S, C> {
    source: S,
    cache: C,
}

/// The production wiring: HTTP registry client plus disk cache.
pub type CachedRegistry = RegistryService<RegistryClient, DiskCache>;

impl CachedRegistry {
    /// Wire a registry client and disk cache from loaded settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, RegistryError> {
        Ok(Self::new(
            RegistryClient::from_settings(settings)?,
            DiskCache::new(&settings.cache_dir, settings.cache_ttl()),
        ))
    }
}

impl<S, C> RegistryService<S, C>
where
    S: RegistrySource,
    C: ListingCache,
{
    /// Create a service over an explicit source and cache.
    pub const fn new(source: S, cache: C) -> Self {
        Self { source, cache }
    }

    /// List servers, serving unscoped listings from the cache when fresh.
    ///
    /// A cache-write failure after a successful fetch is logged and
    /// swallowed; any fetch failure propagates verbatim.
    #[instrument(skip(self))]
    pub async fn list_servers(&self, query: &str) -> Result<Vec<ServerRecord>, RegistryError> {
        let (servers, save_error) = self.list_servers_traced(query).await?;
        if let Some(e) = save_error {
            warn!(error = %e, "failed to write registry listing cache; listing is unaffected");
        }
        Ok(servers)
    }

    /// Like [`Self::list_servers`], but hands the non-fatal cache-write
    /// outcome back to the caller instead of logging it.
    pub async fn list_servers_traced(
        &self,
        query: &str,
    ) -> Result<(Vec<ServerRecord>, Option<CacheError>), RegistryError> {
        // Scoped fetches never touch the cache, in either direction.
        if !query.is_empty() {
            let servers = self.source.list_servers(query).await?;
            return Ok((servers, None));
        }

        if let Some(cached) = self.cache.get_cached() {
            if !cached.is_empty() {
                debug!(servers = cached.len(), "serving registry listing from cache");
                return Ok((cached, None));
            }
        }

        let servers = self.source.list_servers("").await?;
        let save_error = self.cache.save(&servers).err();
        Ok((servers, save_error))
    }

    /// Drop the cached listing so the next unscoped call re-fetches.
    pub fn invalidate_cache(&self) -> Result<(), CacheError> {
        self.cache.invalidate()
    }
}

impl<S, C> RegistryService<S, C> {
    /// Borrow the underlying registry source.
    pub const fn source(&self) -> &S {
        &self.source
    }
}

impl<S> RegistryService<S, DiskCache> {
    /// Diagnostic state of the disk cache file.
    pub fn cache_status(&self) -> CacheStatus {
        self.cache.status()
    }
}

#[async_trait]
impl RegistrySource for RegistryClient {
    async fn list_servers(&self, query: &str) -> Result<Vec<ServerRecord>, RegistryError> {
        Self::list_servers(self, query).await
    }
}

impl ListingCache for DiskCache {
    fn get_cached(&self) -> Option<Vec<ServerRecord>> {
        Self::get_cached(self)
    }

    fn save(&self, servers: &[ServerRecord]) -> Result<(), CacheError> {
        Self::save(self, servers)
    }

    fn invalidate(&self) -> Result<(), CacheError> {
        Self::invalidate(self)
    }
}
