//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the trait interfaces that infrastructure adapters must
//! implement:
//! - `RegistrySource`: paginated listing of remote server definitions
//! - `ListingCache`: persistence of the most recent unscoped listing
//!
//! The cache-aware service in `services::registry_service` is generic over
//! both traits so its decision policy can be tested without network or
//! filesystem access.

use async_trait::async_trait;

use crate::domain::models::ServerRecord;
use crate::infrastructure::cache::CacheError;
use crate::infrastructure::registry::RegistryError;

/// A source of server definitions, typically the remote community registry.
#[async_trait]
pub trait RegistrySource: Send + Sync {
    /// Fetch the complete listing for `query`, following pagination to the
    /// last page. An empty query means "all servers".
    ///
    /// Implementations must preserve the source's ordering and must fail the
    /// whole listing if any page fails; callers never observe a truncated
    /// listing as if it were complete.
    async fn list_servers(&self, query: &str) -> Result<Vec<ServerRecord>, RegistryError>;
}

/// Persistence for the most recent unscoped server listing.
pub trait ListingCache: Send + Sync {
    /// Return the cached listing if one exists and has not expired.
    ///
    /// Missing, expired, and corrupt caches all yield `None`; from the
    /// caller's point of view those are recoverable, never errors.
    fn get_cached(&self) -> Option<Vec<ServerRecord>>;

    /// Replace the cached listing with `servers`, stamped with a fresh TTL.
    fn save(&self, servers: &[ServerRecord]) -> Result<(), CacheError>;

    /// Delete the cached listing. Succeeds when no cache exists.
    fn invalidate(&self) -> Result<(), CacheError>;
}
