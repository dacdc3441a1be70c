//! TTL-bounded disk cache for the unscoped server listing.
//!
//! The cache holds exactly one envelope: the full listing from the most
//! recent unscoped fetch plus its capture and expiry timestamps. Writes
//! replace the whole file atomically (write-temp-then-rename) so a
//! concurrent reader never observes a half-written envelope. There is no
//! lock file: overwrites are idempotent and the TTL bounds how stale a lost
//! write race can leave the cache.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::models::ServerRecord;

use super::error::CacheError;

/// File name of the listing cache inside the cache directory.
pub const CACHE_FILE_NAME: &str = "community-registry-cache.json";

/// Default time-to-live for a cached listing.
pub const DEFAULT_TTL_HOURS: i64 = 24;

/// The persisted unit: one full listing plus its freshness window.
///
/// Invariant: `expires_at = cached_at + ttl` at write time. An envelope is
/// usable iff it parsed and `now < expires_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEnvelope {
    /// Complete listing from the most recent unscoped fetch, in registry order
    pub servers: Vec<ServerRecord>,

    /// When the listing was fetched
    pub cached_at: DateTime<Utc>,

    /// When the listing stops being served from cache
    pub expires_at: DateTime<Utc>,
}

/// Diagnostic classification of the cache file, for observability.
///
/// `get_cached` collapses everything but `Valid` into "absent"; this keeps
/// the distinction available to callers that want to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// No cache file exists
    Missing,
    /// An envelope exists but its freshness window has passed
    Expired,
    /// The file exists but does not parse as an envelope
    Corrupt,
    /// A parseable, unexpired envelope exists
    Valid,
}

/// Listing cache rooted at an explicit directory.
///
/// The directory is injected rather than derived from the environment so
/// tests can run against a temp dir without mutating `$HOME`; the
/// conventional `~/.docker/mcp/cache` default lives in
/// [`crate::infrastructure::config::Settings`].
#[derive(Debug, Clone)]
pub struct DiskCache {
    dir: PathBuf,
    ttl: Duration,
}

impl DiskCache {
    /// Create a cache under `dir` with the given listing TTL.
    pub fn new(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            dir: dir.into(),
            ttl,
        }
    }

    /// Create a cache under `dir` with the default 24 hour TTL.
    pub fn with_default_ttl(dir: impl Into<PathBuf>) -> Self {
        Self::new(dir, Duration::hours(DEFAULT_TTL_HOURS))
    }

    /// Path of the cache file.
    pub fn file_path(&self) -> PathBuf {
        self.dir.join(CACHE_FILE_NAME)
    }

    /// Replace the cached listing with `servers`, stamping a fresh TTL.
    ///
    /// Parent directories are created on first write. The envelope is
    /// written to a temp file in the same directory and renamed into place.
    pub fn save(&self, servers: &[ServerRecord]) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir)?;

        let now = Utc::now();
        let envelope = CacheEnvelope {
            servers: servers.to_vec(),
            cached_at: now,
            expires_at: now + self.ttl,
        };

        let data = serde_json::to_vec(&envelope).map_err(CacheError::Serialize)?;

        let path = self.file_path();
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, &data)?;
        fs::rename(&tmp_path, &path)?;

        debug!(
            path = %path.display(),
            servers = envelope.servers.len(),
            expires_at = %envelope.expires_at,
            "wrote registry listing cache"
        );
        Ok(())
    }

    /// Load the envelope from disk without evaluating expiry.
    pub fn load(&self) -> Result<CacheEnvelope, CacheError> {
        let data = match fs::read(self.file_path()) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CacheError::NotFound)
            }
            Err(e) => return Err(CacheError::Io(e)),
        };

        serde_json::from_slice(&data).map_err(CacheError::Corrupt)
    }

    /// Whether an envelope is still within its freshness window. Pure; does
    /// no I/O.
    pub fn is_valid(envelope: &CacheEnvelope) -> bool {
        Utc::now() < envelope.expires_at
    }

    /// Classify the current state of the cache file.
    pub fn status(&self) -> CacheStatus {
        match self.load() {
            Ok(envelope) if Self::is_valid(&envelope) => CacheStatus::Valid,
            Ok(_) => CacheStatus::Expired,
            Err(CacheError::Corrupt(_)) => CacheStatus::Corrupt,
            Err(_) => CacheStatus::Missing,
        }
    }

    /// Return the cached listing if present and unexpired.
    ///
    /// Missing, expired, and corrupt caches all yield `None`; the caller
    /// falls back to a live fetch in every such case.
    pub fn get_cached(&self) -> Option<Vec<ServerRecord>> {
        match self.load() {
            Ok(envelope) if Self::is_valid(&envelope) => Some(envelope.servers),
            Ok(_) => {
                debug!("registry listing cache has expired");
                None
            }
            Err(CacheError::NotFound) => None,
            Err(e) => {
                debug!(error = %e, "ignoring unreadable registry listing cache");
                None
            }
        }
    }

    /// Delete the cache file. Succeeds when no cache exists.
    pub fn invalidate(&self) -> Result<(), CacheError> {
        match fs::remove_file(self.file_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CacheError::Io(e)),
        }
    }

    /// Directory the cache lives in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
