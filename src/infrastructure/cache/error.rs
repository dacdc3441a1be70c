use thiserror::Error;

/// Errors from the listing cache on disk.
///
/// These are always recoverable from a caller's point of view: the
/// cache-aware service treats every variant as "no usable cache" and falls
/// back to a live fetch.
#[derive(Error, Debug)]
pub enum CacheError {
    /// No cache file exists yet
    #[error("cache file not found")]
    NotFound,

    /// The cache file exists but does not parse as a listing envelope
    #[error("cache file is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// Filesystem failure while reading, writing, or deleting the cache
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The listing could not be serialized for writing
    #[error("failed to serialize cache: {0}")]
    Serialize(#[source] serde_json::Error),
}
