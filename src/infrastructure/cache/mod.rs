//! Disk cache adapter for server listings

pub mod disk;
pub mod error;

pub use disk::{CacheEnvelope, CacheStatus, DiskCache, CACHE_FILE_NAME, DEFAULT_TTL_HOURS};
pub use error::CacheError;
