//! mcp-registry - Cached MCP Community Registry Client
//!
//! This crate provides the registry access layer used by MCP catalog and
//! profile tooling: a read-only HTTP client for the community server registry
//! with transparent pagination and a TTL-bounded disk cache, so repeated CLI
//! invocations do not re-fetch the full server listing on every run.
//!
//! # Architecture
//!
//! The crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Registry server models and port traits
//! - **Service Layer** (`services`): Cache-aware listing policy
//! - **Infrastructure Layer** (`infrastructure`): HTTP transport, disk cache,
//!   and configuration adapters
//!
//! # Example
//!
//! ```ignore
//! use mcp_registry::{CachedRegistry, Settings};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let registry = CachedRegistry::from_settings(&settings)?;
//!
//!     // Served from the disk cache when a fresh listing exists.
//!     let servers = registry.list_servers("").await?;
//!     println!("{} servers", servers.len());
//!     Ok(())
//! }
//! ```

pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::ServerRecord;
pub use domain::ports::{ListingCache, RegistrySource};
pub use infrastructure::cache::{CacheEnvelope, CacheError, CacheStatus, DiskCache};
pub use infrastructure::config::{ConfigError, Settings};
pub use infrastructure::registry::{RegistryClient, RegistryError, ServerUrl};
pub use services::{CachedRegistry, RegistryService};
