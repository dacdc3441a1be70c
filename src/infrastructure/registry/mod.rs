//! Community registry HTTP adapter
//!
//! Submodules:
//! - `client`: transport and pagination against the `/v0` listing API
//! - `types`: JSON wire envelopes
//! - `server_url`: parsed `https://` server references
//! - `error`: registry error taxonomy

pub mod client;
pub mod error;
pub mod server_url;
pub mod types;

pub use client::{RegistryClient, COMMUNITY_REGISTRY_BASE_URL};
pub use error::RegistryError;
pub use server_url::{ServerUrl, LATEST_VERSION};
pub use types::{ListMetadata, ServerEntry, ServerListResponse};
