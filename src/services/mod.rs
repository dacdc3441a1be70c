//! Service layer module

pub mod registry_service;

pub use registry_service::{CachedRegistry, RegistryService};
