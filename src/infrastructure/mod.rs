//! Infrastructure layer module
//!
//! This module contains the adapters behind the domain ports:
//! - Registry HTTP client (reqwest)
//! - Disk cache for server listings
//! - Configuration management (figment)

pub mod cache;
pub mod config;
pub mod registry;
