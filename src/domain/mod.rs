//! Domain layer module
//!
//! Pure registry models and the port traits that infrastructure adapters
//! implement. Nothing in this layer performs I/O.

pub mod models;
pub mod ports;
