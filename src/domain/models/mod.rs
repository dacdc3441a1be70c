//! Domain model definitions

pub mod server;

pub use server::ServerRecord;
