//! Configuration module for skinup
//!
//! Provides types, discovery and parsing for `skinup.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
