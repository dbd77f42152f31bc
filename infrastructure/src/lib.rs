//! Infrastructure layer for noitu
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod http;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig, FileHttpConfig, FileStoreConfig};
pub use http::HttpTextFetcher;
pub use store::JsonlWordStore;
