//! Configuration file loading.

pub mod file_config;
pub mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FileHttpConfig, FileStoreConfig};
pub use loader::ConfigLoader;
