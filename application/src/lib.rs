//! Application layer for noitu
//!
//! This crate contains use cases, port definitions, the shared dictionary
//! handle, and the session tracker. It depends only on the domain layer.

pub mod config;
pub mod dictionary;
pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use config::{EngineConfig, SessionConfig, SourcesConfig};
pub use dictionary::SharedLexicon;
pub use ports::{
    text_fetcher::{FetchError, TextFetcher},
    word_store::{StoreError, WordStore},
};
pub use session::SessionTracker;
pub use use_cases::load_dictionary::{LoadDictionaryUseCase, LoadReport, SourceReport};
pub use use_cases::suggest_word::{SuggestError, SuggestWordUseCase};
pub use use_cases::train_word::{TrainError, TrainWordUseCase};
