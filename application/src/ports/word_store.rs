//! Port for the persistent word store.
//!
//! A keyed collection of text records, one normalized word per record,
//! with uniqueness enforced by the store itself. The loader reads it in
//! full on every reload; the training path inserts single records.

use async_trait::async_trait;
use noitu_domain::Word;
use thiserror::Error;

/// Store-level failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("word already stored")]
    Duplicate,

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistent word store contract.
#[async_trait]
pub trait WordStore: Send + Sync {
    /// Every stored record, as raw text. Callers re-normalize and
    /// re-validate; the store makes no validity promise.
    async fn fetch_all(&self) -> Result<Vec<String>, StoreError>;

    /// Insert one word. Fails with [`StoreError::Duplicate`] when the
    /// word is already present.
    async fn insert(&self, word: &Word) -> Result<(), StoreError>;
}
