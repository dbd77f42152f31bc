//! Manual training use case.
//!
//! Persists a user-submitted word to the word store and only then adds it
//! to the trainable tier, so the in-memory dictionary never holds a word
//! the store lost.

use crate::dictionary::SharedLexicon;
use crate::ports::word_store::{StoreError, WordStore};
use noitu_domain::{InvalidWord, Word};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Why a candidate was not trained.
#[derive(Error, Debug)]
pub enum TrainError {
    #[error("not an admissible word: {0}")]
    InvalidWord(#[from] InvalidWord),

    #[error("`{0}` is already known")]
    Duplicate(Word),

    #[error("could not persist word: {0}")]
    Persistence(String),
}

/// Use case for teaching the dictionary a new word.
pub struct TrainWordUseCase<S> {
    store: Arc<S>,
    lexicon: Arc<SharedLexicon>,
    trainable_tier: usize,
}

impl<S: WordStore> TrainWordUseCase<S> {
    pub fn new(store: Arc<S>, lexicon: Arc<SharedLexicon>, trainable_tier: usize) -> Self {
        Self {
            store,
            lexicon,
            trainable_tier,
        }
    }

    /// Validate, persist, then add to the trainable tier.
    pub async fn execute(&self, raw: &str) -> Result<Word, TrainError> {
        let word = Word::parse(raw)?;

        if self.lexicon.snapshot().contains(&word) {
            return Err(TrainError::Duplicate(word));
        }

        match self.store.insert(&word).await {
            Ok(()) => {}
            Err(StoreError::Duplicate) => return Err(TrainError::Duplicate(word)),
            Err(e) => return Err(TrainError::Persistence(e.to_string())),
        }

        self.lexicon.insert(self.trainable_tier, word.clone());
        info!(word = %word, "Trained new word");

        Ok(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Store double that records inserts and can be switched to fail.
    struct StubStore {
        stored: Mutex<Vec<String>>,
        mode: StubMode,
    }

    enum StubMode {
        Ok,
        Duplicate,
        Down,
    }

    impl StubStore {
        fn new(mode: StubMode) -> Arc<Self> {
            Arc::new(Self {
                stored: Mutex::new(Vec::new()),
                mode,
            })
        }
    }

    #[async_trait]
    impl WordStore for StubStore {
        async fn fetch_all(&self) -> Result<Vec<String>, StoreError> {
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn insert(&self, word: &Word) -> Result<(), StoreError> {
            match self.mode {
                StubMode::Ok => {
                    self.stored.lock().unwrap().push(word.as_str().to_string());
                    Ok(())
                }
                StubMode::Duplicate => Err(StoreError::Duplicate),
                StubMode::Down => Err(StoreError::Unavailable("stub down".to_string())),
            }
        }
    }

    fn use_case(store: Arc<StubStore>) -> (TrainWordUseCase<StubStore>, Arc<SharedLexicon>) {
        let lexicon = Arc::new(SharedLexicon::new(2));
        let uc = TrainWordUseCase::new(store, lexicon.clone(), 1);
        (uc, lexicon)
    }

    fn word(s: &str) -> Word {
        Word::parse(s).unwrap()
    }

    #[tokio::test]
    async fn trains_a_new_word_into_the_trainable_tier() {
        let store = StubStore::new(StubMode::Ok);
        let (uc, lexicon) = use_case(store.clone());

        let trained = uc.execute(" Con MEO ").await.unwrap();
        assert_eq!(trained, word("con meo"));
        assert_eq!(lexicon.snapshot().tier_of(&trained), Some(1));
        assert_eq!(store.stored.lock().unwrap().as_slice(), ["con meo"]);
    }

    #[tokio::test]
    async fn rejects_inadmissible_words() {
        let (uc, lexicon) = use_case(StubStore::new(StubMode::Ok));
        assert!(matches!(
            uc.execute("con-meo").await,
            Err(TrainError::InvalidWord(_))
        ));
        assert!(lexicon.snapshot().is_empty());
    }

    #[tokio::test]
    async fn training_twice_reports_duplicate() {
        let (uc, _lexicon) = use_case(StubStore::new(StubMode::Ok));
        uc.execute("con meo").await.unwrap();
        assert!(matches!(
            uc.execute("con meo").await,
            Err(TrainError::Duplicate(w)) if w == word("con meo")
        ));
    }

    #[tokio::test]
    async fn store_duplicate_maps_to_duplicate() {
        // The word is absent from memory but the store already has it.
        let (uc, lexicon) = use_case(StubStore::new(StubMode::Duplicate));
        assert!(matches!(
            uc.execute("con meo").await,
            Err(TrainError::Duplicate(_))
        ));
        assert!(lexicon.snapshot().is_empty());
    }

    #[tokio::test]
    async fn persistence_failure_leaves_memory_untouched() {
        let (uc, lexicon) = use_case(StubStore::new(StubMode::Down));
        assert!(matches!(
            uc.execute("con meo").await,
            Err(TrainError::Persistence(_))
        ));
        assert!(lexicon.snapshot().is_empty());
    }

    #[tokio::test]
    async fn priority_words_cannot_be_retrained() {
        let (uc, lexicon) = use_case(StubStore::new(StubMode::Ok));
        lexicon.insert(0, word("con meo"));
        assert!(matches!(
            uc.execute("con meo").await,
            Err(TrainError::Duplicate(_))
        ));
        // Still exactly one copy, in the priority tier.
        assert_eq!(lexicon.snapshot().tier_of(&word("con meo")), Some(0));
    }
}
