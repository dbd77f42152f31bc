//! Process-wide dictionary handle.
//!
//! Readers take an `Arc` snapshot and never observe a partially-built
//! lexicon: a reload builds its replacement off to the side and swaps the
//! `Arc` in one write. The training path inserts single words between
//! reloads.

use noitu_domain::{Lexicon, Word};
use std::sync::{Arc, RwLock};

/// Shared, reload-replaceable dictionary store.
pub struct SharedLexicon {
    inner: RwLock<Arc<Lexicon>>,
}

impl SharedLexicon {
    /// Start with an empty lexicon of `tier_count` tiers.
    pub fn new(tier_count: usize) -> Self {
        Self {
            inner: RwLock::new(Arc::new(Lexicon::new(tier_count))),
        }
    }

    /// Current snapshot. Cheap (`Arc` clone); the snapshot stays valid
    /// across a concurrent reload.
    pub fn snapshot(&self) -> Arc<Lexicon> {
        self.inner.read().unwrap().clone()
    }

    /// Atomically replace the whole lexicon with a freshly built one.
    pub fn replace(&self, fresh: Lexicon) {
        *self.inner.write().unwrap() = Arc::new(fresh);
    }

    /// Insert a single word outside a reload (training path). Returns
    /// `false` when the word is already known or the tier is out of range.
    pub fn insert(&self, tier: usize, word: Word) -> bool {
        let mut guard = self.inner.write().unwrap();
        Arc::make_mut(&mut guard).insert(tier, word)
    }

    pub fn tier_count(&self) -> usize {
        self.inner.read().unwrap().tier_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::parse(s).unwrap()
    }

    #[test]
    fn snapshot_survives_replace() {
        let shared = SharedLexicon::new(2);
        shared.insert(0, word("con meo"));

        let before = shared.snapshot();

        let mut fresh = Lexicon::new(2);
        fresh.insert(1, word("meo gao"));
        shared.replace(fresh);

        // The old snapshot still sees the old state; new readers see the
        // replacement, with no blended intermediate.
        assert!(before.contains(&word("con meo")));
        assert!(!before.contains(&word("meo gao")));

        let after = shared.snapshot();
        assert!(!after.contains(&word("con meo")));
        assert!(after.contains(&word("meo gao")));
    }

    #[test]
    fn insert_deduplicates_against_current_state() {
        let shared = SharedLexicon::new(2);
        assert!(shared.insert(1, word("con meo")));
        assert!(!shared.insert(1, word("con meo")));
        assert!(!shared.insert(0, word("con meo")));
        assert_eq!(shared.snapshot().len(), 1);
    }
}
