//! Tiered dictionary model.
//!
//! The vocabulary is partitioned into preference-ordered tiers described
//! by [`TierSpec`]s. A [`Lexicon`] is one immutable-by-convention snapshot
//! of that partition: loads build a fresh `Lexicon` and swap it in
//! wholesale, while the training path inserts single words between loads.

use crate::word::Word;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A named dictionary partition.
///
/// Preference is positional: tier 0 in the configured list is consulted
/// first by the suggestion engine. The badge, if any, is appended to
/// suggestions drawn from the tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSpec {
    pub name: String,
    #[serde(default)]
    pub badge: Option<String>,
}

impl TierSpec {
    pub fn new(name: impl Into<String>, badge: Option<&str>) -> Self {
        Self {
            name: name.into(),
            badge: badge.map(str::to_string),
        }
    }

    /// The default two-tier layout: a curated tier consulted first, then
    /// the open tier that absorbs the word store and public corpora.
    pub fn default_tiers() -> Vec<TierSpec> {
        vec![
            TierSpec::new("priority", Some("💎")),
            TierSpec::new("standard", None),
        ]
    }
}

/// A snapshot of the full vocabulary, partitioned into tiers.
///
/// Invariants: every member passed [`Word::parse`] validation, and a word
/// lives in at most one tier — the lowest-indexed tier to claim it wins.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    tiers: Vec<HashSet<Word>>,
    /// How many words open with a given first syllable, across all tiers.
    /// Backs the kill-word check without a full scan per candidate.
    leads: HashMap<String, usize>,
}

impl Lexicon {
    pub fn new(tier_count: usize) -> Self {
        Self {
            tiers: vec![HashSet::new(); tier_count],
            leads: HashMap::new(),
        }
    }

    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    /// Total word count across all tiers.
    pub fn len(&self) -> usize {
        self.tiers.iter().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.iter().all(HashSet::is_empty)
    }

    /// Word count of a single tier.
    pub fn tier_len(&self, tier: usize) -> usize {
        self.tiers.get(tier).map_or(0, HashSet::len)
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.tiers.iter().any(|tier| tier.contains(word))
    }

    /// The tier a word belongs to, if any.
    pub fn tier_of(&self, word: &Word) -> Option<usize> {
        self.tiers.iter().position(|tier| tier.contains(word))
    }

    /// Insert a word into a tier. Returns `false` (and leaves the lexicon
    /// unchanged) when the word already exists in any tier or the tier
    /// index is out of range.
    pub fn insert(&mut self, tier: usize, word: Word) -> bool {
        if tier >= self.tiers.len() || self.contains(&word) {
            return false;
        }
        *self.leads.entry(word.first_syllable().to_string()).or_insert(0) += 1;
        self.tiers[tier].insert(word);
        true
    }

    /// Words in `tier` that chain from `syllable` and are not excluded.
    pub fn candidates<'a>(
        &'a self,
        tier: usize,
        syllable: &str,
        excluded: &[Word],
    ) -> Vec<&'a Word> {
        self.tiers
            .get(tier)
            .map(|words| {
                words
                    .iter()
                    .filter(|w| w.first_syllable() == syllable && !excluded.contains(w))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether any word in any tier chains from `syllable`.
    pub fn has_continuation(&self, syllable: &str) -> bool {
        self.leads.get(syllable).is_some_and(|&count| count > 0)
    }

    /// Iterate every word in every tier.
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.tiers.iter().flatten()
    }
}
