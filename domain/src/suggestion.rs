//! Next-word selection.
//!
//! Tier preference, kill-word detection, and the randomized pick. The
//! randomness is behind the [`Picker`] trait so tests can script the
//! choice and assert on exact outcomes.

use crate::dictionary::Lexicon;
use crate::word::Word;
use rand::Rng;

/// Source of randomness for candidate selection.
pub trait Picker {
    /// Pick an index in `0..len`. Callers guarantee `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform picker backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl Picker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// A chosen next word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: Word,
    /// The word's second syllable starts no word in the lexicon, so the
    /// opponent has no legal reply.
    pub is_kill: bool,
    /// Index of the tier the word was drawn from.
    pub tier: usize,
}

/// Select a word that chains from `syllable`, skipping everything in
/// `excluded`.
///
/// The target set is the candidate set of the highest-preference tier
/// that has one; tiers are never blended. Within the target set,
/// kill-words dominate: if any candidate leaves the opponent without a
/// reply, the pick is made among those only. Returns `None` when no tier
/// has an admissible candidate.
pub fn suggest(
    lexicon: &Lexicon,
    syllable: &str,
    excluded: &[Word],
    picker: &mut dyn Picker,
) -> Option<Suggestion> {
    let (tier, target) = (0..lexicon.tier_count()).find_map(|t| {
        let candidates = lexicon.candidates(t, syllable, excluded);
        (!candidates.is_empty()).then_some((t, candidates))
    })?;

    let kills: Vec<&Word> = target
        .iter()
        .copied()
        .filter(|w| !lexicon.has_continuation(w.last_syllable()))
        .collect();

    let (pool, is_kill) = if kills.is_empty() {
        (&target, false)
    } else {
        (&kills, true)
    };

    let word = pool[picker.pick(pool.len())].clone();
    Some(Suggestion { word, is_kill, tier })
}
