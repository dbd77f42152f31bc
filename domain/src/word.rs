//! Two-syllable word value object.
//!
//! Every word that enters the system — from a remote source, the word
//! store, or manual training — goes through [`Word::parse`], so a `Word`
//! is always trimmed, lower-cased, and holds exactly two syllables joined
//! by a single space. Exclusion histories compare words by exact string
//! equality; funneling every entry point through the same normalization is
//! what makes that comparison sound.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Characters that disqualify a candidate outright.
pub const FORBIDDEN_CHARS: [char; 3] = [':', '*', '-'];

/// Why a candidate string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidWord {
    #[error("word is empty")]
    Empty,

    #[error("word contains forbidden character `{0}`")]
    ForbiddenChar(char),

    #[error("expected exactly two syllables, found {0}")]
    SyllableCount(usize),
}

/// A normalized two-syllable word.
///
/// Construction is only possible through [`Word::parse`], which
/// normalizes and validates, so holding a `Word` is proof the invariants
/// hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Normalize a raw candidate and validate it as a two-syllable word.
    ///
    /// Normalization: trim, lower-case, collapse inner whitespace runs to
    /// a single space.
    pub fn parse(raw: &str) -> Result<Self, InvalidWord> {
        let lowered = raw.trim().to_lowercase();
        if lowered.is_empty() {
            return Err(InvalidWord::Empty);
        }
        if let Some(c) = lowered.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
            return Err(InvalidWord::ForbiddenChar(c));
        }
        let syllables: Vec<&str> = lowered.split_whitespace().collect();
        if syllables.len() != 2 {
            return Err(InvalidWord::SyllableCount(syllables.len()));
        }
        Ok(Self(syllables.join(" ")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The syllable an opponent's word must end with for this word to be
    /// a legal reply.
    pub fn first_syllable(&self) -> &str {
        // Invariant: the inner string is "<first> <second>".
        self.0.split_once(' ').map(|(first, _)| first).unwrap_or(&self.0)
    }

    /// The syllable the opponent must chain from next.
    pub fn last_syllable(&self) -> &str {
        self.0.split_once(' ').map(|(_, last)| last).unwrap_or(&self.0)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Word {
    type Err = InvalidWord;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Word {
    type Error = InvalidWord;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

/// Check whether a raw string is an admissible two-syllable word.
pub fn is_valid(raw: &str) -> bool {
    Word::parse(raw).is_ok()
}

/// Normalize a caller-supplied syllable the same way [`Word::parse`]
/// normalizes words, so syllable lookups line up with stored words.
pub fn normalize_syllable(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_two_syllables() {
        assert!(is_valid("con meo"));
        assert!(is_valid("an com"));
    }

    #[test]
    fn rejects_forbidden_characters() {
        assert!(!is_valid("con-meo"));
        assert!(!is_valid("con: meo"));
        assert!(!is_valid("con *eo"));
    }

    #[test]
    fn rejects_wrong_syllable_count() {
        assert!(!is_valid("con"));
        assert!(!is_valid("con meo vang"));
        assert!(!is_valid(""));
        assert!(!is_valid("   "));
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let word = Word::parse("  Con   MEO  ").unwrap();
        assert_eq!(word.as_str(), "con meo");
    }

    #[test]
    fn parse_reports_specific_rejection() {
        assert_eq!(Word::parse(""), Err(InvalidWord::Empty));
        assert_eq!(Word::parse("con-meo"), Err(InvalidWord::ForbiddenChar('-')));
        assert_eq!(
            Word::parse("con meo vang"),
            Err(InvalidWord::SyllableCount(3))
        );
    }

    #[test]
    fn syllable_accessors() {
        let word = Word::parse("con meo").unwrap();
        assert_eq!(word.first_syllable(), "con");
        assert_eq!(word.last_syllable(), "meo");
    }

    #[test]
    fn normalize_syllable_matches_word_normalization() {
        let word = Word::parse("  Con Meo ").unwrap();
        assert_eq!(normalize_syllable("  CON "), word.first_syllable());
    }

    #[test]
    fn unicode_words_survive_normalization() {
        let word = Word::parse("Con MÈO").unwrap();
        assert_eq!(word.as_str(), "con mèo");
        assert_eq!(word.last_syllable(), "mèo");
    }
}
