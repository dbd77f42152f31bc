//! Suggestion use case.
//!
//! `start` opens an exchange for a fresh request identifier; `another`
//! continues an existing exchange, excluding everything already offered.
//! Follow-ups must present the identifier of the *originating* request —
//! an unknown or expired identifier is an error, never a silent new
//! exchange.

use crate::dictionary::SharedLexicon;
use crate::session::SessionTracker;
use noitu_domain::{Exchange, Picker, Suggestion, normalize_syllable, suggest};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Why no suggestion was produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SuggestError {
    /// No admissible word chains from the syllable (or everything that
    /// does was already offered). An explanatory condition, not a fault.
    #[error("no word chains from `{0}`")]
    NoSuggestion(String),

    /// The follow-up referenced a session this process is not tracking.
    #[error("unknown or expired session")]
    UnknownSession,
}

/// Use case for producing next-word suggestions.
pub struct SuggestWordUseCase<P: Picker> {
    lexicon: Arc<SharedLexicon>,
    sessions: Arc<SessionTracker>,
    picker: Mutex<P>,
}

impl<P: Picker> SuggestWordUseCase<P> {
    pub fn new(lexicon: Arc<SharedLexicon>, sessions: Arc<SessionTracker>, picker: P) -> Self {
        Self {
            lexicon,
            sessions,
            picker: Mutex::new(picker),
        }
    }

    /// First suggestion of an exchange. On success the exchange is
    /// tracked under `session_id` with the suggested word already in its
    /// exclusion history.
    pub fn start(&self, session_id: &str, raw_input: &str) -> Result<Suggestion, SuggestError> {
        let syllable = normalize_syllable(raw_input);
        let snapshot = self.lexicon.snapshot();
        let suggestion = {
            let mut picker = self.picker.lock().unwrap();
            suggest(&snapshot, &syllable, &[], &mut *picker)
        }
        .ok_or_else(|| SuggestError::NoSuggestion(syllable.clone()))?;

        let mut exchange = Exchange::new(syllable);
        exchange.record(suggestion.word.clone());
        self.sessions.start(session_id, exchange);

        Ok(suggestion)
    }

    /// Follow-up ("try another") for the exchange opened under
    /// `session_id`.
    pub fn another(&self, session_id: &str) -> Result<Suggestion, SuggestError> {
        let exchange = self
            .sessions
            .get(session_id)
            .ok_or(SuggestError::UnknownSession)?;
        let snapshot = self.lexicon.snapshot();
        let suggestion = {
            let mut picker = self.picker.lock().unwrap();
            suggest(&snapshot, exchange.syllable(), exchange.offered(), &mut *picker)
        }
        .ok_or_else(|| SuggestError::NoSuggestion(exchange.syllable().to_string()))?;

        self.sessions.append(session_id, suggestion.word.clone());

        Ok(suggestion)
    }
}
