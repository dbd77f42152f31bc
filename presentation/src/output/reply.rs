//! Reply strings shown to the player.
//!
//! The wording and markers (🔥 for a kill, ✅ otherwise, plus the tier
//! badge) are a display contract: a chat-platform adapter forwards these
//! strings verbatim.

use noitu_application::TrainError;
use noitu_domain::{Suggestion, TierSpec, Word};

/// Formats suggestion and training outcomes for the player.
pub struct ReplyFormatter {
    tiers: Vec<TierSpec>,
}

impl ReplyFormatter {
    pub fn new(tiers: Vec<TierSpec>) -> Self {
        Self { tiers }
    }

    /// `Gợi ý: **<word>** 🔥|✅[ <badge>]`
    pub fn suggestion(&self, suggestion: &Suggestion) -> String {
        let marker = if suggestion.is_kill { "🔥" } else { "✅" };
        let badge = self
            .tiers
            .get(suggestion.tier)
            .and_then(|tier| tier.badge.as_deref())
            .map(|badge| format!(" {badge}"))
            .unwrap_or_default();
        format!("Gợi ý: **{}** {}{}", suggestion.word, marker, badge)
    }

    /// No word chains from the opening input.
    pub fn no_suggestion(&self, syllable: &str) -> String {
        format!("Chịu, k nối nổi từ **{syllable}**")
    }

    /// A follow-up ran the exchange dry.
    pub fn exhausted(&self) -> String {
        "Hết từ r!".to_string()
    }

    /// The follow-up referenced an exchange nobody is tracking.
    pub fn unknown_session(&self) -> String {
        "Lệnh cũ r".to_string()
    }

    pub fn trained(&self, word: &Word) -> String {
        format!("Đã nạp **{word}**")
    }

    pub fn train_error(&self, error: &TrainError) -> String {
        match error {
            TrainError::InvalidWord(_) => "Từ dỏm k nạp!".to_string(),
            TrainError::Duplicate(_) => "có r".to_string(),
            TrainError::Persistence(_) => "Lỗi rồi".to_string(),
        }
    }
}
