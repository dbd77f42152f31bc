//! Runtime configuration for the loader, the engine and session tracking.
//!
//! These structs carry validated runtime settings into the use cases. The
//! on-disk schema and file discovery live in the infrastructure layer.

use noitu_domain::TierSpec;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where the dictionary loader pulls its words from.
///
/// Defaults point at the public nối từ corpora on GitHub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// JSON array of curated words, loaded into the first tier.
    pub priority_url: String,
    /// Line-delimited corpora: each non-blank line is `{"text": ...}`.
    pub jsonl_urls: Vec<String>,
    /// Plain-text corpus: one raw word per line.
    pub plain_text_url: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            priority_url:
                "https://raw.githubusercontent.com/c5least011/botgoiynoitu/refs/heads/main/data.json"
                    .to_string(),
            jsonl_urls: vec![
                "https://raw.githubusercontent.com/undertheseanlp/dictionary/refs/heads/wiktionary/dictionary/words.txt"
                    .to_string(),
                "https://raw.githubusercontent.com/undertheseanlp/dictionary/refs/heads/tudientv/dictionary/words.txt"
                    .to_string(),
                "https://raw.githubusercontent.com/undertheseanlp/dictionary/refs/heads/hongocduc/dictionary/words.txt"
                    .to_string(),
            ],
            plain_text_url:
                "https://raw.githubusercontent.com/lvdat/phobo-contribute-words/refs/heads/main/accepted-words.txt"
                    .to_string(),
        }
    }
}

/// Tier layout and where trained words land.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Preference-ordered tier list; index 0 is consulted first.
    pub tiers: Vec<TierSpec>,
    /// Name of the tier that absorbs the word store, the public corpora
    /// and manually trained words.
    pub trainable_tier: String,
}

impl EngineConfig {
    /// Index of the trainable tier within `tiers`.
    pub fn trainable_index(&self) -> Option<usize> {
        self.tiers.iter().position(|t| t.name == self.trainable_tier)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tiers: TierSpec::default_tiers(),
            trainable_tier: "standard".to_string(),
        }
    }
}

/// Bounds for the session tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Sessions idle longer than this are dropped.
    pub ttl_secs: u64,
    /// Hard cap on tracked sessions; the longest-idle entry is evicted
    /// when a new session would exceed it.
    pub capacity: usize,
}

impl SessionConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 30 * 60,
            capacity: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sources_cover_every_kind() {
        let sources = SourcesConfig::default();
        assert!(sources.priority_url.ends_with(".json"));
        assert_eq!(sources.jsonl_urls.len(), 3);
        assert!(!sources.plain_text_url.is_empty());
    }

    #[test]
    fn default_engine_trains_into_standard() {
        let engine = EngineConfig::default();
        assert_eq!(engine.trainable_index(), Some(1));
    }

    #[test]
    fn unknown_trainable_tier_has_no_index() {
        let engine = EngineConfig {
            trainable_tier: "curated".to_string(),
            ..EngineConfig::default()
        };
        assert_eq!(engine.trainable_index(), None);
    }
}
