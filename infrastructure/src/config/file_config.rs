//! On-disk configuration schema (`noitu.toml`).

use noitu_application::config::{EngineConfig, SessionConfig, SourcesConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileHttpConfig {
    /// Per-request timeout for dictionary source fetches.
    pub timeout_secs: u64,
}

impl Default for FileHttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

/// Word store location.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileStoreConfig {
    /// Path to the JSONL word store. Defaults to
    /// `<data_dir>/noitu/words.jsonl` when unset.
    pub path: Option<PathBuf>,
}

/// Everything `noitu.toml` can set.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub dictionary: EngineConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub http: FileHttpConfig,
    #[serde(default)]
    pub store: FileStoreConfig,
}

/// Configuration mistakes worth failing startup over.
#[derive(Error, Debug)]
pub enum ConfigValidationError {
    #[error("at least one dictionary tier must be configured")]
    NoTiers,

    #[error("tier `{0}` is configured more than once")]
    DuplicateTier(String),

    #[error("trainable tier `{0}` is not in the tier list")]
    UnknownTrainableTier(String),
}

impl FileConfig {
    /// Check cross-field consistency that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.dictionary.tiers.is_empty() {
            return Err(ConfigValidationError::NoTiers);
        }
        for (idx, tier) in self.dictionary.tiers.iter().enumerate() {
            if self.dictionary.tiers[..idx].iter().any(|t| t.name == tier.name) {
                return Err(ConfigValidationError::DuplicateTier(tier.name.clone()));
            }
        }
        if self.dictionary.trainable_index().is_none() {
            return Err(ConfigValidationError::UnknownTrainableTier(
                self.dictionary.trainable_tier.clone(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noitu_domain::TierSpec;

    #[test]
    fn defaults_validate() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn default_sessions_are_bounded() {
        let config = FileConfig::default();
        assert!(config.session.ttl_secs > 0);
        assert!(config.session.capacity > 0);
    }

    #[test]
    fn empty_tier_list_is_rejected() {
        let mut config = FileConfig::default();
        config.dictionary.tiers.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::NoTiers)
        ));
    }

    #[test]
    fn duplicate_tier_names_are_rejected() {
        let mut config = FileConfig::default();
        config.dictionary.tiers.push(TierSpec::new("priority", None));
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::DuplicateTier(name)) if name == "priority"
        ));
    }

    #[test]
    fn unknown_trainable_tier_is_rejected() {
        let mut config = FileConfig::default();
        config.dictionary.trainable_tier = "curated".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::UnknownTrainableTier(name)) if name == "curated"
        ));
    }

    #[test]
    fn toml_overrides_merge_over_defaults() {
        let parsed: FileConfig = toml::from_str(
            r#"
            [session]
            ttl_secs = 60
            capacity = 4

            [[dictionary.tiers]]
            name = "priority"
            badge = "💎"

            [[dictionary.tiers]]
            name = "standard"

            [dictionary]
            trainable_tier = "standard"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.session.ttl_secs, 60);
        assert_eq!(parsed.session.capacity, 4);
        assert!(parsed.validate().is_ok());
    }
}
