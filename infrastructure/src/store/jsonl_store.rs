//! JSONL file adapter for the word store port.
//!
//! One record per line: `{"text": "<word>"}`. The file is read once on
//! open; inserts append a line and are rejected when the word is already
//! present, so the store enforces the uniqueness the port promises.

use async_trait::async_trait;
use noitu_application::ports::word_store::{StoreError, WordStore};
use noitu_domain::Word;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

#[derive(Serialize, Deserialize)]
struct StoredWord {
    text: String,
}

/// Append-only JSONL word store.
pub struct JsonlWordStore {
    path: PathBuf,
    known: Mutex<HashSet<String>>,
}

impl JsonlWordStore {
    /// Open (or create) the store at `path`, reading every existing
    /// record. Malformed lines are skipped with a warning rather than
    /// poisoning the store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        }

        let mut known = HashSet::new();
        if path.exists() {
            let file = File::open(&path).map_err(|e| StoreError::Unavailable(e.to_string()))?;
            for line in BufReader::new(file).lines() {
                let line = line.map_err(|e| StoreError::Unavailable(e.to_string()))?;
                if line.trim().is_empty() {
                    continue;
                }
                match serde_json::from_str::<StoredWord>(&line) {
                    Ok(record) => {
                        known.insert(record.text);
                    }
                    Err(e) => warn!(path = %path.display(), "Skipping malformed store line: {e}"),
                }
            }
        }

        Ok(Self {
            path,
            known: Mutex::new(known),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl WordStore for JsonlWordStore {
    async fn fetch_all(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.known.lock().unwrap().iter().cloned().collect())
    }

    async fn insert(&self, word: &Word) -> Result<(), StoreError> {
        let mut known = self.known.lock().unwrap();
        if known.contains(word.as_str()) {
            return Err(StoreError::Duplicate);
        }

        let line = serde_json::to_string(&StoredWord {
            text: word.as_str().to_string(),
        })
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        writeln!(file, "{line}").map_err(|e| StoreError::Unavailable(e.to_string()))?;

        known.insert(word.as_str().to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::parse(s).unwrap()
    }

    #[tokio::test]
    async fn insert_then_fetch_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlWordStore::open(dir.path().join("words.jsonl")).unwrap();

        store.insert(&word("con meo")).await.unwrap();
        store.insert(&word("meo gao")).await.unwrap();

        let mut all = store.fetch_all().await.unwrap();
        all.sort();
        assert_eq!(all, ["con meo", "meo gao"]);
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlWordStore::open(dir.path().join("words.jsonl")).unwrap();

        store.insert(&word("con meo")).await.unwrap();
        assert!(matches!(
            store.insert(&word("con meo")).await,
            Err(StoreError::Duplicate)
        ));
        assert_eq!(store.fetch_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.jsonl");

        {
            let store = JsonlWordStore::open(&path).unwrap();
            store.insert(&word("con meo")).await.unwrap();
        }

        let reopened = JsonlWordStore::open(&path).unwrap();
        assert_eq!(reopened.fetch_all().await.unwrap(), ["con meo"]);
        assert!(matches!(
            reopened.insert(&word("con meo")).await,
            Err(StoreError::Duplicate)
        ));
    }

    #[tokio::test]
    async fn malformed_lines_are_skipped_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.jsonl");
        std::fs::write(&path, "{\"text\": \"con meo\"}\ngarbage\n{\"text\": \"meo gao\"}\n")
            .unwrap();

        let store = JsonlWordStore::open(&path).unwrap();
        let mut all = store.fetch_all().await.unwrap();
        all.sort();
        assert_eq!(all, ["con meo", "meo gao"]);
    }

    #[tokio::test]
    async fn open_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("words.jsonl");
        let store = JsonlWordStore::open(&path).unwrap();
        store.insert(&word("con meo")).await.unwrap();
        assert!(path.exists());
    }
}
