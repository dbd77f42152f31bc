//! Dictionary load use case.
//!
//! Aggregates every configured source into a fresh [`Lexicon`] and swaps
//! it into the shared handle in one step. Safe to call repeatedly: each
//! run rebuilds from scratch, so words removed upstream disappear after
//! the next load. Source failures are isolated — a dead source
//! contributes nothing and the load continues.

use crate::config::SourcesConfig;
use crate::dictionary::SharedLexicon;
use crate::ports::text_fetcher::TextFetcher;
use crate::ports::word_store::WordStore;
use noitu_domain::{Lexicon, Word};
use serde::Deserialize;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// One line of a JSONL corpus.
#[derive(Deserialize)]
struct CorpusRecord {
    text: String,
}

/// What a single source contributed to a load.
#[derive(Debug, Clone)]
pub struct SourceReport {
    /// Short label for logs and the progress display.
    pub source: String,
    /// Words that survived normalization and validation.
    pub accepted: usize,
    /// Entries dropped by validation or per-line parse failures.
    pub skipped: usize,
    /// Set when the source as a whole failed.
    pub error: Option<String>,
}

impl SourceReport {
    fn ok(source: impl Into<String>, accepted: usize, skipped: usize) -> Self {
        Self {
            source: source.into(),
            accepted,
            skipped,
            error: None,
        }
    }

    fn failed(source: impl Into<String>, error: impl ToString) -> Self {
        Self {
            source: source.into(),
            accepted: 0,
            skipped: 0,
            error: Some(error.to_string()),
        }
    }
}

/// Outcome of one load run.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub sources: Vec<SourceReport>,
    /// Distinct words in the lexicon after the swap.
    pub total: usize,
}

impl LoadReport {
    pub fn failed_sources(&self) -> impl Iterator<Item = &SourceReport> {
        self.sources.iter().filter(|s| s.error.is_some())
    }
}

/// Identifies a fetched payload while tasks complete out of order.
enum Fetched {
    Priority(Result<String, String>),
    Store(Result<Vec<String>, String>),
    Jsonl(usize, Result<String, String>),
    Plain(Result<String, String>),
}

/// Use case for rebuilding the dictionary from all configured sources.
pub struct LoadDictionaryUseCase<F, S> {
    fetcher: Arc<F>,
    store: Arc<S>,
    lexicon: Arc<SharedLexicon>,
    sources: SourcesConfig,
    priority_tier: usize,
    trainable_tier: usize,
}

impl<F, S> LoadDictionaryUseCase<F, S>
where
    F: TextFetcher + 'static,
    S: WordStore + 'static,
{
    pub fn new(
        fetcher: Arc<F>,
        store: Arc<S>,
        lexicon: Arc<SharedLexicon>,
        sources: SourcesConfig,
        trainable_tier: usize,
    ) -> Self {
        Self {
            fetcher,
            store,
            lexicon,
            sources,
            // The curated source always lands in the highest-preference tier.
            priority_tier: 0,
            trainable_tier,
        }
    }

    /// Fetch every source concurrently, rebuild the lexicon, swap it in.
    ///
    /// Never fails: an unreachable source is reported in the returned
    /// [`LoadReport`] and contributes nothing.
    pub async fn execute(&self) -> LoadReport {
        info!("Rebuilding dictionary from {} sources", 3 + self.sources.jsonl_urls.len());

        let mut join_set = JoinSet::new();

        {
            let fetcher = self.fetcher.clone();
            let url = self.sources.priority_url.clone();
            join_set.spawn(async move {
                Fetched::Priority(fetcher.fetch_text(&url).await.map_err(|e| e.to_string()))
            });
        }
        {
            let store = self.store.clone();
            join_set.spawn(async move {
                Fetched::Store(store.fetch_all().await.map_err(|e| e.to_string()))
            });
        }
        for (idx, url) in self.sources.jsonl_urls.iter().enumerate() {
            let fetcher = self.fetcher.clone();
            let url = url.clone();
            join_set.spawn(async move {
                Fetched::Jsonl(idx, fetcher.fetch_text(&url).await.map_err(|e| e.to_string()))
            });
        }
        {
            let fetcher = self.fetcher.clone();
            let url = self.sources.plain_text_url.clone();
            join_set.spawn(async move {
                Fetched::Plain(fetcher.fetch_text(&url).await.map_err(|e| e.to_string()))
            });
        }

        // Collect results; completion order does not matter because each
        // contribution is parsed into its own bucket before the build.
        let mut priority_body = None;
        let mut store_records = None;
        let mut jsonl_bodies: Vec<Option<Result<String, String>>> =
            vec![None; self.sources.jsonl_urls.len()];
        let mut plain_body = None;

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(Fetched::Priority(res)) => priority_body = Some(res),
                Ok(Fetched::Store(res)) => store_records = Some(res),
                Ok(Fetched::Jsonl(idx, res)) => jsonl_bodies[idx] = Some(res),
                Ok(Fetched::Plain(res)) => plain_body = Some(res),
                Err(e) => warn!("Source fetch task panicked: {e}"),
            }
        }

        let mut fresh = Lexicon::new(self.lexicon.tier_count());
        let mut report = LoadReport::default();

        // Priority source first so it claims words duplicated downstream.
        report.sources.push(self.ingest_priority(&mut fresh, priority_body));
        report.sources.push(self.ingest_store(&mut fresh, store_records));
        for (idx, body) in jsonl_bodies.into_iter().enumerate() {
            let label = format!("corpus[{idx}]");
            report
                .sources
                .push(self.ingest_lines(&mut fresh, &label, body.flatten_missing(), parse_jsonl_line));
        }
        report
            .sources
            .push(self.ingest_lines(&mut fresh, "plain-text", plain_body.flatten_missing(), parse_plain_line));

        report.total = fresh.len();
        self.lexicon.replace(fresh);

        for failed in report.failed_sources() {
            warn!(source = %failed.source, error = failed.error.as_deref(), "Source contributed nothing");
        }
        info!(total = report.total, "Dictionary rebuilt");

        report
    }

    /// Curated source: one JSON array of raw word strings, possibly with
    /// smart quotes standing in for straight ones.
    fn ingest_priority(
        &self,
        lexicon: &mut Lexicon,
        body: Option<Result<String, String>>,
    ) -> SourceReport {
        const LABEL: &str = "priority";
        let body = match body.flatten_missing() {
            Ok(b) => b,
            Err(e) => return SourceReport::failed(LABEL, e),
        };
        let straightened = body.replace(['“', '”'], "\"");
        let raw: Vec<String> = match serde_json::from_str(&straightened) {
            Ok(r) => r,
            Err(e) => return SourceReport::failed(LABEL, e),
        };
        let mut accepted = 0;
        let mut skipped = 0;
        for entry in &raw {
            match Word::parse(entry) {
                Ok(word) => {
                    if lexicon.insert(self.priority_tier, word) {
                        accepted += 1;
                    }
                }
                Err(_) => skipped += 1,
            }
        }
        SourceReport::ok(LABEL, accepted, skipped)
    }

    fn ingest_store(
        &self,
        lexicon: &mut Lexicon,
        records: Option<Result<Vec<String>, String>>,
    ) -> SourceReport {
        const LABEL: &str = "word-store";
        let records = match records.flatten_missing() {
            Ok(r) => r,
            Err(e) => return SourceReport::failed(LABEL, e),
        };
        let mut accepted = 0;
        let mut skipped = 0;
        for record in &records {
            match Word::parse(record) {
                Ok(word) => {
                    if lexicon.insert(self.trainable_tier, word) {
                        accepted += 1;
                    }
                }
                Err(_) => skipped += 1,
            }
        }
        SourceReport::ok(LABEL, accepted, skipped)
    }

    /// Line-oriented sources. `parse_line` extracts the raw word from one
    /// non-blank line; a malformed line is skipped on its own and never
    /// aborts its neighbors.
    fn ingest_lines(
        &self,
        lexicon: &mut Lexicon,
        label: &str,
        body: Result<String, String>,
        parse_line: fn(&str) -> Option<String>,
    ) -> SourceReport {
        let body = match body {
            Ok(b) => b,
            Err(e) => return SourceReport::failed(label, e),
        };
        let mut accepted = 0;
        let mut skipped = 0;
        for line in body.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let Some(raw) = parse_line(line) else {
                debug!(source = label, "Skipping malformed line");
                skipped += 1;
                continue;
            };
            match Word::parse(&raw) {
                Ok(word) => {
                    if lexicon.insert(self.trainable_tier, word) {
                        accepted += 1;
                    }
                }
                Err(_) => skipped += 1,
            }
        }
        SourceReport::ok(label, accepted, skipped)
    }
}

fn parse_jsonl_line(line: &str) -> Option<String> {
    serde_json::from_str::<CorpusRecord>(line).ok().map(|r| r.text)
}

fn parse_plain_line(line: &str) -> Option<String> {
    Some(line.to_string())
}

/// A task that never reported back counts as a failed source.
trait FlattenMissing<T> {
    fn flatten_missing(self) -> Result<T, String>;
}

impl<T> FlattenMissing<T> for Option<Result<T, String>> {
    fn flatten_missing(self) -> Result<T, String> {
        self.unwrap_or_else(|| Err("fetch task aborted".to_string()))
    }
}
