//! CLI entrypoint for noitu
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use noitu_application::{
    LoadDictionaryUseCase, SessionTracker, SharedLexicon, SuggestError, SuggestWordUseCase,
    TrainWordUseCase,
};
use noitu_domain::RandomPicker;
use noitu_infrastructure::{ConfigLoader, HttpTextFetcher, JsonlWordStore};
use noitu_presentation::{ChatRepl, Cli, LoadReporter, ReplyFormatter};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("could not load configuration")?
    };
    config.validate().context("invalid configuration")?;

    info!("Starting noitu");

    // === Dependency Injection ===
    let fetcher = Arc::new(
        HttpTextFetcher::new(Duration::from_secs(config.http.timeout_secs))
            .context("could not build HTTP client")?,
    );
    let store_path = config
        .store
        .path
        .clone()
        .unwrap_or_else(default_store_path);
    let store = Arc::new(JsonlWordStore::open(&store_path).context("could not open word store")?);

    let tiers = config.dictionary.tiers.clone();
    // Validated above: the trainable tier names a configured tier.
    let trainable_tier = config.dictionary.trainable_index().unwrap();

    let lexicon = Arc::new(SharedLexicon::new(tiers.len()));
    let sessions = Arc::new(SessionTracker::new(
        config.session.ttl(),
        config.session.capacity,
    ));

    let loader = Arc::new(LoadDictionaryUseCase::new(
        fetcher,
        store.clone(),
        lexicon.clone(),
        config.sources.clone(),
        trainable_tier,
    ));
    let suggest = Arc::new(SuggestWordUseCase::new(
        lexicon.clone(),
        sessions.clone(),
        RandomPicker,
    ));
    let train = Arc::new(TrainWordUseCase::new(
        store,
        lexicon.clone(),
        trainable_tier,
    ));
    let formatter = ReplyFormatter::new(tiers);

    // Initial load. A fully unreachable set of sources still leaves a
    // working (empty) dictionary.
    let report = LoadReporter::new(cli.quiet).run(loader.execute()).await;
    if report.total == 0 {
        warn!("Dictionary is empty; every source failed or contributed nothing");
    }

    // Optional periodic refresh
    if let Some(secs) = cli.refresh.filter(|s| *s > 0) {
        let loader = loader.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(secs));
            interval.tick().await; // the initial load already happened
            loop {
                interval.tick().await;
                loader.execute().await;
            }
        });
    }

    // Training mode
    if let Some(raw) = cli.train {
        match train.execute(&raw).await {
            Ok(word) => println!("{}", formatter.trained(&word)),
            Err(e) => {
                println!("{}", formatter.train_error(&e));
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    // One-shot suggestion mode
    if let Some(syllable) = cli.syllable.as_deref().filter(|_| !cli.chat) {
        match suggest.start("oneshot-0", syllable) {
            Ok(suggestion) => println!("{}", formatter.suggestion(&suggestion)),
            Err(SuggestError::NoSuggestion(s)) => println!("{}", formatter.no_suggestion(&s)),
            Err(SuggestError::UnknownSession) => println!("{}", formatter.unknown_session()),
        }
        return Ok(());
    }

    // Chat mode (default when no syllable is given)
    let repl = ChatRepl::new(suggest, train, loader, lexicon, sessions, formatter)
        .with_quiet(cli.quiet);
    repl.run().await?;

    Ok(())
}

fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("noitu")
        .join("words.jsonl")
}
