//! REPL (Read-Eval-Print Loop) for interactive suggestion exchanges.
//!
//! Each plain input opens a new exchange; `/another` continues the most
//! recent one through its originating identifier, exactly the way a chat
//! platform's "try another" button would.

use crate::ReplyFormatter;
use crate::progress::LoadReporter;
use noitu_application::{
    LoadDictionaryUseCase, SessionTracker, SharedLexicon, SuggestError, SuggestWordUseCase,
    TextFetcher, TrainWordUseCase, WordStore,
};
use noitu_domain::Picker;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Interactive suggestion REPL
pub struct ChatRepl<F, S, P>
where
    F: TextFetcher + 'static,
    S: WordStore + 'static,
    P: Picker,
{
    suggest: Arc<SuggestWordUseCase<P>>,
    train: Arc<TrainWordUseCase<S>>,
    loader: Arc<LoadDictionaryUseCase<F, S>>,
    lexicon: Arc<SharedLexicon>,
    sessions: Arc<SessionTracker>,
    formatter: ReplyFormatter,
    quiet: bool,
    exchange_counter: AtomicU64,
    last_session: Mutex<Option<String>>,
}

impl<F, S, P> ChatRepl<F, S, P>
where
    F: TextFetcher + 'static,
    S: WordStore + 'static,
    P: Picker,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        suggest: Arc<SuggestWordUseCase<P>>,
        train: Arc<TrainWordUseCase<S>>,
        loader: Arc<LoadDictionaryUseCase<F, S>>,
        lexicon: Arc<SharedLexicon>,
        sessions: Arc<SessionTracker>,
        formatter: ReplyFormatter,
    ) -> Self {
        Self {
            suggest,
            train,
            loader,
            lexicon,
            sessions,
            formatter,
            quiet: false,
            exchange_counter: AtomicU64::new(0),
            last_session: Mutex::new(None),
        }
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("noitu").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    self.open_exchange(line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            noitu - Chat Mode                │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Dictionary: {} words", self.lexicon.snapshot().len());
        println!();
        println!("Type a syllable to get a suggestion, then:");
        println!("  /another  - Try another word for the same syllable");
        println!("  /train W  - Teach a new two-syllable word");
        println!("  /reload   - Rebuild the dictionary from its sources");
        println!("  /stats    - Dictionary and session counters");
        println!("  /help     - Show all commands");
        println!("  /quit     - Exit");
        println!();
    }

    /// Start a new exchange for the typed syllable.
    fn open_exchange(&self, input: &str) {
        let id = format!("repl-{}", self.exchange_counter.fetch_add(1, Ordering::Relaxed));
        match self.suggest.start(&id, input) {
            Ok(suggestion) => {
                *self.last_session.lock().unwrap() = Some(id);
                println!("{}", self.formatter.suggestion(&suggestion));
            }
            Err(SuggestError::NoSuggestion(syllable)) => {
                println!("{}", self.formatter.no_suggestion(&syllable));
            }
            // `start` never reports an unknown session; it creates one.
            Err(SuggestError::UnknownSession) => {
                println!("{}", self.formatter.unknown_session());
            }
        }
    }

    /// Continue the most recent exchange.
    fn try_another(&self) {
        let last = self.last_session.lock().unwrap().clone();
        let Some(id) = last else {
            println!("{}", self.formatter.unknown_session());
            return;
        };
        match self.suggest.another(&id) {
            Ok(suggestion) => println!("{}", self.formatter.suggestion(&suggestion)),
            Err(SuggestError::NoSuggestion(_)) => println!("{}", self.formatter.exhausted()),
            Err(SuggestError::UnknownSession) => {
                println!("{}", self.formatter.unknown_session())
            }
        }
    }

    async fn train_word(&self, raw: &str) {
        match self.train.execute(raw).await {
            Ok(word) => println!("{}", self.formatter.trained(&word)),
            Err(e) => println!("{}", self.formatter.train_error(&e)),
        }
    }

    async fn reload(&self) {
        let reporter = LoadReporter::new(self.quiet);
        reporter.run(self.loader.execute()).await;
    }

    fn stats(&self) {
        let snapshot = self.lexicon.snapshot();
        println!();
        println!("Dictionary: {} words", snapshot.len());
        for tier in 0..snapshot.tier_count() {
            println!("  tier {}: {} words", tier, snapshot.tier_len(tier));
        }
        println!("Tracked sessions: {}", self.sessions.len());
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&self, cmd: &str) -> bool {
        let (name, arg) = match cmd.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (cmd, ""),
        };

        match name {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                return true;
            }
            "/another" | "/a" => self.try_another(),
            "/train" | "/t" => {
                if arg.is_empty() {
                    println!("Usage: /train <two-syllable word>");
                } else {
                    self.train_word(arg).await;
                }
            }
            "/reload" => self.reload().await,
            "/stats" => self.stats(),
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /another, /a     - Try another word for the last syllable");
                println!("  /train W, /t W   - Teach a new two-syllable word");
                println!("  /reload          - Rebuild the dictionary from its sources");
                println!("  /stats           - Dictionary and session counters");
                println!("  /help, /h, /?    - Show this help");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }
}
