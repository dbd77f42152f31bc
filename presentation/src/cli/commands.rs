//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for noitu
#[derive(Parser, Debug)]
#[command(name = "noitu")]
#[command(version, about = "Word-chain helper - suggests a two-syllable reply for the nối từ game")]
#[command(long_about = r#"
noitu suggests replies for the two-syllable word-chaining game: give it the
syllable your opponent's word ended with and it proposes a word that chains
from it, preferring the curated tier and going for kill-words (replies the
opponent cannot continue) whenever one exists.

Configuration files are loaded from (in priority order):
1. --config <path>   Explicit config file
2. ./noitu.toml      Project-level config
3. ~/.config/noitu/config.toml   Global config

Example:
  noitu con                 One suggestion for "con ..."
  noitu --chat              Interactive session with "try another"
  noitu --train "con meo"   Teach the dictionary a new word
"#)]
pub struct Cli {
    /// Syllable to chain from (omit for chat mode)
    pub syllable: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Teach the dictionary a new two-syllable word and exit
    #[arg(long, value_name = "WORD")]
    pub train: Option<String>,

    /// Reload the dictionary every SECS seconds while running
    #[arg(long, value_name = "SECS")]
    pub refresh: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_definitions_are_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_one_shot_invocation() {
        let cli = Cli::parse_from(["noitu", "con", "-vv", "--quiet"]);
        assert_eq!(cli.syllable.as_deref(), Some("con"));
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert!(!cli.chat);
    }

    #[test]
    fn parses_train_invocation() {
        let cli = Cli::parse_from(["noitu", "--train", "con meo"]);
        assert_eq!(cli.train.as_deref(), Some("con meo"));
        assert!(cli.syllable.is_none());
    }
}
