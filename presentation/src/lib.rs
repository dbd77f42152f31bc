//! Presentation layer for noitu
//!
//! This crate contains CLI definitions, reply formatting, the load
//! progress reporter, and the interactive chat REPL.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::ReplyFormatter;
pub use progress::LoadReporter;
