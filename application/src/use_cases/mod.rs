//! Use cases: dictionary loading, suggestion, manual training.

pub mod load_dictionary;
pub mod suggest_word;
pub mod train_word;
