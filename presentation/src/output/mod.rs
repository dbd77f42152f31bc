//! User-facing reply formatting.

pub mod reply;

pub use reply::ReplyFormatter;
