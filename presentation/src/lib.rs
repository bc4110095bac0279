//! Presentation layer for lex-chat
//!
//! This crate contains CLI definitions, the console transcript
//! presenter, and the interactive chat REPL.

pub mod chat;
pub mod cli;
pub mod output;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::ConsoleTranscript;
