//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface for a Lex bot.

mod repl;

pub use repl::ChatRepl;
