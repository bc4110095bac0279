//! Domain layer for lex-chat
//!
//! This crate contains the core entities and value objects of a chat
//! exchange with an Amazon Lex bot. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! One process run holds exactly one [`SessionId`], generated at startup
//! and carried unchanged on every request. Lex uses it to correlate the
//! exchanges on its side; nothing else is tracked locally.
//!
//! ## Exchange
//!
//! One user-text submission paired with its eventual reply or error.
//! The reply is an ordered list of [`ReplySegment`]s, each displayed as
//! its own transcript entry.

pub mod exchange;
pub mod providers;
pub mod session;

// Re-export commonly used types
pub use exchange::{
    entities::{Sender, Utterance},
    reply::{BotReply, ReplySegment},
};
pub use providers::LexBotConfig;
pub use session::entities::SessionId;
