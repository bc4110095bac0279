//! Amazon Lex adapter
//!
//! Implements the `BotGateway` port over Lex Runtime V2.

pub mod gateway;
pub mod types;

pub use gateway::LexBotGateway;
