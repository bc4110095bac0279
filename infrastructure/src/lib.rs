//! Infrastructure layer for lex-chat
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the Amazon Lex gateway, configuration file loading,
//! and the JSONL exchange log.

pub mod config;
pub mod lex;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigLoader, FileBotConfig, FileConfig, FileLogConfig};
pub use lex::LexBotGateway;
pub use logging::JsonlExchangeLogger;
