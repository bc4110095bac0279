//! Application layer for lex-chat
//!
//! This crate contains the exchange use case and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    bot_gateway::{BotGateway, GatewayError},
    exchange_logger::{ExchangeEvent, ExchangeLogger, NoExchangeLogger},
    presenter::{NoTranscriptPresenter, TranscriptPresenter},
};
pub use use_cases::run_exchange::{ExchangeOutcome, RunExchangeUseCase};
