//! Bot gateway port
//!
//! Defines the interface for communicating with the hosted conversational
//! service. The Lex adapter lives in the infrastructure layer.

use async_trait::async_trait;
use lexchat_domain::{BotReply, SessionId};
use thiserror::Error;

/// Errors that can occur during a service call.
///
/// The variants exist for diagnostics; the dispatcher treats them
/// uniformly and only the `Display` message reaches the transcript.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Network timeout")]
    Timeout,

    #[error("Bot not found: {0}")]
    BotNotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Throttled: {0}")]
    Throttled(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("{0}")]
    Other(String),
}

/// Gateway for the conversational service.
///
/// One call per invocation; the service is stateful on its side, keyed by
/// the session identifier, so nothing beyond the identifier travels with
/// the text.
#[async_trait]
pub trait BotGateway: Send + Sync {
    /// Submit one utterance under the given session and await the reply.
    async fn recognize(&self, session: &SessionId, text: &str) -> Result<BotReply, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_display_is_the_bare_message() {
        assert_eq!(GatewayError::Timeout.to_string(), "Network timeout");
    }

    #[test]
    fn other_display_carries_only_the_message() {
        let err = GatewayError::Other("service unavailable".to_string());
        assert_eq!(err.to_string(), "service unavailable");
    }
}
