//! Run Exchange use case.
//!
//! Executes one exchange: validate the input, present the user's line,
//! submit the utterance to the bot gateway under the process session, and
//! present the reply segments (or a single error line) as they come back.
//!
//! Each invocation is independent: no queuing, no cancellation of
//! in-flight calls, no deduplication. The use case is `Clone` over its
//! `Arc`'d collaborators, so callers that want fire-and-forget behavior
//! can `tokio::spawn` a clone per submission and let replies land in
//! arrival order.

use crate::ports::bot_gateway::BotGateway;
use crate::ports::exchange_logger::{ExchangeEvent, ExchangeLogger, NoExchangeLogger};
use crate::ports::presenter::TranscriptPresenter;
use lexchat_domain::{Sender, SessionId, Utterance};
use std::sync::Arc;
use tracing::{debug, error, info};

/// How a single exchange ended.
///
/// A failed service call is still a completed exchange from the caller's
/// point of view (the error line has already been presented), so
/// `execute` reports an outcome rather than returning `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeOutcome {
    /// Blank input; nothing was sent and nothing was rendered.
    Skipped,
    /// The service replied; `segments` entries were presented.
    Completed { segments: usize },
    /// The service call failed; one error line was presented.
    Failed,
}

/// Use case for running one exchange with the bot.
///
/// Holds the process-lifetime [`SessionId`] as a read-only value; every
/// request carries it unchanged.
pub struct RunExchangeUseCase {
    session: SessionId,
    gateway: Arc<dyn BotGateway>,
    presenter: Arc<dyn TranscriptPresenter>,
    exchange_logger: Arc<dyn ExchangeLogger>,
}

impl Clone for RunExchangeUseCase {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
            gateway: self.gateway.clone(),
            presenter: self.presenter.clone(),
            exchange_logger: self.exchange_logger.clone(),
        }
    }
}

impl RunExchangeUseCase {
    pub fn new(
        session: SessionId,
        gateway: Arc<dyn BotGateway>,
        presenter: Arc<dyn TranscriptPresenter>,
    ) -> Self {
        Self {
            session,
            gateway,
            presenter,
            exchange_logger: Arc::new(NoExchangeLogger),
        }
    }

    /// Create with an exchange logger.
    pub fn with_exchange_logger(mut self, logger: Arc<dyn ExchangeLogger>) -> Self {
        self.exchange_logger = logger;
        self
    }

    /// The session identifier every request carries.
    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// Execute one exchange.
    ///
    /// Exactly one service call is made for non-blank input; blank input
    /// is a silent no-op.
    pub async fn execute(&self, raw_input: &str) -> ExchangeOutcome {
        let Some(utterance) = Utterance::try_new(raw_input) else {
            debug!("Blank input, skipping exchange");
            return ExchangeOutcome::Skipped;
        };

        let preview: String = utterance.text().chars().take(100).collect();
        info!(session = %self.session, "Dispatching exchange: {}", preview);

        self.presenter.append(Sender::User, utterance.text());
        self.exchange_logger.log(ExchangeEvent::new(
            "user_message",
            serde_json::json!({
                "session": self.session.as_str(),
                "text": utterance.text(),
            }),
        ));

        match self.gateway.recognize(&self.session, utterance.text()).await {
            Ok(reply) => {
                for segment in reply.segments() {
                    self.presenter.append(Sender::Bot, segment.content());
                }

                self.exchange_logger.log(ExchangeEvent::new(
                    "bot_reply",
                    serde_json::json!({
                        "session": self.session.as_str(),
                        "segments": reply.segment_count(),
                        "contents": reply
                            .segments()
                            .iter()
                            .map(|s| s.content())
                            .collect::<Vec<_>>(),
                    }),
                ));

                ExchangeOutcome::Completed {
                    segments: reply.segment_count(),
                }
            }
            Err(e) => {
                error!(session = %self.session, "Exchange failed: {}", e);

                self.presenter
                    .append(Sender::Bot, &format!("Error: {}", e));
                self.exchange_logger.log(ExchangeEvent::new(
                    "exchange_failed",
                    serde_json::json!({
                        "session": self.session.as_str(),
                        "error": e.to_string(),
                    }),
                ));

                ExchangeOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::bot_gateway::GatewayError;
    use async_trait::async_trait;
    use lexchat_domain::{BotReply, ReplySegment};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockGateway {
        requests: Mutex<Vec<(String, String)>>,
        responses: Mutex<VecDeque<Result<BotReply, GatewayError>>>,
    }

    impl MockGateway {
        fn new(responses: Vec<Result<BotReply, GatewayError>>) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                responses: Mutex::new(VecDeque::from(responses)),
            }
        }

        fn requests(&self) -> Vec<(String, String)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl BotGateway for MockGateway {
        async fn recognize(
            &self,
            session: &SessionId,
            text: &str,
        ) -> Result<BotReply, GatewayError> {
            self.requests
                .lock()
                .unwrap()
                .push((session.as_str().to_string(), text.to_string()));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
        }
    }

    struct RecordingPresenter {
        entries: Mutex<Vec<(Sender, String)>>,
    }

    impl RecordingPresenter {
        fn new() -> Self {
            Self {
                entries: Mutex::new(Vec::new()),
            }
        }

        fn entries(&self) -> Vec<(Sender, String)> {
            self.entries.lock().unwrap().clone()
        }
    }

    impl TranscriptPresenter for RecordingPresenter {
        fn append(&self, sender: Sender, text: &str) {
            self.entries
                .lock()
                .unwrap()
                .push((sender, text.to_string()));
        }
    }

    fn reply(contents: &[&str]) -> BotReply {
        BotReply::new(contents.iter().map(|c| ReplySegment::new(*c)).collect())
    }

    fn use_case(
        responses: Vec<Result<BotReply, GatewayError>>,
    ) -> (RunExchangeUseCase, Arc<MockGateway>, Arc<RecordingPresenter>) {
        let gateway = Arc::new(MockGateway::new(responses));
        let presenter = Arc::new(RecordingPresenter::new());
        let uc = RunExchangeUseCase::new(
            SessionId::new("S"),
            gateway.clone(),
            presenter.clone(),
        );
        (uc, gateway, presenter)
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn hello_round_trip() {
        let (uc, gateway, presenter) = use_case(vec![Ok(reply(&["Hi there!"]))]);

        let outcome = uc.execute("Hello").await;

        assert_eq!(outcome, ExchangeOutcome::Completed { segments: 1 });
        assert_eq!(gateway.requests(), vec![("S".to_string(), "Hello".to_string())]);
        assert_eq!(
            presenter.entries(),
            vec![
                (Sender::User, "Hello".to_string()),
                (Sender::Bot, "Hi there!".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn blank_input_is_a_silent_no_op() {
        let (uc, gateway, presenter) = use_case(vec![Ok(reply(&["unused"]))]);

        let outcome = uc.execute("   ").await;

        assert_eq!(outcome, ExchangeOutcome::Skipped);
        assert!(gateway.requests().is_empty());
        assert!(presenter.entries().is_empty());
    }

    #[tokio::test]
    async fn input_is_trimmed_before_dispatch() {
        let (uc, gateway, presenter) = use_case(vec![Ok(reply(&["ok"]))]);

        uc.execute("  Hello  ").await;

        assert_eq!(gateway.requests(), vec![("S".to_string(), "Hello".to_string())]);
        assert_eq!(presenter.entries()[0], (Sender::User, "Hello".to_string()));
    }

    #[tokio::test]
    async fn segments_render_in_delivered_order() {
        let (uc, _gateway, presenter) =
            use_case(vec![Ok(reply(&["first", "second", "third"]))]);

        let outcome = uc.execute("tell me things").await;

        assert_eq!(outcome, ExchangeOutcome::Completed { segments: 3 });
        let entries = presenter.entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[1], (Sender::Bot, "first".to_string()));
        assert_eq!(entries[2], (Sender::Bot, "second".to_string()));
        assert_eq!(entries[3], (Sender::Bot, "third".to_string()));
    }

    #[tokio::test]
    async fn empty_reply_renders_nothing() {
        let (uc, _gateway, presenter) = use_case(vec![Ok(BotReply::empty())]);

        let outcome = uc.execute("anyone home?").await;

        assert_eq!(outcome, ExchangeOutcome::Completed { segments: 0 });
        // Only the user's own line; an empty reply is not an error
        assert_eq!(
            presenter.entries(),
            vec![(Sender::User, "anyone home?".to_string())]
        );
    }

    #[tokio::test]
    async fn failure_renders_single_error_line() {
        let (uc, _gateway, presenter) = use_case(vec![Err(GatewayError::Timeout)]);

        let outcome = uc.execute("status").await;

        assert_eq!(outcome, ExchangeOutcome::Failed);
        let entries = presenter.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries.last().unwrap(),
            &(Sender::Bot, "Error: Network timeout".to_string())
        );
    }

    #[tokio::test]
    async fn session_id_is_unchanged_across_exchanges() {
        let (uc, gateway, _presenter) =
            use_case(vec![Ok(reply(&["one"])), Ok(reply(&["two"]))]);

        uc.execute("first").await;
        uc.execute("second").await;

        let requests = gateway.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].0, "S");
        assert_eq!(requests[1].0, "S");
        assert_eq!(uc.session().as_str(), "S");
    }

    #[tokio::test]
    async fn concurrent_exchanges_both_complete() {
        let (uc, gateway, presenter) =
            use_case(vec![Ok(reply(&["a"])), Ok(reply(&["b"]))]);
        let other = uc.clone();

        let (first, second) = tokio::join!(uc.execute("one"), other.execute("two"));

        assert_eq!(first, ExchangeOutcome::Completed { segments: 1 });
        assert_eq!(second, ExchangeOutcome::Completed { segments: 1 });
        assert_eq!(gateway.requests().len(), 2);
        // Four entries in some interleaving; both user lines present
        let entries = presenter.entries();
        assert_eq!(entries.len(), 4);
        assert!(entries.contains(&(Sender::User, "one".to_string())));
        assert!(entries.contains(&(Sender::User, "two".to_string())));
    }

    #[tokio::test]
    async fn exchange_events_are_logged() {
        struct RecordingLogger {
            events: Mutex<Vec<(&'static str, serde_json::Value)>>,
        }

        impl ExchangeLogger for RecordingLogger {
            fn log(&self, event: ExchangeEvent) {
                self.events
                    .lock()
                    .unwrap()
                    .push((event.event_type, event.payload));
            }
        }

        let logger = Arc::new(RecordingLogger {
            events: Mutex::new(Vec::new()),
        });
        let gateway = Arc::new(MockGateway::new(vec![Ok(reply(&["Hi there!"]))]));
        let presenter = Arc::new(RecordingPresenter::new());
        let uc = RunExchangeUseCase::new(SessionId::new("S"), gateway, presenter)
            .with_exchange_logger(logger.clone());

        uc.execute("Hello").await;

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, "user_message");
        assert_eq!(events[0].1["text"], "Hello");
        assert_eq!(events[1].0, "bot_reply");
        assert_eq!(events[1].1["segments"], 1);
        assert_eq!(events[1].1["contents"][0], "Hi there!");
    }
}
