//! Amazon Lex gateway adapter
//!
//! Implements the `BotGateway` port over the Lex Runtime V2
//! `RecognizeText` operation. Handles AWS credential initialization; all
//! conversation state lives on the service side, keyed by the session
//! identifier.

use super::types;
use async_trait::async_trait;
use aws_sdk_lexruntimev2::Client as LexClient;
use lexchat_application::ports::bot_gateway::{BotGateway, GatewayError};
use lexchat_domain::{BotReply, LexBotConfig, SessionId};
use tracing::{debug, info};

pub struct LexBotGateway {
    client: LexClient,
    bot_id: String,
    bot_alias_id: String,
    locale_id: String,
}

impl LexBotGateway {
    /// Create a new Lex gateway.
    ///
    /// Initializes AWS credentials (region plus optional named profile)
    /// and creates a Lex Runtime client.
    pub async fn new(config: &LexBotConfig) -> Result<Self, GatewayError> {
        if !config.is_complete() {
            return Err(GatewayError::Other(
                "bot_id and bot_alias_id must be configured".to_string(),
            ));
        }

        let mut aws_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(ref profile) = config.profile {
            aws_config_loader = aws_config_loader.profile_name(profile);
        }

        let aws_config = aws_config_loader.load().await;
        let client = LexClient::new(&aws_config);

        info!(region = %config.region, bot = %config.bot_id, "Lex gateway initialized");

        Ok(Self {
            client,
            bot_id: config.bot_id.clone(),
            bot_alias_id: config.bot_alias_id.clone(),
            locale_id: config.locale_id.clone(),
        })
    }
}

#[async_trait]
impl BotGateway for LexBotGateway {
    async fn recognize(&self, session: &SessionId, text: &str) -> Result<BotReply, GatewayError> {
        debug!(
            bot = %self.bot_id,
            session = %session,
            "Calling Lex RecognizeText"
        );

        let response = self
            .client
            .recognize_text()
            .bot_id(&self.bot_id)
            .bot_alias_id(&self.bot_alias_id)
            .locale_id(&self.locale_id)
            .session_id(session.as_str())
            .text(text)
            .send()
            .await
            .map_err(|e| types::convert_recognize_text_error(&e))?;

        Ok(types::convert_messages(response.messages()))
    }
}
