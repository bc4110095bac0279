//! Type conversions between the Lex Runtime SDK and domain types
//!
//! Converts `RecognizeText` message lists to `BotReply`, and SDK errors
//! to `GatewayError`.

use aws_sdk_lexruntimev2::operation::recognize_text::RecognizeTextError;
use aws_sdk_lexruntimev2::types as lex;
use lexchat_application::ports::bot_gateway::GatewayError;
use lexchat_domain::{BotReply, ReplySegment};

/// Convert the response's message list to a reply.
///
/// Messages without display content (image response cards without text,
/// say) are skipped; order is preserved.
pub fn convert_messages(messages: &[lex::Message]) -> BotReply {
    let segments = messages
        .iter()
        .filter_map(|m| m.content().map(ReplySegment::new))
        .collect();
    BotReply::new(segments)
}

/// Convert a Lex SDK error to a GatewayError.
pub fn convert_recognize_text_error(
    err: &aws_sdk_lexruntimev2::error::SdkError<RecognizeTextError>,
) -> GatewayError {
    match err {
        aws_sdk_lexruntimev2::error::SdkError::ServiceError(service_err) => {
            match service_err.err() {
                RecognizeTextError::ThrottlingException(e) => {
                    GatewayError::Throttled(format!("Lex throttled: {}", e))
                }
                RecognizeTextError::ResourceNotFoundException(e) => {
                    GatewayError::BotNotFound(format!("{}", e))
                }
                RecognizeTextError::AccessDeniedException(e) => {
                    GatewayError::AccessDenied(format!("{}", e))
                }
                RecognizeTextError::ValidationException(e) => {
                    GatewayError::RequestFailed(format!("Lex validation error: {}", e))
                }
                RecognizeTextError::DependencyFailedException(e) => {
                    GatewayError::RequestFailed(format!("Lex dependency failed: {}", e))
                }
                other => GatewayError::RequestFailed(format!("Lex error: {:?}", other)),
            }
        }
        aws_sdk_lexruntimev2::error::SdkError::TimeoutError(_) => GatewayError::Timeout,
        other => GatewayError::Connection(format!("Lex SDK error: {}", other)),
    }
}
