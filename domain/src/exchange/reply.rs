//! Bot reply types
//!
//! A reply is an ordered list of segments. The service may answer one
//! utterance with several messages (a greeting plus a prompt, say); each
//! is rendered as its own transcript entry, in delivered order.

use serde::{Deserialize, Serialize};

/// One discrete piece of bot output within a single reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplySegment {
    content: String,
}

impl ReplySegment {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// An ordered reply from the bot service.
///
/// A reply with zero segments is valid: the bot chose to say nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotReply {
    segments: Vec<ReplySegment>,
}

impl BotReply {
    pub fn new(segments: Vec<ReplySegment>) -> Self {
        Self { segments }
    }

    /// A reply carrying no segments.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[ReplySegment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
