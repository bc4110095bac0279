//! Transcript presenter port
//!
//! The rendering collaborator behind a narrow append-only interface, so
//! the dispatcher can be unit tested without a rendering surface.

use lexchat_domain::Sender;

/// Append-only sink for transcript entries.
///
/// `append` is intentionally synchronous and infallible: rendering never
/// disrupts an exchange. Implementations must be safe to call from
/// concurrently running exchanges.
pub trait TranscriptPresenter: Send + Sync {
    /// Append one entry to the visible transcript.
    fn append(&self, sender: Sender, text: &str);
}

/// No-op implementation for tests and quiet assembly.
pub struct NoTranscriptPresenter;

impl TranscriptPresenter for NoTranscriptPresenter {
    fn append(&self, _sender: Sender, _text: &str) {}
}
