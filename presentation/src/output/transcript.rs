//! Console transcript presenter
//!
//! Implements the `TranscriptPresenter` port: each entry is printed as a
//! `You:` / `Bot:` prefixed line. The terminal scrollback is the
//! auto-scrolling log.

use colored::Colorize;
use lexchat_application::TranscriptPresenter;
use lexchat_domain::Sender;

/// Prints transcript entries to the terminal.
#[derive(Default)]
pub struct ConsoleTranscript;

impl ConsoleTranscript {
    pub fn new() -> Self {
        Self
    }
}

impl TranscriptPresenter for ConsoleTranscript {
    fn append(&self, sender: Sender, text: &str) {
        let label = format!("{}:", sender.label());
        match sender {
            Sender::User => println!("{} {}", label.cyan().bold(), text),
            Sender::Bot => println!("{} {}", label.green().bold(), text),
        }
    }
}
