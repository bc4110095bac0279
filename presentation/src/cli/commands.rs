//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for lex-chat
#[derive(Parser, Debug)]
#[command(name = "lex-chat")]
#[command(author, version, about = "Terminal chat client for Amazon Lex bots")]
#[command(long_about = r#"
lex-chat sends your message to an Amazon Lex bot and prints the replies.

One session identifier is generated per run; every exchange carries it,
so the bot keeps its own conversation state across messages in chat mode.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./lexchat.toml      Project-level config
3. ~/.config/lex-chat/config.toml   Global config

Example:
  lex-chat "Book a room for tomorrow"
  lex-chat --chat
  lex-chat --chat --transcript-log ./transcript.jsonl
"#)]
pub struct Cli {
    /// The message to send (not required in chat mode)
    pub message: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write a JSONL exchange transcript to this path
    #[arg(long, value_name = "PATH")]
    pub transcript_log: Option<PathBuf>,
}
