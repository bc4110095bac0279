//! Configuration file loading for lex-chat
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./lexchat.toml` or `./.lexchat.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/lex-chat/config.toml`
//! 4. Fallback: `~/.config/lex-chat/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileBotConfig, FileConfig, FileLogConfig};
pub use loader::ConfigLoader;
