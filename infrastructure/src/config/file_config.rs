//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and convert into the serde-free
//! [`LexBotConfig`] the gateway is constructed with.

use lexchat_domain::LexBotConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bot connection settings (`[bot]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBotConfig {
    /// AWS region the bot lives in (default: "us-east-1")
    pub region: String,
    /// AWS profile name for credentials (default: ambient credential chain)
    pub profile: Option<String>,
    /// Lex bot identifier
    pub bot_id: String,
    /// Lex bot alias identifier
    pub bot_alias_id: String,
    /// Locale sent with every request (default: "en_US")
    pub locale_id: String,
}

impl Default for FileBotConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            profile: None,
            bot_id: String::new(),
            bot_alias_id: String::new(),
            locale_id: "en_US".to_string(),
        }
    }
}

/// Exchange log settings (`[log]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Where to write the JSONL exchange transcript. Unset disables it.
    pub transcript_path: Option<PathBuf>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Bot connection settings
    pub bot: FileBotConfig,
    /// Exchange log settings
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Convert the `[bot]` section into the gateway's config struct.
    pub fn to_bot_config(&self) -> LexBotConfig {
        LexBotConfig {
            region: self.bot.region.clone(),
            profile: self.bot.profile.clone(),
            bot_id: self.bot.bot_id.clone(),
            bot_alias_id: self.bot.bot_alias_id.clone(),
            locale_id: self.bot.locale_id.clone(),
        }
    }
}
