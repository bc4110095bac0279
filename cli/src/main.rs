//! CLI entrypoint for lex-chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use lexchat_application::{ExchangeOutcome, RunExchangeUseCase};
use lexchat_domain::SessionId;
use lexchat_infrastructure::{ConfigLoader, JsonlExchangeLogger, LexBotGateway};
use lexchat_presentation::{ChatRepl, Cli, ConsoleTranscript};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Diagnostics go to stderr; the transcript owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    let bot_config = config.to_bot_config();
    if !bot_config.is_complete() {
        bail!("bot_id and bot_alias_id must be configured (see --show-config)");
    }

    // === Dependency Injection ===
    // One session per run; every exchange carries it unchanged.
    let session = SessionId::generate();
    info!(session = %session, "Starting lex-chat");

    let gateway = Arc::new(LexBotGateway::new(&bot_config).await?);
    let presenter = Arc::new(ConsoleTranscript::new());

    let mut use_case = RunExchangeUseCase::new(session, gateway, presenter);

    // Optional JSONL exchange transcript
    let transcript_path = cli.transcript_log.or(config.log.transcript_path);
    if let Some(path) = transcript_path
        && let Some(logger) = JsonlExchangeLogger::new(&path)
    {
        info!("Writing exchange transcript to {}", logger.path().display());
        use_case = use_case.with_exchange_logger(Arc::new(logger));
    }

    // Chat mode
    if cli.chat {
        let repl = ChatRepl::new(use_case);
        repl.run().await?;
        return Ok(());
    }

    // Single message mode - message is required
    let message = match cli.message {
        Some(m) => m,
        None => bail!("Message is required. Use --chat for interactive mode."),
    };

    // The outcome is already on screen; the exit code just mirrors it
    if use_case.execute(&message).await == ExchangeOutcome::Failed {
        std::process::exit(1);
    }

    Ok(())
}
