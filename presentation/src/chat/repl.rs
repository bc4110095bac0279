//! REPL (Read-Eval-Print Loop) for interactive chat

use lexchat_application::RunExchangeUseCase;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Interactive chat REPL
///
/// Each submission is spawned onto the runtime: a slow reply does not
/// block the next prompt, and overlapping replies print in arrival
/// order.
pub struct ChatRepl {
    use_case: RunExchangeUseCase,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: RunExchangeUseCase) -> Self {
        Self { use_case }
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("lex-chat").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    // Fire and forget: the reply prints when it arrives
                    let exchange = self.use_case.clone();
                    let text = line.to_string();
                    tokio::spawn(async move {
                        exchange.execute(&text).await;
                    });
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│             lex-chat - Chat Mode            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Session: {}", self.use_case.session());
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /session  - Show the session identifier");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /session         - Show the session identifier");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/session" => {
                println!();
                println!("Session: {}", self.use_case.session());
                println!();
                false
            }
            _ => {
                println!("Unknown command: {} (try /help)", cmd);
                false
            }
        }
    }
}
