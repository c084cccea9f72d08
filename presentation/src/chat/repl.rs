//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::output::console::ConsoleFormatter;
use haichat_application::{ChatSession, SessionError};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Interactive chat REPL over the session manager
pub struct ChatRepl {
    session: ChatSession,
    show_welcome: bool,
}

impl ChatRepl {
    pub fn new(session: ChatSession) -> Self {
        Self {
            session,
            show_welcome: true,
        }
    }

    /// Set whether to show the welcome line on a fresh session
    pub fn with_welcome(mut self, show: bool) -> Self {
        self.show_welcome = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("haichat").join("repl_history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        if self.show_welcome && self.session.messages().is_empty() {
            println!();
            println!("{}", ConsoleFormatter::welcome_line());
        }
        println!();
        println!("Type /help for commands.");
        println!();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    self.process_line(line).await;
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

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Handle slash commands. Returns true if the REPL should exit.
    fn handle_command(&mut self, cmd: &str) -> bool {
        let mut parts = cmd.split_whitespace();
        let command = parts.next().unwrap_or("");
        let arg = parts.next();

        match command {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /new            - Start a fresh conversation");
                println!("  /list           - List saved conversations");
                println!("  /select <n>     - Switch to conversation n");
                println!("  /delete <n>     - Delete conversation n");
                println!("  /help, /h, /?   - Show this help");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                println!("Words starting with '@' attach files by name.");
                println!();
                false
            }
            "/new" => {
                self.session.start_new_session();
                if self.show_welcome {
                    println!("{}", ConsoleFormatter::welcome_line());
                }
                false
            }
            "/list" => {
                println!();
                println!(
                    "{}",
                    ConsoleFormatter::format_thread_list(
                        &self.session.thread_summaries(),
                        self.session.active_thread_id(),
                    )
                );
                false
            }
            "/select" => {
                match self.thread_id_at(arg) {
                    Some(id) => match self.session.select_session(&id) {
                        Ok(()) => {
                            println!();
                            for message in self.session.messages() {
                                println!("{}", ConsoleFormatter::format_message(message));
                            }
                        }
                        Err(e) => println!("{}", e),
                    },
                    None => println!("Usage: /select <n>  (see /list)"),
                }
                false
            }
            "/delete" => {
                match self.thread_id_at(arg) {
                    Some(id) => {
                        self.session.delete_session(&id);
                        println!("Deleted.");
                    }
                    None => println!("Usage: /delete <n>  (see /list)"),
                }
                false
            }
            _ => {
                println!("Unknown command: {}", command);
                println!("Type /help for available commands");
                false
            }
        }
    }

    /// Resolve a 1-based `/list` index to a thread id.
    fn thread_id_at(&self, arg: Option<&str>) -> Option<String> {
        let n: usize = arg?.parse().ok()?;
        let summaries = self.session.thread_summaries();
        summaries.get(n.checked_sub(1)?).map(|s| s.id.clone())
    }

    async fn process_line(&mut self, line: &str) {
        let (text, attachments) = parse_input(line);

        println!("{}", ConsoleFormatter::typing_indicator());

        match self.session.send_message(&text, attachments).await {
            Ok(()) => {
                if let Some(reply) = self.session.messages().last() {
                    println!();
                    println!("{}", ConsoleFormatter::format_message(reply));
                }
            }
            Err(SessionError::EmptyInput) => {}
            Err(e) => println!("{}", e),
        }
    }
}

/// Split an input line into message text and `@name` attachment references.
fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut words = Vec::new();
    let mut attachments = Vec::new();
    for token in line.split_whitespace() {
        match token.strip_prefix('@') {
            Some(name) if !name.is_empty() => attachments.push(name.to_string()),
            _ => words.push(token),
        }
    }
    (words.join(" "), attachments)
}
