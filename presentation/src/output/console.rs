//! Console formatter for messages and thread lists

use colored::Colorize;
use haichat_domain::{Message, Role, ThreadSummary};

/// Formats session state for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a single message with its role label and local timestamp.
    pub fn format_message(message: &Message) -> String {
        let label = match message.role {
            Role::User => "you".cyan().bold(),
            Role::Assistant => "assistant".green().bold(),
        };
        let time = message
            .created_at
            .with_timezone(&chrono::Local)
            .format("%H:%M");
        format!(
            "{} {}\n{}\n",
            label,
            time.to_string().dimmed(),
            message.content
        )
    }

    /// Format the newest-first thread list, numbering entries for
    /// `/select <n>` and `/delete <n>`.
    pub fn format_thread_list(summaries: &[ThreadSummary], active_id: Option<&str>) -> String {
        if summaries.is_empty() {
            return "No saved conversations.".dimmed().to_string();
        }

        let mut output = String::new();
        for (i, summary) in summaries.iter().enumerate() {
            let marker = if active_id == Some(summary.id.as_str()) {
                "*".yellow().bold().to_string()
            } else {
                " ".to_string()
            };
            let date = summary
                .updated_at
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M");
            output.push_str(&format!(
                "{} {:>2}. {} {}\n",
                marker,
                i + 1,
                summary.title,
                date.to_string().dimmed()
            ));
        }
        output
    }

    pub fn welcome_line() -> String {
        "What can I help with?".bold().to_string()
    }

    pub fn typing_indicator() -> String {
        "assistant is typing...".dimmed().italic().to_string()
    }
}
