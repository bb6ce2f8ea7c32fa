//! Console chat adapter
//!
//! Reads `user: text` lines from stdin and prints the replies, one per line,
//! prefixed with the addressed user. Handy for trying the bot without a
//! chat platform.

use async_trait::async_trait;
use baton_core::application::ChatService;
use baton_core::port::NotificationSink;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Writes replies to stdout
pub struct StdoutSink {
    out: Mutex<tokio::io::Stdout>,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            out: Mutex::new(tokio::io::stdout()),
        }
    }
}

#[async_trait]
impl NotificationSink for StdoutSink {
    async fn deliver(&self, user: &str, messages: &[String]) -> baton_core::Result<()> {
        let mut out = self.out.lock().await;
        for message in messages {
            out.write_all(format!("@{}: {}\n", user, message).as_bytes())
                .await?;
        }
        out.flush().await?;
        Ok(())
    }
}

/// Split `user: text`. Lines without a non-empty user are rejected.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (user, text) = line.split_once(':')?;
    let user = user.trim();
    if user.is_empty() {
        return None;
    }
    Some((user, text.trim()))
}

/// Run until stdin closes
pub async fn run(chat: Arc<ChatService>) {
    let sink = StdoutSink::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    info!("Console adapter reading `user: text` lines from stdin");

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!(error = ?e, "Failed to read from stdin");
                break;
            }
        };

        let Some((user, text)) = parse_line(&line) else {
            if !line.trim().is_empty() {
                warn!(line = %line, "Ignoring line without `user:` prefix");
            }
            continue;
        };

        if let Err(e) = chat.handle_and_deliver(user, text, &sink).await {
            warn!(error = ?e, user = %user, "Failed to deliver replies");
        }
    }

    info!("Console adapter stopped (stdin closed)");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("ana: pido printer"), Some(("ana", "pido printer")));
        assert_eq!(parse_line("  bea :libero db "), Some(("bea", "libero db")));
    }

    #[test]
    fn test_parse_line_keeps_later_colons() {
        assert_eq!(parse_line("ana: pido host:8080"), Some(("ana", "pido host:8080")));
    }

    #[test]
    fn test_parse_line_rejects_missing_user() {
        assert_eq!(parse_line("pido printer"), None);
        assert_eq!(parse_line(": pido printer"), None);
    }
}
