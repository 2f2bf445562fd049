use std::sync::Mutex;

use chrono::Utc;
use tracing::{debug, info};

use super::{Subscriber, SubscriberError};
use crate::message::Message;

/// A bot participant that answers keyword queries when mentioned.
///
/// A reply is only emitted when the message content contains the bot's
/// mention token (`@<name>`, matched as a case-insensitive substring).
/// Every keyword found in the content then produces its own reply, in
/// table order; multiple hits are not deduplicated.
pub struct Responder {
    name: String,
    keywords: Vec<(String, String)>,
    replies: Mutex<Vec<String>>,
}

impl Responder {
    /// Creates a responder with the default help/commands/time table.
    pub fn new(name: impl Into<String>) -> Self {
        let keywords = vec![
            (
                "help".to_string(),
                "I'm here to help! Type 'commands' to see available commands.".to_string(),
            ),
            (
                "commands".to_string(),
                "Available commands: help, time, users".to_string(),
            ),
            (
                "time".to_string(),
                format!("Current time: {}", Utc::now().to_rfc3339()),
            ),
        ];
        Self::with_keywords(name, keywords)
    }

    /// Creates a responder with a custom keyword table.
    ///
    /// Table order is the order replies are emitted in when a message hits
    /// several keywords at once.
    pub fn with_keywords(name: impl Into<String>, keywords: Vec<(String, String)>) -> Self {
        Self {
            name: name.into(),
            keywords,
            replies: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the replies emitted so far, in emission order.
    pub fn replies(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }

    fn is_mentioned(&self, content: &str) -> bool {
        let token = format!("@{}", self.name).to_lowercase();
        content.to_lowercase().contains(&token)
    }
}

impl Subscriber for Responder {
    fn on_message(&self, message: &Message) -> Result<(), SubscriberError> {
        if !self.is_mentioned(&message.content) {
            return Ok(());
        }

        debug!(
            responder = %self.name,
            sender = %message.sender,
            "Processing mention"
        );

        let content = message.content.to_lowercase();
        for (keyword, reply) in &self.keywords {
            if content.contains(&keyword.to_lowercase()) {
                info!(
                    responder = %self.name,
                    keyword = %keyword,
                    reply = %reply,
                    "Replying"
                );
                self.replies.lock().unwrap().push(reply.clone());
            }
        }

        Ok(())
    }

    fn on_join(&self, id: &str) -> Result<(), SubscriberError> {
        info!(responder = %self.name, participant = %id, "Greeting new participant");
        Ok(())
    }

    fn on_leave(&self, id: &str) -> Result<(), SubscriberError> {
        info!(responder = %self.name, participant = %id, "Saying goodbye");
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
