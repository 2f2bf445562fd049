use std::sync::Mutex;

use chrono::Utc;

use super::{Subscriber, SubscriberError};
use crate::message::Message;

/// An append-only event log.
///
/// One formatted line is stored per event (message, join, leave).
/// Entries come back in insertion order and are never mutated or dropped,
/// so the log stays readable after the logger has left the room.
pub struct Logger {
    entries: Mutex<Vec<String>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Creates an empty logger.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the log lines in insertion order.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    fn append(&self, line: String) {
        self.entries.lock().unwrap().push(line);
    }
}

impl Subscriber for Logger {
    fn on_message(&self, message: &Message) -> Result<(), SubscriberError> {
        self.append(format!(
            "[{}] {}: {}",
            message.timestamp.to_rfc3339(),
            message.sender,
            message.content
        ));
        Ok(())
    }

    fn on_join(&self, id: &str) -> Result<(), SubscriberError> {
        self.append(format!("[{}] {} joined", Utc::now().to_rfc3339(), id));
        Ok(())
    }

    fn on_leave(&self, id: &str) -> Result<(), SubscriberError> {
        self.append(format!("[{}] {} left", Utc::now().to_rfc3339(), id));
        Ok(())
    }

    fn name(&self) -> &str {
        "Logger"
    }
}
