use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An immutable chat event record.
///
/// `sender` must be a non-empty participant identifier; this is a caller
/// precondition and is not enforced at runtime. `content` may be empty.
/// Once a message has been appended to a room's history it is never
/// mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sender: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Creates a message stamped with the current time.
    pub fn new(sender: impl Into<String>, content: impl Into<String>) -> Self {
        let sender = sender.into();
        debug_assert!(!sender.is_empty(), "sender must be non-empty");

        Self {
            sender,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}
