use std::sync::Mutex;
use tracing::{debug, info};

use super::{Subscriber, SubscriberError};
use crate::message::Message;

/// A participant that keeps every message it receives.
///
/// The recorder's own messages come back through the room's fan-out like
/// everyone else's; those own echoes are stored and counted but not
/// surfaced as received traffic.
pub struct Recorder {
    name: String,
    received: Mutex<Vec<Message>>,
}

impl Recorder {
    /// Creates a recorder acting under the given participant name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Number of messages received so far, own echoes included.
    pub fn message_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    /// Snapshot of the received messages in arrival order.
    pub fn messages(&self) -> Vec<Message> {
        self.received.lock().unwrap().clone()
    }
}

impl Subscriber for Recorder {
    fn on_message(&self, message: &Message) -> Result<(), SubscriberError> {
        self.received.lock().unwrap().push(message.clone());

        if message.sender == self.name {
            debug!(recorder = %self.name, "Own echo stored");
        } else {
            info!(
                recorder = %self.name,
                sender = %message.sender,
                content = %message.content,
                "Message received"
            );
        }

        Ok(())
    }

    fn on_join(&self, id: &str) -> Result<(), SubscriberError> {
        info!(recorder = %self.name, participant = %id, "Saw participant join");
        Ok(())
    }

    fn on_leave(&self, id: &str) -> Result<(), SubscriberError> {
        info!(recorder = %self.name, participant = %id, "Saw participant leave");
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
