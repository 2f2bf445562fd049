use std::sync::{Arc, Mutex};

use chatroom::{Message, Subscriber, SubscriberError};

/// Every callback a room can make, in a comparable form.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeCall {
    Message { sender: String, content: String },
    Join(String),
    Leave(String),
}

/// Test subscriber that records every callback in arrival order.
///
/// A failing probe still records the call before reporting the error, so
/// tests can assert both that delivery was attempted and that the room
/// carried on.
pub struct ProbeSubscriber {
    name: String,
    calls: Mutex<Vec<ProbeCall>>,
    fail_reactions: bool,
}

impl ProbeSubscriber {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            calls: Mutex::new(Vec::new()),
            fail_reactions: false,
        }
    }

    /// A probe whose reactions always fail, for isolation tests.
    pub fn failing(name: &str) -> Self {
        Self {
            fail_reactions: true,
            ..Self::new(name)
        }
    }

    pub fn calls(&self) -> Vec<ProbeCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Contents of the messages received, in arrival order.
    pub fn message_contents(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ProbeCall::Message { content, .. } => Some(content),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ProbeCall) -> Result<(), SubscriberError> {
        self.calls.lock().unwrap().push(call);
        if self.fail_reactions {
            return Err(SubscriberError::reaction("probe configured to fail"));
        }
        Ok(())
    }
}

impl Subscriber for ProbeSubscriber {
    fn on_message(&self, message: &Message) -> Result<(), SubscriberError> {
        self.record(ProbeCall::Message {
            sender: message.sender.clone(),
            content: message.content.clone(),
        })
    }

    fn on_join(&self, id: &str) -> Result<(), SubscriberError> {
        self.record(ProbeCall::Join(id.to_string()))
    }

    fn on_leave(&self, id: &str) -> Result<(), SubscriberError> {
        self.record(ProbeCall::Leave(id.to_string()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Test subscriber that appends its name to a shared sequence on every
/// message, used to assert fan-out follows registration order.
pub struct OrderProbe {
    name: String,
    sequence: Arc<Mutex<Vec<String>>>,
}

impl OrderProbe {
    pub fn new(name: &str, sequence: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            name: name.to_string(),
            sequence,
        }
    }
}

impl Subscriber for OrderProbe {
    fn on_message(&self, _message: &Message) -> Result<(), SubscriberError> {
        self.sequence.lock().unwrap().push(self.name.clone());
        Ok(())
    }

    fn on_join(&self, _id: &str) -> Result<(), SubscriberError> {
        Ok(())
    }

    fn on_leave(&self, _id: &str) -> Result<(), SubscriberError> {
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
