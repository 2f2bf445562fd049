mod logger;
mod recorder;
mod responder;

pub use logger::Logger;
pub use recorder::Recorder;
pub use responder::Responder;

use thiserror::Error;

use crate::message::Message;

/// Errors that can occur in a subscriber reaction
#[derive(Debug, Error)]
pub enum SubscriberError {
    #[error("reaction failed: {0}")]
    Reaction(String),
}

impl SubscriberError {
    /// Create a reaction error
    pub fn reaction(msg: impl Into<String>) -> Self {
        SubscriberError::Reaction(msg.into())
    }
}

/// Contract every room participant implements.
///
/// Reactions are synchronous callbacks invoked on the caller's thread while
/// the room's lock is held: they must not block and must not call back into
/// the same room. A returned error is logged by the room and does not stop
/// delivery to the remaining participants.
///
/// Examples:
/// - Recorder: keeps every message it receives
/// - Responder: answers keyword queries when mentioned
/// - Logger: writes one formatted line per event
pub trait Subscriber: Send + Sync {
    /// React to a message broadcast, own messages included.
    fn on_message(&self, message: &Message) -> Result<(), SubscriberError>;

    /// React to another participant joining the room.
    fn on_join(&self, id: &str) -> Result<(), SubscriberError>;

    /// React to another participant leaving the room.
    fn on_leave(&self, id: &str) -> Result<(), SubscriberError>;

    /// Get a human-readable name for this subscriber (for logging/debugging)
    fn name(&self) -> &str;
}

/// A no-op subscriber for testing
///
/// This subscriber does nothing but can be used in tests where you need
/// a participant but don't care about the actual behavior.
pub struct NoOpSubscriber;

impl Subscriber for NoOpSubscriber {
    fn on_message(&self, _message: &Message) -> Result<(), SubscriberError> {
        Ok(())
    }

    fn on_join(&self, _id: &str) -> Result<(), SubscriberError> {
        Ok(())
    }

    fn on_leave(&self, _id: &str) -> Result<(), SubscriberError> {
        Ok(())
    }

    fn name(&self) -> &str {
        "NoOpSubscriber"
    }
}
