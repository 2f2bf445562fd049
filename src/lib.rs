//! In-memory publish/subscribe broadcast engine for chat rooms.
//!
//! A [`Room`] keeps an insertion-ordered registry of [`Subscriber`]s and an
//! append-only message history. Join, leave, and send operations fan events
//! out synchronously to every registered participant in registration order,
//! and late joiners get a bounded replay of the most recent messages.
//! Three subscriber variants ship with the crate: [`Recorder`],
//! [`Responder`], and [`Logger`].

pub mod event;
pub mod message;
pub mod room;
pub mod subscriber;

// Re-export commonly used types for easier access in tests
pub use event::RoomEvent;
pub use message::Message;
pub use room::{Room, RoomError, REPLAY_LIMIT};
pub use subscriber::{Logger, NoOpSubscriber, Recorder, Responder, Subscriber, SubscriberError};
