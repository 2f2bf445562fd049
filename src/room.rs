use std::sync::{Arc, Mutex};

use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::event::RoomEvent;
use crate::message::Message;
use crate::subscriber::Subscriber;

/// Number of history entries replayed to a late joiner.
pub const REPLAY_LIMIT: usize = 10;

/// Errors that can occur when operating on a room
#[derive(Debug, Error)]
pub enum RoomError {
    /// The acting participant is not registered in the room.
    #[error("{0} is not in the room")]
    NotRegistered(String),
}

struct RoomState {
    /// Registered participants in join order; notification order follows
    /// this iteration order.
    participants: IndexMap<String, Arc<dyn Subscriber>>,
    /// Every message ever sent, append-only. Only the replay view handed
    /// to late joiners is bounded.
    history: Vec<Message>,
}

/// A named chat room: an insertion-ordered registry of subscribers plus an
/// append-only message history.
///
/// All three mutating operations are serialized behind one lock and every
/// fan-out completes before the triggering call returns, so each event is
/// observed by exactly the set of participants registered when the room
/// decided to deliver it. Subscriber reactions run under that lock: they
/// must not block and must not call back into the same room.
pub struct Room {
    name: String,
    state: Mutex<RoomState>,
}

impl Room {
    /// Creates an empty room with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Mutex::new(RoomState {
                participants: IndexMap::new(),
                history: Vec::new(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers `subscriber` under `id`, announces the arrival to every
    /// other participant in registration order, then replays the most
    /// recent history to the newcomer (oldest first, at most
    /// [`REPLAY_LIMIT`] entries). The joiner receives no `on_join` for
    /// itself and no replay of past membership changes.
    ///
    /// Joining with an id that is already registered silently replaces the
    /// prior binding: the old subscriber gets no `on_leave`, the slot
    /// keeps its position in notification order, and the announcement and
    /// replay still run. `id` must be non-empty.
    pub fn join(&self, id: &str, subscriber: Arc<dyn Subscriber>) {
        debug_assert!(!id.is_empty(), "participant id must be non-empty");

        let mut state = self.state.lock().unwrap();

        let replaced = state
            .participants
            .insert(id.to_string(), Arc::clone(&subscriber))
            .is_some();

        info!(
            room = %self.name,
            participant = %id,
            subscriber = subscriber.name(),
            replaced,
            participant_count = state.participants.len(),
            "Participant joined"
        );

        let event = RoomEvent::ParticipantJoined { id: id.to_string() };
        for (other_id, other) in &state.participants {
            if other_id != id {
                self.deliver(other, &event);
            }
        }

        // Replay, oldest first.
        let start = state.history.len().saturating_sub(REPLAY_LIMIT);
        for message in &state.history[start..] {
            self.deliver(
                &subscriber,
                &RoomEvent::MessageSent {
                    message: message.clone(),
                },
            );
        }
    }

    /// Removes `id` and announces the departure to everyone still
    /// registered, in registration order.
    ///
    /// Leaving a room one never joined is reported as
    /// [`RoomError::NotRegistered`], consistent with [`Room::send_message`];
    /// no notifications fire in that case.
    pub fn leave(&self, id: &str) -> Result<(), RoomError> {
        debug_assert!(!id.is_empty(), "participant id must be non-empty");

        let mut state = self.state.lock().unwrap();

        // shift_remove keeps the remaining notification order intact.
        if state.participants.shift_remove(id).is_none() {
            debug!(room = %self.name, participant = %id, "Leave from unregistered participant");
            return Err(RoomError::NotRegistered(id.to_string()));
        }

        info!(
            room = %self.name,
            participant = %id,
            participant_count = state.participants.len(),
            "Participant left"
        );

        let event = RoomEvent::ParticipantLeft { id: id.to_string() };
        for subscriber in state.participants.values() {
            self.deliver(subscriber, &event);
        }

        Ok(())
    }

    /// Appends a message to history and fans it out to every registered
    /// participant, sender included, in registration order. Returns the
    /// appended message.
    ///
    /// Fails with [`RoomError::NotRegistered`] when `sender_id` has not
    /// joined; neither history nor any subscriber is touched in that case.
    pub fn send_message(&self, sender_id: &str, content: &str) -> Result<Message, RoomError> {
        let mut state = self.state.lock().unwrap();

        if !state.participants.contains_key(sender_id) {
            debug!(
                room = %self.name,
                sender = %sender_id,
                "Message from unregistered sender rejected"
            );
            return Err(RoomError::NotRegistered(sender_id.to_string()));
        }

        let message = Message::new(sender_id, content);
        state.history.push(message.clone());

        info!(
            room = %self.name,
            sender = %sender_id,
            history_len = state.history.len(),
            receivers = state.participants.len(),
            "Message broadcast"
        );

        let event = RoomEvent::MessageSent {
            message: message.clone(),
        };
        for subscriber in state.participants.values() {
            self.deliver(subscriber, &event);
        }

        Ok(message)
    }

    /// Current number of registered participants.
    pub fn participant_count(&self) -> usize {
        self.state.lock().unwrap().participants.len()
    }

    /// Whether `id` is currently registered.
    pub fn is_registered(&self, id: &str) -> bool {
        self.state.lock().unwrap().participants.contains_key(id)
    }

    /// Total number of messages ever sent in this room.
    pub fn history_len(&self) -> usize {
        self.state.lock().unwrap().history.len()
    }

    /// Invokes the reaction matching `event` on one subscriber. A failing
    /// reaction is logged and the fan-out continues with the rest.
    fn deliver(&self, subscriber: &Arc<dyn Subscriber>, event: &RoomEvent) {
        let result = match event {
            RoomEvent::MessageSent { message } => subscriber.on_message(message),
            RoomEvent::ParticipantJoined { id } => subscriber.on_join(id),
            RoomEvent::ParticipantLeft { id } => subscriber.on_leave(id),
        };

        if let Err(e) = result {
            warn!(
                room = %self.name,
                subscriber = subscriber.name(),
                event_type = event.event_type(),
                error = %e,
                "Subscriber reaction failed, continuing fan-out"
            );
        }
    }
}
