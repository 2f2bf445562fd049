use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Events a room broadcasts to its subscribers.
///
/// Events represent facts about things that have already happened: the
/// room mutates its state first, then fans the corresponding event out to
/// every registered participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RoomEvent {
    /// A registered participant sent a message.
    MessageSent { message: Message },

    /// A participant joined the room.
    ParticipantJoined { id: String },

    /// A participant left the room.
    ParticipantLeft { id: String },
}

impl RoomEvent {
    /// Get a human-readable description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            RoomEvent::MessageSent { .. } => "message_sent",
            RoomEvent::ParticipantJoined { .. } => "participant_joined",
            RoomEvent::ParticipantLeft { .. } => "participant_left",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_labels() {
        let message = Message::new("Alice", "hello");

        assert_eq!(
            RoomEvent::MessageSent { message }.event_type(),
            "message_sent"
        );
        assert_eq!(
            RoomEvent::ParticipantJoined {
                id: "Alice".to_string()
            }
            .event_type(),
            "participant_joined"
        );
        assert_eq!(
            RoomEvent::ParticipantLeft {
                id: "Alice".to_string()
            }
            .event_type(),
            "participant_left"
        );
    }
}
