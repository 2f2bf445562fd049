use std::sync::Arc;

use chatroom::{Logger, Recorder, Responder, Room};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chatroom=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting chat room demo");

    let room = Room::new("General");

    let alice = Arc::new(Recorder::new("Alice"));
    let bob = Arc::new(Recorder::new("Bob"));
    let charlie = Arc::new(Recorder::new("Charlie"));
    let help_bot = Arc::new(Responder::new("HelpBot"));
    let logger = Arc::new(Logger::new());

    room.join("Alice", alice.clone());
    room.join("HelpBot", help_bot.clone());
    room.join("Logger", logger.clone());
    room.join("Bob", bob.clone());
    room.join("Charlie", charlie);

    let script = [
        ("Alice", "Hello everyone!"),
        ("Bob", "Hi Alice! How are you?"),
        ("Charlie", "@HelpBot help"),
        ("Alice", "@HelpBot what's the time?"),
        ("Bob", "I have to go, bye!"),
    ];
    for (sender, content) in script {
        if let Err(e) = room.send_message(sender, content) {
            info!(sender = %sender, error = %e, "Send rejected");
        }
    }

    if let Err(e) = room.leave("Bob") {
        info!(error = %e, "Leave rejected");
    }
    if let Err(e) = room.send_message("Alice", "Bob left") {
        info!(error = %e, "Send rejected");
    }

    info!(
        room = room.name(),
        participants = room.participant_count(),
        alice_received = alice.message_count(),
        bot_replies = help_bot.replies().len(),
        "Demo finished"
    );

    for entry in logger.entries() {
        info!(entry = %entry, "Chat log");
    }
}
