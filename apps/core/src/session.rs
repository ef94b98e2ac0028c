//! Conversation session: history and counters for one chat lifetime.
//!
//! The session is a plain owned value. The actor in `actors::conversation`
//! wraps one; tests and synchronous callers can drive it directly.

use chrono::Utc;
use tracing::info;

use crate::brain::{Category, Emission};
use crate::models::{Message, MessageContent, Sender, SessionState};

/// One conversation: append-only history plus session counters.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    state: SessionState,
    history: Vec<Message>,
    greeting: String,
}

impl ConversationSession {
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            state: SessionState::default(),
            history: Vec::new(),
            greeting: greeting.into(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn is_active(&self) -> bool {
        self.state.chat_active
    }

    /// Activate the chat and append the greeting. No-op while already active.
    pub fn start(&mut self) -> Option<&Message> {
        if self.state.chat_active {
            return None;
        }
        info!("Starting chat");
        self.state.chat_active = true;
        let greeting = MessageContent::text(self.greeting.clone());
        Some(self.append_message(greeting, Sender::Bot))
    }

    /// Append a message, stamp it, and bump the message count.
    pub fn append_message(&mut self, content: MessageContent, sender: Sender) -> &Message {
        self.history.push(Message::new(content, sender));
        self.state.message_count += 1;
        &self.history[self.history.len() - 1]
    }

    /// Append the output of a delivered emission.
    pub fn apply(&mut self, emission: Emission) -> &Message {
        let sender = emission.action.sender();
        let content = emission.action.content();
        self.append_message(content, sender)
    }

    /// Remember a classified category (first occurrence only).
    pub fn record_topic(&mut self, category: Category) {
        if !self.state.topics_discussed.contains(&category) {
            self.state.topics_discussed.push(category);
        }
    }

    /// Reset everything if `confirmed`. Returns whether anything was cleared.
    pub fn clear(&mut self, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        info!("Clearing chat ({} messages)", self.history.len());
        self.history.clear();
        self.state = SessionState {
            start_time: Utc::now(),
            ..SessionState::default()
        };
        true
    }
}
