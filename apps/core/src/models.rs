use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::brain::Category;

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

/// Which kind of card a structured payload represents. Sinks use it to pick a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Crisis,
    Exercise,
    CopingStrategies,
}

/// Structured card payload. The message sink decides how to render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub kind: CardKind,
    pub title: String,
    /// Paragraphs shown under the title.
    #[serde(default)]
    pub body: Vec<String>,
    /// Bullet entries shown after the body.
    #[serde(default)]
    pub items: Vec<String>,
}

impl Card {
    /// Every line of the card, title first. Handy for plain-text sinks and tests.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.title.as_str())
            .chain(self.body.iter().map(String::as_str))
            .chain(self.items.iter().map(String::as_str))
    }

    /// Returns true if any line of the card contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().any(|line| line.contains(needle))
    }
}

/// The content of a message: either plain text or a structured card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageContent {
    Text { text: String },
    Card { card: Card },
}

impl MessageContent {
    pub fn text(text: impl Into<String>) -> Self {
        MessageContent::Text { text: text.into() }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageContent::Text { text } => Some(text),
            MessageContent::Card { .. } => None,
        }
    }

    pub fn as_card(&self) -> Option<&Card> {
        match self {
            MessageContent::Card { card } => Some(card),
            MessageContent::Text { .. } => None,
        }
    }
}

impl From<Card> for MessageContent {
    fn from(card: Card) -> Self {
        MessageContent::Card { card }
    }
}

/// Represents a single message within the conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The unique identifier for the message.
    pub id: Uuid,
    /// What to show.
    pub content: MessageContent,
    /// Who sent it.
    pub sender: Sender,
    /// When the message was appended to the history.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(content: MessageContent, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            sender,
            timestamp: Utc::now(),
        }
    }
}

/// Counters and flags for one conversation lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Whether the chat has been started (greeting shown).
    pub chat_active: bool,
    /// Number of messages (user and bot) appended since the last clear.
    pub message_count: usize,
    /// When the current conversation started.
    pub start_time: DateTime<Utc>,
    /// Categories classified since the last clear, in first-seen order.
    #[serde(default)]
    pub topics_discussed: Vec<Category>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            chat_active: false,
            message_count: 0,
            start_time: Utc::now(),
            topics_discussed: Vec::new(),
        }
    }
}
