use serde::Serialize;
use tokio::sync::oneshot;

use crate::brain::{Category, Emission};
use crate::models::{Message, SessionState};

/// Defines errors that can occur within the actor system.
#[derive(Debug, thiserror::Error, Serialize, Clone)]
pub enum ActorError {
    /// The conversation actor's mailbox is closed or full.
    #[error("Mailbox unavailable: {0}")]
    Mailbox(String),
    /// The actor dropped the reply channel before answering.
    #[error("No reply from conversation actor: {0}")]
    NoReply(String),
    /// An error indicating that an actor operation timed out.
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

impl From<tokio::time::error::Elapsed> for ActorError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        ActorError::Timeout(format!("Actor operation timed out: {}", err))
    }
}

// Re-export AppError for convenience
pub use crate::error::AppError;

/// Point-in-time copy of a conversation, returned by `Snapshot`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub history: Vec<Message>,
}

/// Messages that can be sent to the conversation actor.
#[derive(Debug)]
pub enum ConversationMessage {
    /// Start the chat (greeting) if it is not already active.
    Start {
        responder: oneshot::Sender<Result<bool, AppError>>,
    },
    /// A line typed by the user. Replies with the category it was classified
    /// as, or `None` when the line was blank.
    UserUtterance {
        text: String,
        responder: oneshot::Sender<Result<Option<Category>, AppError>>,
    },
    /// Clear the conversation if the caller confirmed.
    Clear {
        confirmed: bool,
        responder: oneshot::Sender<Result<bool, AppError>>,
    },
    /// Copy of the current state and history.
    Snapshot {
        responder: oneshot::Sender<SessionSnapshot>,
    },
    /// A scheduled emission whose delay has elapsed. Sent by delivery tasks.
    Deliver { emission: Emission },
    /// Stop the actor. Pending delivery tasks finish sleeping and are dropped.
    Shutdown,
}
