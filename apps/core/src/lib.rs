//! MindfulSupport conversational core.
//!
//! A scripted supportive-chat engine: user lines are classified by trigger
//! phrases (crisis first), answered with timed bot replies drawn from a content
//! bank, and rendered through a caller-supplied `MessageSink`.

pub mod actors;
pub mod brain;
pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod preflight;
pub mod quick_action;
pub mod session;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use actors::{ConversationHandle, MessageSink, SessionSnapshot};
pub use brain::{BrainAnalyzer, Category, ClassificationResult, Delay, Emission, EmissionAction, Picker, TriggerMatch};
pub use config::ChatConfig;
pub use content::ContentBank;
pub use error::AppError;
pub use models::{Card, CardKind, Message, MessageContent, Sender, SessionState};
pub use quick_action::QuickAction;
pub use session::ConversationSession;
