use crate::actors::messages::AppError;
use crate::models::Message;
use async_trait::async_trait;

/// Defines the output surface the conversation actor renders through.
///
/// The core never renders anything itself: it tells the sink what to show and
/// when. Implementations can target a web page, a terminal, or a test recorder.
#[async_trait]
pub trait MessageSink: Send + Sync + 'static {
    /// Displays a message that was just appended to the history.
    async fn show(&self, message: &Message) -> Result<(), AppError>;

    /// Shows the "bot is typing" indicator.
    async fn show_thinking_indicator(&self);

    /// Hides the "bot is typing" indicator.
    async fn hide_thinking_indicator(&self);

    /// Called after a confirmed clear so the sink can wipe its view and reset
    /// any "chat active" styling.
    async fn session_cleared(&self) {}
}
