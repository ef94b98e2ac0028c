//! Conversation actor.
//!
//! `ConversationHandle` is the public surface. The runner owns the session and
//! the analyzer; delivery tasks realize reply delays and post each emission
//! back to the runner's mailbox.

pub mod conversation;
mod delivery;
pub mod messages;
pub mod traits;

pub use conversation::ConversationHandle;
pub use messages::{ActorError, SessionSnapshot};
pub use traits::MessageSink;
