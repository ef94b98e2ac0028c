use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::WeakSender;
use tokio::time::sleep;
use tracing::debug;

use crate::actors::messages::ConversationMessage;
use crate::actors::traits::MessageSink;
use crate::brain::ResponsePlan;

/// Realizes the delays of one response plan.
///
/// Runs as its own task so the actor keeps serving its mailbox while replies
/// are pending. Every emission is posted back to the actor, which appends it
/// to the history and forwards it to the sink. The task is never cancelled; it
/// stops early only when the conversation actor is gone.
pub(crate) async fn deliver_plan<S: MessageSink>(
    plan: ResponsePlan,
    unit: Duration,
    sink: Arc<S>,
    mailbox: WeakSender<ConversationMessage>,
) {
    sink.show_thinking_indicator().await;
    sleep(plan.thinking.to_duration(unit)).await;
    sink.hide_thinking_indicator().await;

    let total = plan.emissions.len();
    for (index, emission) in plan.emissions.into_iter().enumerate() {
        if !emission.delay.is_zero() {
            sleep(emission.delay.to_duration(unit)).await;
        }

        let Some(mailbox) = mailbox.upgrade() else {
            debug!("Conversation closed, dropping {} pending emissions", total - index);
            return;
        };
        if mailbox.send(ConversationMessage::Deliver { emission }).await.is_err() {
            debug!("Conversation closed, dropping {} pending emissions", total - index);
            return;
        }
    }
}
