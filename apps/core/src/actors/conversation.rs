use crate::actors::delivery::deliver_plan;
use crate::actors::messages::{ActorError, AppError, ConversationMessage, SessionSnapshot};
use crate::actors::traits::MessageSink;
use crate::brain::{crisis_resources_card, BrainAnalyzer, Category, Emission};
use crate::config::ChatConfig;
use crate::content::ContentBank;
use crate::models::{Card, Message, MessageContent, Sender};
use crate::preflight::run_preflight_checks;
use crate::quick_action::QuickAction;
use crate::session::ConversationSession;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::WeakSender;
use tokio::sync::{mpsc, oneshot};
use tokio::time::timeout;
use tracing::{debug, error, info, instrument, warn};

/// A handle to the conversation actor.
///
/// This is the invocation surface UI code talks to. Handles are cheap to clone;
/// the actor stops when the last handle is dropped or `shutdown` is called.
#[derive(Clone)]
pub struct ConversationHandle {
    sender: mpsc::Sender<ConversationMessage>,
    request_timeout: Duration,
}

impl ConversationHandle {
    /// Validates the content and config, then spawns the actor.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Arguments
    ///
    /// * `config` - Timing, matching mode and mailbox settings.
    /// * `bank` - The content bank shared with the analyzer.
    /// * `sink` - Where messages and the thinking indicator are shown.
    ///
    /// # Returns
    ///
    /// An `AppError::Config` if preflight fails.
    pub fn new<S: MessageSink>(
        config: ChatConfig,
        bank: Arc<ContentBank>,
        sink: Arc<S>,
    ) -> Result<Self, AppError> {
        run_preflight_checks(&bank, &config).into_result()?;

        let analyzer = BrainAnalyzer::new(bank.clone(), &config)?;
        let session = ConversationSession::new(bank.greeting.clone());
        let (sender, receiver) = mpsc::channel(config.mailbox_capacity);
        let runner = ConversationRunner {
            receiver,
            mailbox: sender.downgrade(),
            analyzer,
            session,
            sink,
            delay_unit: config.delay_unit(),
        };
        tokio::spawn(async move { runner.run().await });

        Ok(Self {
            sender,
            request_timeout: config.request_timeout(),
        })
    }

    /// Same as `new` with the built-in content.
    pub fn with_builtin_content<S: MessageSink>(config: ChatConfig, sink: Arc<S>) -> Result<Self, AppError> {
        Self::new(config, Arc::new(ContentBank::builtin()), sink)
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> ConversationMessage,
    ) -> Result<T, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(build(send))
            .await
            .map_err(|e| ActorError::Mailbox(e.to_string()))?;
        let reply = timeout(self.request_timeout, recv).await?;
        reply.map_err(|e| AppError::from(ActorError::NoReply(e.to_string())))
    }

    /// Starts the chat with a greeting. Returns false if it was already active.
    #[instrument(skip(self))]
    pub async fn start_session(&self) -> Result<bool, AppError> {
        self.request(|responder| ConversationMessage::Start { responder })
            .await?
    }

    /// Handles one user-submitted line.
    ///
    /// Blank lines are ignored (`Ok(None)`). Otherwise the chat is started if
    /// needed, the line is appended to the history, and the reply is scheduled.
    /// Returns as soon as the reply is scheduled; bot messages arrive later
    /// through the sink.
    #[instrument(skip(self))]
    pub async fn handle_user_utterance(&self, text: &str) -> Result<Option<Category>, AppError> {
        let text = text.to_string();
        self.request(|responder| ConversationMessage::UserUtterance { text, responder })
            .await?
    }

    /// Sends a quick action's canned prompt as if the user typed it.
    #[instrument(skip(self))]
    pub async fn handle_quick_action(&self, action: QuickAction) -> Result<Option<Category>, AppError> {
        info!("Handling quick action: {}", action);
        self.handle_user_utterance(action.prompt()).await
    }

    /// Clears the conversation when `confirmed` is true. Returns whether it cleared.
    ///
    /// Replies that are still pending from earlier lines are not cancelled and
    /// will land in the fresh history.
    #[instrument(skip(self))]
    pub async fn clear_session(&self, confirmed: bool) -> Result<bool, AppError> {
        self.request(|responder| ConversationMessage::Clear { confirmed, responder })
            .await?
    }

    /// Copy of the session counters and history.
    pub async fn snapshot(&self) -> Result<SessionSnapshot, AppError> {
        self.request(|responder| ConversationMessage::Snapshot { responder })
            .await
    }

    /// The static crisis resource card, for a "show resources" surface.
    pub fn crisis_resources(&self) -> Card {
        crisis_resources_card(None)
    }

    /// Stops the actor.
    pub async fn shutdown(&self) -> Result<(), AppError> {
        self.sender
            .send(ConversationMessage::Shutdown)
            .await
            .map_err(|e| AppError::from(ActorError::Mailbox(e.to_string())))
    }
}

// --- Actor Runner ---
struct ConversationRunner<S: MessageSink> {
    receiver: mpsc::Receiver<ConversationMessage>,
    /// Weak so that pending deliveries do not keep the actor alive on their own.
    mailbox: WeakSender<ConversationMessage>,
    analyzer: BrainAnalyzer,
    session: ConversationSession,
    sink: Arc<S>,
    delay_unit: Duration,
}

impl<S: MessageSink> ConversationRunner<S> {
    async fn run(mut self) {
        info!("Conversation actor started");
        while let Some(msg) = self.receiver.recv().await {
            if let ConversationMessage::Shutdown = msg {
                info!("Conversation actor shutting down...");
                break;
            }
            self.handle_message(msg).await;
        }
        info!("Conversation actor stopped");
    }

    async fn handle_message(&mut self, msg: ConversationMessage) {
        match msg {
            ConversationMessage::Start { responder } => {
                let started = self.start().await;
                let _ = responder.send(Ok(started));
            }
            ConversationMessage::UserUtterance { text, responder } => {
                let result = self.handle_utterance(&text).await;
                if let Err(e) = &result {
                    error!("Error processing user message: {:?}", e);
                }
                let _ = responder.send(result);
            }
            ConversationMessage::Clear { confirmed, responder } => {
                let cleared = self.session.clear(confirmed);
                if cleared {
                    self.sink.session_cleared().await;
                } else {
                    debug!("Clear not confirmed, keeping conversation");
                }
                let _ = responder.send(Ok(cleared));
            }
            ConversationMessage::Snapshot { responder } => {
                let _ = responder.send(SessionSnapshot {
                    state: self.session.state().clone(),
                    history: self.session.history().to_vec(),
                });
            }
            ConversationMessage::Deliver { emission } => {
                self.deliver(emission).await;
            }
            ConversationMessage::Shutdown => {}
        }
    }

    async fn start(&mut self) -> bool {
        match self.session.start().cloned() {
            Some(greeting) => {
                self.show(&greeting).await;
                true
            }
            None => false,
        }
    }

    #[instrument(skip(self))]
    async fn handle_utterance(&mut self, text: &str) -> Result<Option<Category>, AppError> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring blank utterance");
            return Ok(None);
        }

        self.start().await;
        let user_message = self
            .session
            .append_message(MessageContent::text(text), Sender::User)
            .clone();
        self.show(&user_message).await;

        let Some(plan) = self.analyzer.analyze(text)? else {
            return Ok(None);
        };
        let category = plan.category;
        self.session.record_topic(category);

        tokio::spawn(deliver_plan(
            plan,
            self.delay_unit,
            self.sink.clone(),
            self.mailbox.clone(),
        ));

        Ok(Some(category))
    }

    async fn deliver(&mut self, emission: Emission) {
        let message = self.session.apply(emission).clone();
        self.show(&message).await;
    }

    async fn show(&self, message: &Message) {
        if let Err(e) = self.sink.show(message).await {
            warn!("Message sink failed to show {} message: {}", message.sender, e);
        }
    }
}
