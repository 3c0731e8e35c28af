//! The send/reply state machine for the design chat.
//!
//! DESIGN
//! ======
//! The orchestrator is pure state: it decides, the caller performs. Because a
//! reactive UI cannot hold a mutable borrow across an await, the round trip is
//! split into a synchronous [`Orchestrator::begin_send`] (admission control,
//! export, optimistic echo, request assembly) and a synchronous
//! [`Orchestrator::complete_send`] (merge, id adoption, failure routing), with
//! the gateway call happening between them in caller-owned async code. The
//! async [`Orchestrator::send`] composes all three for native tests and
//! non-reactive callers.

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod orchestrator_test;

use crate::gateway::{ChatReply, Gateway, GatewayError, GenerationRequest};
use crate::model::{Conversation, ConversationEntry, GenerationMode};
use crate::session::CredentialStore;
use crate::sketch::{Sketch, SketchExporter};

/// Where the orchestrator is in the request/response round trip.
///
/// `Exporting` and `Sending` are transient — they are passed through inside
/// `begin_send` — but named so every transition in the flow is explicit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No pending request. Entered at start and after a completed round trip.
    #[default]
    Idle,
    /// The user is editing the prompt.
    Composing,
    /// A synchronous sketch export is being taken for an image-required send.
    Exporting,
    /// The optimistic echo is appended and the request is being assembled.
    Sending,
    /// A request is in flight; further sends are no-ops until it resolves.
    AwaitingReply,
    /// The last send failed; the only exit is a new send attempt.
    Failed,
}

/// Reasons a send attempt stopped before any request was dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendAbort {
    /// A previous send is still awaiting its reply; this one is dropped, not
    /// queued.
    InFlight,
    /// Nothing to send.
    EmptyPrompt,
    /// Sketch-required mode with zero drawable elements; the user stays in
    /// `Composing`.
    EmptySketch,
    /// No session token; the caller should redirect to sign-in. Guaranteed to
    /// happen before any network I/O.
    Unauthorized,
}

/// Which gateway operation a pending send must issue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendTarget {
    /// First message of a new conversation (`POST /chats`).
    Create { user_id: String },
    /// Follow-up against the adopted conversation id, used verbatim.
    Append { chat_id: String, user_id: String },
}

/// A fully assembled request for the caller to dispatch to the gateway.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingSend {
    pub target: SendTarget,
    pub request: GenerationRequest,
}

/// Successful gateway reply, normalized across create and append.
#[derive(Clone, Debug, PartialEq)]
pub struct Delivery {
    /// Newly assigned conversation id, present only on a create reply.
    pub chat_id: Option<String>,
    pub entries: Vec<ConversationEntry>,
}

impl From<ChatReply> for Delivery {
    fn from(reply: ChatReply) -> Self {
        Self { chat_id: Some(reply.id), entries: reply.messages }
    }
}

/// Terminal result of a completed round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Reply merged into the transcript.
    Delivered,
    /// The backend rejected the token; the caller should redirect to sign-in.
    Unauthorized,
    /// Network or server failure with a user-facing message.
    Failed(String),
}

/// Client-side orchestration core.
///
/// Kept free of browser and network types so the whole machine is testable
/// natively; the UI layer owns one of these behind a signal and feeds it
/// events.
#[derive(Clone, Debug)]
pub struct Orchestrator {
    pub conversation: Conversation,
    pub mode: GenerationMode,
    pub prompt: String,
    /// Last successful export, kept so an opportunistic export failure never
    /// degrades the image state.
    pub sketch: Option<Sketch>,
    phase: Phase,
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self {
            conversation: Conversation::with_greeting(),
            mode: GenerationMode::default(),
            prompt: String::new(),
            sketch: None,
            phase: Phase::Idle,
        }
    }
}

impl Orchestrator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a request is currently awaiting its reply.
    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.phase == Phase::AwaitingReply
    }

    /// Switch the generation pipeline.
    pub fn set_mode(&mut self, mode: GenerationMode) {
        self.mode = mode;
    }

    /// Record a prompt edit.
    ///
    /// In sketch-required mode an export is attempted opportunistically on
    /// every edit; an empty scene silently keeps the previous sketch and never
    /// blocks composing. A prompt edit is also the re-entry point from
    /// `Failed`.
    pub fn edit_prompt(&mut self, text: impl Into<String>, exporter: &impl SketchExporter) {
        self.prompt = text.into();
        if !self.in_flight() {
            self.phase = Phase::Composing;
        }
        if self.mode.requires_sketch() {
            if let Some(sketch) = exporter.export() {
                self.sketch = Some(sketch);
            }
        }
    }

    /// Admit, export, echo, and assemble a send.
    ///
    /// On success the phase is `AwaitingReply` and the returned [`PendingSend`]
    /// must be dispatched by the caller, then resolved via
    /// [`Self::complete_send`]. Every abort path leaves the transcript
    /// consistent and dispatches nothing.
    ///
    /// # Errors
    ///
    /// [`SendAbort`] for the admission, validation, and fail-fast
    /// authorization cases; see its variants.
    pub fn begin_send(
        &mut self,
        credentials: &impl CredentialStore,
        exporter: &impl SketchExporter,
    ) -> Result<PendingSend, SendAbort> {
        if self.in_flight() {
            return Err(SendAbort::InFlight);
        }
        if self.prompt.trim().is_empty() {
            return Err(SendAbort::EmptyPrompt);
        }

        // Never submit an image-less request in an image-required mode: a
        // fresh export is taken on every send, and an empty scene aborts.
        if self.mode.requires_sketch() {
            self.phase = Phase::Exporting;
            match exporter.export() {
                Some(sketch) => self.sketch = Some(sketch),
                None => {
                    self.phase = Phase::Composing;
                    return Err(SendAbort::EmptySketch);
                }
            }
        }

        self.phase = Phase::Sending;
        let prompt = std::mem::take(&mut self.prompt);
        self.conversation.append(ConversationEntry::user_echo(&prompt, self.mode));

        let session = credentials.get();
        let (Some(_), Some(user_id)) = (session.token, session.user_id) else {
            // The echo stays; nothing further is appended after this point.
            self.phase = Phase::Idle;
            return Err(SendAbort::Unauthorized);
        };

        let sketch = self.mode.requires_sketch().then(|| self.sketch.as_ref()).flatten();
        let request = GenerationRequest::new(self.mode, &prompt, sketch);
        let target = match &self.conversation.id {
            Some(chat_id) => SendTarget::Append { chat_id: chat_id.clone(), user_id },
            None => SendTarget::Create { user_id },
        };

        self.phase = Phase::AwaitingReply;
        Ok(PendingSend { target, request })
    }

    /// Issue the gateway call a [`PendingSend`] describes.
    ///
    /// # Errors
    ///
    /// Propagates the gateway's [`GatewayError`] unchanged.
    pub async fn dispatch(
        gateway: &impl Gateway,
        pending: &PendingSend,
    ) -> Result<Delivery, GatewayError> {
        match &pending.target {
            SendTarget::Create { user_id } => gateway
                .create_chat(user_id, &pending.request)
                .await
                .map(Delivery::from),
            SendTarget::Append { chat_id, user_id } => gateway
                .append_message(chat_id, user_id, &pending.request)
                .await
                .map(|entries| Delivery { chat_id: None, entries }),
        }
    }

    /// Resolve an awaited reply.
    ///
    /// Success merges the returned entries purely additively — the optimistic
    /// echo is deliberately not reconciled against them — and adopts the
    /// conversation id when this was the first message. A rejected token goes
    /// back to `Idle` (the caller redirects); any other failure lands in
    /// `Failed` until the next send attempt.
    pub fn complete_send(&mut self, result: Result<Delivery, GatewayError>) -> SendOutcome {
        match result {
            Ok(delivery) => {
                if let Some(id) = delivery.chat_id {
                    self.conversation.adopt_id(id);
                }
                self.conversation.extend(delivery.entries);
                self.phase = Phase::Idle;
                SendOutcome::Delivered
            }
            Err(GatewayError::Unauthorized) => {
                self.phase = Phase::Idle;
                SendOutcome::Unauthorized
            }
            Err(GatewayError::Failed(message)) => {
                self.phase = Phase::Failed;
                SendOutcome::Failed(message)
            }
        }
    }

    /// Full round trip: begin, dispatch, complete.
    ///
    /// # Errors
    ///
    /// [`SendAbort`] when the send never left `begin_send`.
    pub async fn send(
        &mut self,
        credentials: &impl CredentialStore,
        exporter: &impl SketchExporter,
        gateway: &impl Gateway,
    ) -> Result<SendOutcome, SendAbort> {
        let pending = self.begin_send(credentials, exporter)?;
        let result = Self::dispatch(gateway, &pending).await;
        Ok(self.complete_send(result))
    }

    /// Replace the transcript with server history when resuming an existing
    /// conversation: greeting first, then the server entries in their order.
    pub fn load_history(&mut self, reply: ChatReply) {
        self.conversation = Conversation::with_greeting();
        self.conversation.adopt_id(reply.id);
        self.conversation.extend(reply.messages);
        self.phase = Phase::Idle;
    }
}
