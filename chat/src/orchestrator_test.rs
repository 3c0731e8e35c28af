use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::gateway::{AccountProfile, NewAccount};
use crate::model::Sender;
use crate::session::Session;

// =============================================================
// Test doubles
// =============================================================

struct FixedCredentials(Session);

impl CredentialStore for FixedCredentials {
    fn get(&self) -> Session {
        self.0.clone()
    }
    fn set(&self, _session: &Session) {}
    fn clear(&self) {}
}

fn signed_in() -> FixedCredentials {
    FixedCredentials(Session::new("tok", "user-1"))
}

fn signed_out() -> FixedCredentials {
    FixedCredentials(Session::default())
}

struct EmptyScene;

impl SketchExporter for EmptyScene {
    fn export(&self) -> Option<Sketch> {
        None
    }
}

struct DrawnScene(&'static str);

impl SketchExporter for DrawnScene {
    fn export(&self) -> Option<Sketch> {
        Some(Sketch::new(self.0))
    }
}

/// Records every gateway call so tests can assert exactly which requests
/// went out, and in what order.
#[derive(Default)]
struct MockGateway {
    calls: RefCell<Vec<String>>,
    fail_with: Option<GatewayError>,
}

impl MockGateway {
    fn failing(error: GatewayError) -> Self {
        Self { calls: RefCell::new(Vec::new()), fail_with: Some(error) }
    }

    fn reply_entry(prompt: &str) -> ConversationEntry {
        ConversationEntry {
            sender: Sender::Assistant,
            prompt: prompt.to_owned(),
            generated_image: Some("https://img/out.jpeg".to_owned()),
            model: "controlNet".to_owned(),
            analysis: None,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Gateway for MockGateway {
    async fn create_account(
        &self,
        _account: &NewAccount,
    ) -> Result<AccountProfile, GatewayError> {
        Err(GatewayError::Failed("not used by the orchestrator".to_owned()))
    }

    async fn sign_in(&self, _email: &str, _password: &str) -> Result<Session, GatewayError> {
        Err(GatewayError::Failed("not used by the orchestrator".to_owned()))
    }

    async fn create_chat(
        &self,
        user_id: &str,
        request: &GenerationRequest,
    ) -> Result<ChatReply, GatewayError> {
        self.calls.borrow_mut().push(format!("create user={user_id}"));
        if let Some(error) = &self.fail_with {
            return Err(error.clone());
        }
        Ok(ChatReply {
            id: "chat-77".to_owned(),
            messages: vec![Self::reply_entry(&request.payload.prompt)],
        })
    }

    async fn append_message(
        &self,
        chat_id: &str,
        user_id: &str,
        request: &GenerationRequest,
    ) -> Result<Vec<ConversationEntry>, GatewayError> {
        self.calls.borrow_mut().push(format!("append chat={chat_id} user={user_id}"));
        if let Some(error) = &self.fail_with {
            return Err(error.clone());
        }
        Ok(vec![Self::reply_entry(&request.payload.prompt)])
    }

    async fn fetch_chat(&self, chat_id: &str) -> Result<ChatReply, GatewayError> {
        self.calls.borrow_mut().push(format!("fetch chat={chat_id}"));
        Ok(ChatReply { id: chat_id.to_owned(), messages: Vec::new() })
    }
}

// =============================================================
// Empty-scene admission
// =============================================================

#[test]
fn empty_canvas_sketch_send_is_rejected_without_network() {
    let mut orchestrator = Orchestrator::new();
    orchestrator.edit_prompt("a house", &EmptyScene);
    let gateway = MockGateway::default();

    let result = block_on(orchestrator.send(&signed_in(), &EmptyScene, &gateway));

    assert_eq!(result, Err(SendAbort::EmptySketch));
    assert!(gateway.calls.borrow().is_empty());
    assert_eq!(orchestrator.phase(), Phase::Composing);
    // No echo appended: the transcript is still just the greeting.
    assert_eq!(orchestrator.conversation.entries.len(), 1);
}

#[test]
fn opportunistic_export_failure_keeps_previous_sketch() {
    let mut orchestrator = Orchestrator::new();
    orchestrator.edit_prompt("a", &DrawnScene("first"));
    orchestrator.edit_prompt("ab", &EmptyScene);
    assert_eq!(orchestrator.sketch, Some(Sketch::new("first")));
}

#[test]
fn text_mode_sends_without_sketch() {
    let mut orchestrator = Orchestrator::new();
    orchestrator.set_mode(GenerationMode::TextToImage);
    orchestrator.edit_prompt("a cabin in the woods", &EmptyScene);

    let pending = orchestrator.begin_send(&signed_in(), &EmptyScene).unwrap();
    assert_eq!(pending.request.payload.image, "");
    assert_eq!(pending.request.payload.controlnet, "");
    assert_eq!(pending.request.mode, GenerationMode::TextToImage);
}

// =============================================================
// Conversation id lifecycle
// =============================================================

#[test]
fn first_send_targets_create_and_adopts_backend_id() {
    let mut orchestrator = Orchestrator::new();
    orchestrator.edit_prompt("a loft", &DrawnScene("png"));
    let gateway = MockGateway::default();

    let outcome = block_on(orchestrator.send(&signed_in(), &DrawnScene("png"), &gateway));

    assert_eq!(outcome, Ok(SendOutcome::Delivered));
    assert_eq!(orchestrator.conversation.id.as_deref(), Some("chat-77"));
    assert_eq!(orchestrator.phase(), Phase::Idle);
    assert_eq!(gateway.calls.borrow().as_slice(), ["create user=user-1"]);
    // Greeting + echo + server reply, in append order.
    assert_eq!(orchestrator.conversation.entries.len(), 3);
}

#[test]
fn adopted_id_is_used_verbatim_for_followups() {
    let mut orchestrator = Orchestrator::new();
    let gateway = MockGateway::default();

    orchestrator.edit_prompt("a loft", &DrawnScene("png"));
    block_on(orchestrator.send(&signed_in(), &DrawnScene("png"), &gateway)).unwrap();

    orchestrator.edit_prompt("add a balcony", &DrawnScene("png"));
    block_on(orchestrator.send(&signed_in(), &DrawnScene("png"), &gateway)).unwrap();

    assert_eq!(
        gateway.calls.borrow().as_slice(),
        ["create user=user-1", "append chat=chat-77 user=user-1"]
    );
    // The id never changed across the round trips.
    assert_eq!(orchestrator.conversation.id.as_deref(), Some("chat-77"));
}

// =============================================================
// Admission control
// =============================================================

#[test]
fn send_while_awaiting_reply_is_a_noop() {
    let mut orchestrator = Orchestrator::new();
    orchestrator.edit_prompt("a loft", &DrawnScene("png"));
    let pending = orchestrator.begin_send(&signed_in(), &DrawnScene("png")).unwrap();
    assert!(orchestrator.in_flight());
    let entries_before = orchestrator.conversation.entries.len();

    orchestrator.edit_prompt("impatient retry", &DrawnScene("png"));
    let retry = orchestrator.begin_send(&signed_in(), &DrawnScene("png"));

    assert_eq!(retry, Err(SendAbort::InFlight));
    assert_eq!(orchestrator.conversation.entries.len(), entries_before);

    // The original request still resolves normally.
    let gateway = MockGateway::default();
    let delivery = block_on(Orchestrator::dispatch(&gateway, &pending)).unwrap();
    assert_eq!(orchestrator.complete_send(Ok(delivery)), SendOutcome::Delivered);
    assert_eq!(orchestrator.phase(), Phase::Idle);
}

#[test]
fn empty_prompt_send_is_a_noop() {
    let mut orchestrator = Orchestrator::new();
    orchestrator.edit_prompt("   ", &DrawnScene("png"));
    let result = orchestrator.begin_send(&signed_in(), &DrawnScene("png"));
    assert_eq!(result, Err(SendAbort::EmptyPrompt));
}

// =============================================================
// Authorization
// =============================================================

#[test]
fn absent_token_fails_fast_with_zero_calls() {
    let mut orchestrator = Orchestrator::new();
    orchestrator.edit_prompt("a loft", &DrawnScene("png"));
    let gateway = MockGateway::default();

    let result = block_on(orchestrator.send(&signed_out(), &DrawnScene("png"), &gateway));

    assert_eq!(result, Err(SendAbort::Unauthorized));
    assert!(gateway.calls.borrow().is_empty());
    assert_eq!(orchestrator.phase(), Phase::Idle);
    // The echo was appended before the credential check; nothing further was.
    assert_eq!(orchestrator.conversation.entries.len(), 2);
}

#[test]
fn rejected_token_reply_returns_to_idle() {
    let mut orchestrator = Orchestrator::new();
    orchestrator.edit_prompt("a loft", &DrawnScene("png"));
    let gateway = MockGateway::failing(GatewayError::Unauthorized);

    let outcome = block_on(orchestrator.send(&signed_in(), &DrawnScene("png"), &gateway));

    assert_eq!(outcome, Ok(SendOutcome::Unauthorized));
    assert_eq!(orchestrator.phase(), Phase::Idle);
    assert_eq!(orchestrator.conversation.entries.len(), 2);
}

// =============================================================
// Failure and recovery
// =============================================================

#[test]
fn server_failure_lands_in_failed_until_next_attempt() {
    let mut orchestrator = Orchestrator::new();
    orchestrator.edit_prompt("a loft", &DrawnScene("png"));
    let gateway = MockGateway::failing(GatewayError::Failed("backend on fire".to_owned()));

    let outcome = block_on(orchestrator.send(&signed_in(), &DrawnScene("png"), &gateway));
    assert_eq!(outcome, Ok(SendOutcome::Failed("backend on fire".to_owned())));
    assert_eq!(orchestrator.phase(), Phase::Failed);

    // A new send attempt re-enters composing and goes through.
    orchestrator.edit_prompt("try again", &DrawnScene("png"));
    assert_eq!(orchestrator.phase(), Phase::Composing);
    let gateway = MockGateway::default();
    let outcome = block_on(orchestrator.send(&signed_in(), &DrawnScene("png"), &gateway));
    assert_eq!(outcome, Ok(SendOutcome::Delivered));
}

// =============================================================
// Merge policy
// =============================================================

#[test]
fn merge_keeps_both_echo_and_server_copy() {
    // The backend echoes the user prompt back in its reply; the transcript
    // deliberately keeps both copies (no reconciliation by identity).
    let mut orchestrator = Orchestrator::new();
    orchestrator.edit_prompt("a loft", &DrawnScene("png"));
    let gateway = MockGateway::default();
    block_on(orchestrator.send(&signed_in(), &DrawnScene("png"), &gateway)).unwrap();

    let prompts: Vec<&str> = orchestrator
        .conversation
        .entries
        .iter()
        .skip(1)
        .map(|e| e.prompt.as_str())
        .collect();
    assert_eq!(prompts, ["a loft", "a loft"]);
}

// =============================================================
// Resume
// =============================================================

#[test]
fn load_history_adopts_id_and_prepends_greeting() {
    let mut orchestrator = Orchestrator::new();
    orchestrator.load_history(ChatReply {
        id: "chat-42".to_owned(),
        messages: vec![MockGateway::reply_entry("old prompt")],
    });

    assert_eq!(orchestrator.conversation.id.as_deref(), Some("chat-42"));
    assert_eq!(orchestrator.conversation.entries.len(), 2);
    assert_eq!(orchestrator.conversation.entries[0].sender, Sender::Assistant);
    assert_eq!(orchestrator.conversation.entries[1].prompt, "old prompt");
    assert_eq!(orchestrator.phase(), Phase::Idle);
}
