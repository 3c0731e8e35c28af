//! Backend API contract: the gateway port and its request/reply payloads.
//!
//! ERROR HANDLING
//! ==============
//! Two failure kinds only. An absent or rejected token is `Unauthorized` and
//! routes the user back to sign-in; everything else — connection failures and
//! non-2xx responses alike — collapses into `Failed` with a human-readable
//! message. No operation retries automatically.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::{ConversationEntry, GenerationMode};
use crate::session::Session;
use crate::sketch::{SKETCH_SIZE, Sketch};

/// Error returned by gateway operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// No session token present, or the backend rejected the one offered.
    /// An absent token fails fast, before any network I/O.
    #[error("Invalid credentials. Please sign in again.")]
    Unauthorized,
    /// Network failure or non-success response, carrying the server-provided
    /// detail when one is available.
    #[error("{0}")]
    Failed(String),
}

/// New-account registration form. The optional profile fields the backend
/// accepts (bio, country, image) are sent empty at sign-up.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub bio: String,
    pub country: String,
    pub image: String,
}

impl NewAccount {
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
            bio: String::new(),
            country: String::new(),
            image: String::new(),
        }
    }
}

/// Profile returned on successful account creation.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    #[serde(default)]
    pub id: Option<String>,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

/// Diffusion parameters sent as the request envelope's `payload` field.
/// Defaults match what the backend expects for each pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationPayload {
    pub model: String,
    pub prompt: String,
    pub controlnet: String,
    /// Base64 sketch for sketch-guided sends, empty otherwise.
    pub image: String,
    pub negative_prompt: String,
    pub mask_image: String,
    pub strength: f64,
    pub width: u32,
    pub height: u32,
    pub steps: u32,
    pub guidance: f64,
    pub seed: u32,
    pub scheduler: String,
    pub output_format: String,
}

/// A fully assembled generation request: the pipeline selector plus its
/// diffusion payload.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    pub mode: GenerationMode,
    pub payload: GenerationPayload,
}

impl GenerationRequest {
    #[must_use]
    pub fn new(mode: GenerationMode, prompt: &str, sketch: Option<&Sketch>) -> Self {
        Self {
            mode,
            payload: GenerationPayload {
                model: mode.backend_model().to_owned(),
                prompt: prompt.to_owned(),
                controlnet: mode.controlnet().to_owned(),
                image: sketch.map(|s| s.base64.clone()).unwrap_or_default(),
                negative_prompt: "Disfigured, cartoon, blurry".to_owned(),
                mask_image: String::new(),
                strength: 0.5,
                width: SKETCH_SIZE,
                height: SKETCH_SIZE,
                steps: 25,
                guidance: 7.5,
                seed: 0,
                scheduler: "dpmsolver++".to_owned(),
                output_format: "jpeg".to_owned(),
            },
        }
    }
}

/// Reply to `POST /chats` and `GET /chats/{id}`: the backend-assigned
/// conversation id plus its transcript.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatReply {
    pub id: String,
    #[serde(default)]
    pub messages: Vec<ConversationEntry>,
}

/// Authenticated HTTP client for the remote backend, base path `/api/v1`.
///
/// Futures are `?Send`: the implementation runs on the single-threaded
/// browser event loop.
#[async_trait(?Send)]
pub trait Gateway {
    /// `POST /users`. Succeeds only on HTTP 200; any other status surfaces
    /// the server-provided error detail as the failure reason.
    async fn create_account(&self, account: &NewAccount) -> Result<AccountProfile, GatewayError>;

    /// `POST /auth/login`. Returns the bearer session on success.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, GatewayError>;

    /// `POST /chats` — first message of a new conversation.
    async fn create_chat(
        &self,
        user_id: &str,
        request: &GenerationRequest,
    ) -> Result<ChatReply, GatewayError>;

    /// `POST /chats/{id}/messages` — follow-up against an adopted id.
    async fn append_message(
        &self,
        chat_id: &str,
        user_id: &str,
        request: &GenerationRequest,
    ) -> Result<Vec<ConversationEntry>, GatewayError>;

    /// `GET /chats/{id}` — resume an existing conversation.
    async fn fetch_chat(&self, chat_id: &str) -> Result<ChatReply, GatewayError>;
}
