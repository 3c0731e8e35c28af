//! Client-side orchestration core for The Architect design chat.
//!
//! This crate owns the conversation model, the send/reply state machine, and
//! the boundary traits the browser layer implements. It has no network or
//! browser dependency of its own, so the full request/response flow can be
//! tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Transcript entries, conversations, and generation modes |
//! | [`session`] | Bearer credentials and the [`session::CredentialStore`] port |
//! | [`gateway`] | Backend API contract and request/reply payloads |
//! | [`sketch`] | Rasterized sketch payload and the [`sketch::SketchExporter`] port |
//! | [`orchestrator`] | The send state machine driving all of the above |

pub mod gateway;
pub mod model;
pub mod orchestrator;
pub mod session;
pub mod sketch;
