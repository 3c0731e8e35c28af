//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `studio`, `ui`) so individual
//! components can depend on small focused models. The studio state wraps the
//! `chat` crate's orchestrator; everything else is presentation-local.

pub mod session;
pub mod studio;
pub mod ui;
