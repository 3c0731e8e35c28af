//! Reusable UI components shared across pages.

pub mod chat_bubble;
pub mod mode_picker;
pub mod notice;
pub mod pricing_card;
pub mod sketch_pad;
