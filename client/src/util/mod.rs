//! Client-side helpers that do not fit the state or component layers.

pub mod sketch;
