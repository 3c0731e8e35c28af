//! Network layer: the HTTP gateway adapter for the remote backend.

pub mod api;
