//! Top-level routed pages.

pub mod home;
pub mod signin;
pub mod signup;
pub mod studio;
