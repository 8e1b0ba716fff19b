//! Networking modules for the remote auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `validator` manages the background token
//! re-validation loop, and `types` defines the shared wire schema.

pub mod api;
pub mod types;
pub mod validator;
