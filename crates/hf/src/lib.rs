//! Hugging Face router client library.
//!
//! Provides the HTTP wrapper for the hosted chat-completion endpoint and
//! the response-shape normalization that turns its variably-shaped JSON
//! payloads into a single plain-text story.

pub mod client;
pub mod extract;

pub use client::{HfApiError, HfClient};
