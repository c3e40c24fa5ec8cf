//! Pure domain logic for the storyteller service.
//!
//! Everything in this crate is synchronous and side-effect free: the story
//! brief model and its validation, the prompt builder, and the paragraph
//! splitting that defines the rendered output contract. I/O (HTTP server,
//! provider client) lives in the `storyteller-api` and `storyteller-hf`
//! crates.

pub mod brief;
pub mod error;
pub mod prompt;
pub mod render;
