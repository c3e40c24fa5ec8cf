//! Request handlers.
//!
//! Handlers validate input via `storyteller_core`, call the provider
//! client from shared state, and map failures through [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod story;
