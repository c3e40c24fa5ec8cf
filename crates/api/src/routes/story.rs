//! Route definitions for story generation.
//!
//! ```text
//! POST   /generate-story    generate_story
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::story;
use crate::state::AppState;

/// Routes merged into the `/api` nest.
pub fn router() -> Router<AppState> {
    Router::new().route("/generate-story", post(story::generate_story))
}
