pub mod health;
pub mod story;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generate-story    generate a story from a brief (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(story::router())
}
