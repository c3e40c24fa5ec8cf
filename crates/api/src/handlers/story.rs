//! Handler for the story generation endpoint.
//!
//! Routes:
//! - `POST /api/generate-story` — build a prompt from the brief, call the
//!   chat-completion endpoint, return the normalized story text.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use storyteller_core::brief::{validate_brief, StoryBrief};
use storyteller_core::{prompt, render};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Success payload: the generated story as trimmed plain text.
#[derive(Debug, Serialize)]
pub struct StoryResponse {
    pub story: String,
}

/// POST /api/generate-story
///
/// Fails fast with a configuration error when no API key is set and with
/// a validation error when the brief has no main characters; neither case
/// makes an outbound call. Otherwise performs the single provider call
/// and returns `{"story": ...}`.
pub async fn generate_story(
    State(state): State<AppState>,
    Json(brief): Json<StoryBrief>,
) -> AppResult<impl IntoResponse> {
    let Some(hf) = state.hf.as_ref() else {
        return Err(AppError::MissingApiKey);
    };

    validate_brief(&brief).map_err(AppError::Core)?;

    let prompt = prompt::build_prompt(&brief);
    let story = hf.generate(&prompt).await?;

    tracing::info!(
        model = %hf.model(),
        scenes = brief.scene_count(),
        paragraphs = render::split_paragraphs(&story).len(),
        "Story generated"
    );

    Ok(Json(StoryResponse { story }))
}
