//! Story brief request model and validation.
//!
//! A [`StoryBrief`] is the deserialized body of `POST /api/generate-story`.
//! All fields except `mainCharacters` are optional; `scenesCount` arrives
//! from the browser form as a string (or occasionally a bare number) and is
//! coerced via [`StoryBrief::scene_count`].

use serde::Deserialize;

use crate::error::CoreError;

/// Number of scenes requested when the field is absent or not numeric.
pub const DEFAULT_SCENE_COUNT: i64 = 4;

/// A story brief as submitted by the browser form.
///
/// Field names follow the JSON wire format (camelCase).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryBrief {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub main_characters: Option<String>,
    #[serde(default)]
    pub world_description: Option<String>,
    /// Raw scene count as sent by the client. HTML forms submit strings,
    /// so this accepts any JSON value and coercion happens in
    /// [`scene_count`](Self::scene_count).
    #[serde(default)]
    pub scenes_count: Option<serde_json::Value>,
}

impl StoryBrief {
    /// Resolve the requested scene count.
    ///
    /// Accepts a JSON number or a numeric string. Absent, non-numeric, and
    /// zero values all fall back to [`DEFAULT_SCENE_COUNT`].
    pub fn scene_count(&self) -> i64 {
        let parsed = match &self.scenes_count {
            Some(serde_json::Value::Number(n)) => n.as_i64(),
            Some(serde_json::Value::String(s)) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        match parsed {
            Some(n) if n != 0 => n,
            _ => DEFAULT_SCENE_COUNT,
        }
    }
}

/// Validate that a brief carries a usable main-characters description.
///
/// This is the only required field; the endpoint must reject the request
/// before any outbound provider call when it is missing or blank.
pub fn validate_brief(brief: &StoryBrief) -> Result<(), CoreError> {
    match &brief.main_characters {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(CoreError::Validation(
            "Please provide at least a brief description of main characters.".to_string(),
        )),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
