//! Response-shape normalization for chat-completion payloads.
//!
//! The hosted router fronts many model backends and the response body
//! varies with the backend: OpenAI-style `choices`, legacy inference
//! arrays, bare strings, or a top-level `generated_text`. This module
//! reduces all of them to one plain-text story through an ordered chain
//! of shape checks, ending in an explicit no-text outcome.

use serde_json::Value;

/// Failure to obtain story text from a decoded payload.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The payload carried an explicit error from the provider.
    #[error("{0}")]
    Upstream(String),

    /// No recognized shape produced any text.
    #[error("Model did not return any text.")]
    NoText,
}

/// Extract story text from a decoded provider payload.
///
/// Shapes are tried in priority order, each branch either yielding text
/// or falling through to the next:
///
/// 1. An `error` field (string, or object with `message`) — surfaced as
///    [`ExtractError::Upstream`].
/// 2. `choices[0].message.content` as a string.
/// 3. A non-empty array: the first element's `generated_text`, `text`,
///    or `output_text` string, else the element stringified as JSON.
/// 4. The payload itself as a string.
/// 5. A top-level `generated_text` string.
///
/// Anything else, or a shape that matched but produced an empty string,
/// is [`ExtractError::NoText`]. Extracted text is returned trimmed.
pub fn extract_story_text(payload: &Value) -> Result<String, ExtractError> {
    if let Some(message) = upstream_error(payload) {
        return Err(ExtractError::Upstream(message));
    }

    let candidate = chat_completion_text(payload)
        .or_else(|| inference_array_text(payload))
        .or_else(|| payload.as_str().map(str::to_string))
        .or_else(|| string_field(payload, "generated_text"));

    match candidate {
        Some(text) if !text.is_empty() => Ok(text.trim().to_string()),
        _ => Err(ExtractError::NoText),
    }
}

/// Look for an explicit provider error in the payload.
///
/// Returns the error string, the nested `message` for object errors, or
/// the object serialized as JSON when it has no string `message`.
pub fn upstream_error(payload: &Value) -> Option<String> {
    let error = payload.get("error")?;
    match error {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => match other.get("message").and_then(Value::as_str) {
            Some(message) => Some(message.to_string()),
            None => Some(other.to_string()),
        },
    }
}

/// OpenAI-style shape: `choices[0].message.content`.
fn chat_completion_text(payload: &Value) -> Option<String> {
    payload
        .get("choices")?
        .as_array()?
        .first()?
        .get("message")?
        .get("content")?
        .as_str()
        .map(str::to_string)
}

/// Legacy inference shape: a non-empty array whose first element carries
/// the text under one of several keys. Elements with none of the known
/// keys are stringified as-is rather than rejected.
fn inference_array_text(payload: &Value) -> Option<String> {
    let first = payload.as_array()?.first()?;
    let text = ["generated_text", "text", "output_text"]
        .iter()
        .find_map(|key| string_field(first, key).filter(|s| !s.is_empty()))
        .unwrap_or_else(|| first.to_string());
    Some(text)
}

/// A non-null string field on a JSON object.
fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key)?.as_str().map(str::to_string)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
