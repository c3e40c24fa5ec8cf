use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use storyteller_core::error::CoreError;
use storyteller_hf::HfApiError;

/// Generic message for failures the caller cannot act on.
const GENERIC_FAILURE: &str = "Failed to generate story. Please try again.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`HfApiError`] for provider
/// failures. Implements [`IntoResponse`] to produce the `{"error": msg}`
/// JSON body with a status reflecting the fault origin: 400 for client
/// validation, 502 for provider-reported errors, 500 for everything the
/// server itself is responsible for (missing credential, empty response,
/// transport failure).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `storyteller_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A provider-call error from `storyteller_hf`.
    #[error(transparent)]
    Hf(#[from] HfApiError),

    /// The generation credential is not configured.
    #[error("HF_API_KEY is not configured on the server.")]
    MissingApiKey,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
                }
            },

            AppError::Hf(hf) => classify_hf_error(hf),

            AppError::MissingApiKey => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a provider-call error into an HTTP status and message.
///
/// - An error the provider reported itself maps to 502 with its message.
/// - A decoded payload with no recognizable text maps to 500 with the
///   no-text message.
/// - Transport failures and unstructured non-2xx responses map to 500
///   with a generic message; details go to the log, not the caller.
fn classify_hf_error(err: &HfApiError) -> (StatusCode, String) {
    match err {
        HfApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
        HfApiError::NoText => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        HfApiError::Api { status, body } => {
            tracing::error!(status = *status, body = %body, "Provider rejected generation request");
            (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
        }
        HfApiError::Request(e) => {
            tracing::error!(error = %e, timeout = e.is_timeout(), "Provider request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
        }
    }
}
