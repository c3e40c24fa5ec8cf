/// Default chat-completion endpoint (Hugging Face router).
pub const DEFAULT_HF_API_URL: &str = "https://router.huggingface.co/v1/chat/completions";

/// Default model identifier when `HF_MODEL_ID` is unset.
pub const DEFAULT_HF_MODEL_ID: &str = "tiiuae/falcon-7b-instruct";

/// Server configuration loaded from environment variables.
///
/// All fields except the API key have defaults suitable for local
/// development. A missing API key does not prevent startup; it makes
/// every generation request fail with a configuration error instead.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `90`, must exceed the
    /// 60-second outbound generation timeout).
    pub request_timeout_secs: u64,
    /// Directory served as static assets, with `index.html` at `/`
    /// (default: `public`).
    pub static_dir: String,
    /// Chat-completion endpoint URL.
    pub hf_api_url: String,
    /// Bearer token for the provider. `None` when unconfigured.
    pub hf_api_key: Option<String>,
    /// Provider model identifier.
    pub hf_model_id: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                            |
    /// |------------------------|----------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                          |
    /// | `PORT`                 | `3000`                                             |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`                            |
    /// | `REQUEST_TIMEOUT_SECS` | `90`                                               |
    /// | `STATIC_DIR`           | `public`                                           |
    /// | `HF_API_URL`           | `https://router.huggingface.co/v1/chat/completions`|
    /// | `HF_API_KEY`           | (unset)                                            |
    /// | `HF_MODEL_ID`          | `tiiuae/falcon-7b-instruct`                        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "90".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".into());

        let hf_api_url =
            std::env::var("HF_API_URL").unwrap_or_else(|_| DEFAULT_HF_API_URL.into());

        let hf_api_key = std::env::var("HF_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let hf_model_id =
            std::env::var("HF_MODEL_ID").unwrap_or_else(|_| DEFAULT_HF_MODEL_ID.into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            static_dir,
            hf_api_url,
            hf_api_key,
            hf_model_id,
        }
    }
}
