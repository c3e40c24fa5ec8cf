use std::sync::Arc;

use storyteller_hf::HfClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Chat-completion client. `None` when no API key is configured, in
    /// which case generation requests fail with a configuration error
    /// rather than the process refusing to start.
    pub hf: Option<Arc<HfClient>>,
}

impl AppState {
    /// Build state from configuration, constructing the provider client
    /// when a credential is present.
    pub fn from_config(config: ServerConfig) -> Self {
        let hf = config.hf_api_key.as_ref().map(|key| {
            let client = HfClient::new(
                config.hf_api_url.clone(),
                key.clone(),
                config.hf_model_id.clone(),
            )
            .expect("Failed to build HTTP client");
            Arc::new(client)
        });

        Self {
            config: Arc::new(config),
            hf,
        }
    }
}
