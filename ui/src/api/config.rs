//! Runtime configuration fetched before the first API call.

use serde::Deserialize;

use crate::state::API_BASE;

/// Subset of `/static/config.json` the browser cares about. Absent keys
/// (or a missing file) leave the defaults in place.
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default, rename = "API_BASE_URL")]
    pub api_base_url: Option<String>,
}

pub async fn load() {
    match super::client::get_json::<AppConfig>("/static/config.json").await {
        Ok(config) => {
            if let Some(base) = config.api_base_url {
                let base = base.trim_end_matches('/').to_string();
                if !base.is_empty() {
                    tracing::info!("API base configurada: {}", base);
                    *API_BASE.write() = base;
                }
            }
        }
        Err(e) => {
            // Optional file; the current origin works for same-origin deploys
            tracing::debug!("config.json não carregado: {}", e.user_message());
        }
    }
}
