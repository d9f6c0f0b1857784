//! Fetch wrappers around the backend endpoints. Every call funnels
//! through `request_json` so failures are captured as `ApiError` with
//! enough context for the error mapper.

use dioxus::prelude::ReadableExt;
use report_common::error_map::ApiError;
use report_common::history::HistoryFilter;
use report_common::types::{
    AckResponse, HistoryResponse, HistoryRow, TaskStatusResponse, TeamsResponse, UploadResponse,
};
use report_common::whatsapp::WhatsappStatus;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

use crate::state::API_BASE;

/// Base URL for API calls: the configured override, or the current origin.
pub fn base_url() -> String {
    let base = API_BASE.read().clone();
    if !base.is_empty() {
        return base;
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Turns a rejected JS promise into a classifiable error.
fn script_error(value: JsValue) -> ApiError {
    match value.dyn_into::<js_sys::Error>() {
        Ok(error) => ApiError::Script {
            name: String::from(error.name()),
            message: String::from(error.message()),
        },
        Err(other) => ApiError::Script {
            name: String::new(),
            message: other
                .as_string()
                .unwrap_or_else(|| format!("{:?}", other)),
        },
    }
}

fn get_request(url: &str) -> Result<Request, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    Request::new_with_str_and_init(url, &opts).map_err(script_error)
}

fn post_request(url: &str, body: Option<&FormData>) -> Result<Request, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    if let Some(form) = body {
        opts.set_body(form.as_ref());
    }
    Request::new_with_str_and_init(url, &opts).map_err(script_error)
}

/// Executes a request and decodes the JSON payload. Non-2xx responses
/// capture the body text so the server's own error details survive.
async fn request_json<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Script {
        name: String::new(),
        message: "janela indisponível".to_string(),
    })?;
    let url = request.url();

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(script_error)?;
    let response: Response = response.dyn_into().map_err(script_error)?;

    if !response.ok() {
        let status = response.status();
        let status_text = response.status_text();
        let body = match response.text() {
            Ok(promise) => JsFuture::from(promise).await.ok().and_then(|v| v.as_string()),
            Err(_) => None,
        };
        let error = ApiError::Http {
            status,
            status_text,
            body,
        };
        tracing::error!("HTTP {} em {}: {}", status, url, error.user_message());
        return Err(error);
    }

    let text = JsFuture::from(response.text().map_err(script_error)?)
        .await
        .map_err(script_error)?;
    let text = text.as_string().unwrap_or_default();
    serde_json::from_str(&text).map_err(|e| ApiError::Payload(e.to_string()))
}

/// GET an absolute-path URL (used for static resources like config.json).
pub(super) async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    request_json(get_request(url)?).await
}

/// Uploads the CSV for processing and returns the scheduled task id.
pub async fn send_csv(form: &FormData) -> Result<String, ApiError> {
    let url = format!("{}/enviar", base_url());
    let payload: UploadResponse = request_json(post_request(&url, Some(form))?).await?;
    if !payload.success {
        return Err(ApiError::Server("Erro ao agendar processamento".to_string()));
    }
    payload
        .task_id
        .ok_or_else(|| ApiError::Server("Erro ao agendar processamento".to_string()))
}

/// Fetches the current status of a scheduled task.
pub async fn task_status(task_id: &str) -> Result<TaskStatusResponse, ApiError> {
    let url = format!("{}/status/{}", base_url(), task_id);
    request_json(get_request(&url)?).await
}

/// Extracts the team list from the CSV without dispatching anything.
pub async fn fetch_teams(form: &FormData) -> Result<Vec<String>, ApiError> {
    let url = format!("{}/equipes", base_url());
    let payload: TeamsResponse = request_json(post_request(&url, Some(form))?).await?;
    if !payload.success {
        let message = payload
            .error
            .unwrap_or_else(|| "Erro desconhecido ao processar equipes".to_string());
        return Err(ApiError::Server(message));
    }
    Ok(payload.equipes)
}

/// Fetches dispatch history rows matching the filter.
pub async fn fetch_history(filter: &HistoryFilter) -> Result<Vec<HistoryRow>, ApiError> {
    let query = filter.query_string();
    let url = if query.is_empty() {
        format!("{}/historico/dados", base_url())
    } else {
        format!("{}/historico/dados?{}", base_url(), query)
    };
    let payload: HistoryResponse = request_json(get_request(&url)?).await?;
    if !payload.success {
        return Err(ApiError::Server("Erro ao consultar histórico".to_string()));
    }
    Ok(payload.dados)
}

/// Fetches the WhatsApp instance connection status.
pub async fn whatsapp_status() -> Result<WhatsappStatus, ApiError> {
    let url = format!("{}/whatsapp/status", base_url());
    request_json(get_request(&url)?).await
}

/// Disconnects the WhatsApp instance.
pub async fn whatsapp_logout() -> Result<(), ApiError> {
    let url = format!("{}/whatsapp/logout", base_url());
    let ack: AckResponse = request_json(post_request(&url, None)?).await?;
    if !ack.success {
        return Err(ApiError::Server("Erro ao desconectar o WhatsApp".to_string()));
    }
    Ok(())
}
