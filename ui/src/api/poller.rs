//! Task status polling: one outstanding timer, no backoff.

use js_sys::Promise;
use report_common::error_map::ApiError;
use report_common::types::{TaskResult, TaskState};
use wasm_bindgen_futures::JsFuture;

use crate::state::{UploadPhase, UPLOAD_PHASE};

use super::client;

/// Interval between task status checks (milliseconds).
const POLL_INTERVAL_MS: i32 = 1_000;

/// Polls the status endpoint until the task reaches a terminal state.
/// Intermediate states are mirrored into the upload phase so the
/// progress bar advances while waiting.
pub async fn watch_task(task_id: &str) -> Result<TaskResult, ApiError> {
    loop {
        let status = client::task_status(task_id).await?;
        match status.status {
            TaskState::Done => {
                return Ok(TaskResult {
                    log: status.log,
                    stats: status.stats.unwrap_or_default(),
                    debug: status.debug,
                    nome_arquivo_log: status.nome_arquivo_log,
                });
            }
            TaskState::Error => {
                let message = status
                    .error
                    .unwrap_or_else(|| "Erro no processamento".to_string());
                return Err(ApiError::Server(message));
            }
            TaskState::Queued => {
                *UPLOAD_PHASE.write() = UploadPhase::Queued;
            }
            TaskState::Running => {
                *UPLOAD_PHASE.write() = UploadPhase::Running;
            }
        }
        sleep(POLL_INTERVAL_MS).await;
    }
}

/// Resolves after `ms` milliseconds via a window timeout.
async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _| {
        if let Some(window) = web_sys::window() {
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = JsFuture::from(promise).await;
}
