//! WhatsApp connection polling with an adaptive interval: 1 s while
//! disconnected so the QR shows up promptly, 5 s once connected.

use std::cell::Cell;

use report_common::whatsapp::{poll_interval_ms, ConnectionState, FAST_POLL_MS};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::state::WHATSAPP_STATUS;

use super::client;

thread_local! {
    static INTERVAL_ID: Cell<Option<i32>> = const { Cell::new(None) };
    static CONNECTED: Cell<bool> = const { Cell::new(false) };
}

/// First check runs immediately; the interval keeps polling afterwards.
/// Starts at the fast cadence — a connected first response retunes it.
pub async fn start() {
    schedule(FAST_POLL_MS);
    tick().await;
}

/// Replaces the current polling interval with a new cadence.
fn schedule(interval_ms: i32) {
    let Some(window) = web_sys::window() else {
        return;
    };

    INTERVAL_ID.with(|cell| {
        if let Some(id) = cell.take() {
            window.clear_interval_with_handle(id);
        }
    });

    let callback = Closure::<dyn FnMut()>::new(move || {
        wasm_bindgen_futures::spawn_local(async {
            tick().await;
        });
    });
    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        interval_ms,
    ) {
        Ok(id) => INTERVAL_ID.with(|cell| cell.set(Some(id))),
        Err(e) => tracing::error!("Falha ao agendar verificação do WhatsApp: {:?}", e),
    }
    callback.forget();
}

async fn tick() {
    let status = match client::whatsapp_status().await {
        Ok(status) => status,
        Err(e) => {
            tracing::warn!("Falha ao consultar status do WhatsApp: {}", e.user_message());
            // Unreachable endpoint reads as disconnected
            mark_connected(false);
            *WHATSAPP_STATUS.write() = None;
            return;
        }
    };

    let state = status.connection_state();
    *WHATSAPP_STATUS.write() = Some(status);
    mark_connected(state.is_open());
}

/// Switches the poll cadence when the connection state flips.
fn mark_connected(now_open: bool) {
    let was_open = CONNECTED.with(|c| c.get());
    if now_open == was_open {
        return;
    }
    CONNECTED.with(|c| c.set(now_open));

    let state = if now_open {
        ConnectionState::Open
    } else {
        ConnectionState::Closed
    };
    let interval = poll_interval_ms(state);
    if now_open {
        tracing::info!("WhatsApp conectado, verificação a cada {}ms", interval);
    } else {
        tracing::info!("WhatsApp desconectado, verificação a cada {}ms", interval);
    }
    schedule(interval);
}

/// Disconnects the instance and resumes fast polling for the new QR.
pub fn logout() {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = client::whatsapp_logout().await {
            tracing::error!(
                "Falha ao desconectar WhatsApp ({}): {}",
                e.category().as_str(),
                e.user_message()
            );
            return;
        }
        *WHATSAPP_STATUS.write() = None;
        mark_connected(false);
    });
}
