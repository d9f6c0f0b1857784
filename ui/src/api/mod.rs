pub mod client;
pub mod config;
pub mod form;
pub mod poller;
pub mod whatsapp;

use std::sync::atomic::{AtomicBool, Ordering};

static INITIALIZED: AtomicBool = AtomicBool::new(false);

pub fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    // Restore persisted form options before anything renders with defaults
    crate::prefs::load_prefs();

    wasm_bindgen_futures::spawn_local(async {
        // Config must be in place before the first request builds a URL
        config::load().await;
        whatsapp::start().await;
    });
}
