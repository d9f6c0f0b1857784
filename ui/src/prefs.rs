//! Form options and history filter persisted in localStorage.

use dioxus::prelude::ReadableExt;
use report_common::history::HistoryFilter;
use report_common::types::ReportType;
use serde::{Deserialize, Serialize};

use crate::state::{
    DEBUG_MODE, FORCE_RESEND, HISTORY_FILTER, IGNORE_SATURDAYS, REPORT_TYPE,
};

const STORAGE_KEY: &str = "report_dispatch_prefs";

/// Bump this when the preference schema changes to auto-clear stale entries.
const PREFS_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct PrefsData {
    #[serde(default)]
    version: u32,
    ignore_saturdays: bool,
    debug_mode: bool,
    force_resend: bool,
    report_type: ReportType,
    #[serde(default)]
    history_filter: HistoryFilter,
}

/// Restore persisted options into the global signals.
pub fn load_prefs() {
    let storage = match get_storage() {
        Some(s) => s,
        None => return,
    };
    let json = match storage.get_item(STORAGE_KEY) {
        Ok(Some(j)) => j,
        _ => return,
    };
    let data: PrefsData = match serde_json::from_str(&json) {
        Ok(d) => d,
        Err(_) => {
            let _ = storage.remove_item(STORAGE_KEY);
            return;
        }
    };
    if data.version != PREFS_VERSION {
        tracing::info!(
            "Versão das preferências mudou ({} != {}), descartando",
            data.version,
            PREFS_VERSION
        );
        let _ = storage.remove_item(STORAGE_KEY);
        return;
    }
    *IGNORE_SATURDAYS.write() = data.ignore_saturdays;
    *DEBUG_MODE.write() = data.debug_mode;
    *FORCE_RESEND.write() = data.force_resend;
    *REPORT_TYPE.write() = data.report_type;
    *HISTORY_FILTER.write() = data.history_filter;
}

/// Persist the current options.
pub fn save_prefs() {
    let storage = match get_storage() {
        Some(s) => s,
        None => return,
    };
    let data = PrefsData {
        version: PREFS_VERSION,
        ignore_saturdays: *IGNORE_SATURDAYS.read(),
        debug_mode: *DEBUG_MODE.read(),
        force_resend: *FORCE_RESEND.read(),
        report_type: *REPORT_TYPE.read(),
        history_filter: HISTORY_FILTER.read().clone(),
    };
    if let Ok(json) = serde_json::to_string(&data) {
        let _ = storage.set_item(STORAGE_KEY, &json);
    }
}

fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
