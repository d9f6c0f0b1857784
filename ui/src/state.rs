#![allow(non_snake_case)]

use dioxus::prelude::*;
use report_common::history::HistoryFilter;
use report_common::types::{HistoryRow, LogEntry, ProcessStats, ReportType};
use report_common::whatsapp::WhatsappStatus;

// --- Data types ---

/// Which page is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Upload,
    History,
}

/// Name and size of the file kept in memory for (re)submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

/// Lifecycle of the current upload, from click to terminal state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Sending,
    Queued,
    Running,
    Done,
    Failed(String),
}

impl UploadPhase {
    pub fn progress_percent(&self) -> u8 {
        match self {
            UploadPhase::Idle => 0,
            UploadPhase::Sending => 25,
            UploadPhase::Queued => 50,
            UploadPhase::Running => 75,
            UploadPhase::Done | UploadPhase::Failed(_) => 100,
        }
    }

    pub fn in_flight(&self) -> bool {
        matches!(
            self,
            UploadPhase::Sending | UploadPhase::Queued | UploadPhase::Running
        )
    }
}

// --- Global signals ---

/// Active page.
pub static ACTIVE_PAGE: GlobalSignal<Page> = Global::new(Page::default);

/// Metadata of the selected CSV (the handle itself lives in `api::form`).
pub static SELECTED_FILE: GlobalSignal<Option<SelectedFile>> = Global::new(|| None);

/// Teams extracted from the selected CSV.
pub static TEAMS: GlobalSignal<Vec<String>> = Global::new(Vec::new);

/// Teams ticked for dispatch. Empty means "send to all".
pub static SELECTED_TEAMS: GlobalSignal<Vec<String>> = Global::new(Vec::new);

/// Skip Saturday entries when parsing the CSV.
pub static IGNORE_SATURDAYS: GlobalSignal<bool> = Global::new(|| true);

/// Return the parsed dataset alongside the result.
pub static DEBUG_MODE: GlobalSignal<bool> = Global::new(|| false);

/// Resend even when the report was already fully dispatched.
pub static FORCE_RESEND: GlobalSignal<bool> = Global::new(|| false);

/// Report flavor being dispatched.
pub static REPORT_TYPE: GlobalSignal<ReportType> = Global::new(ReportType::default);

/// Upload lifecycle.
pub static UPLOAD_PHASE: GlobalSignal<UploadPhase> = Global::new(UploadPhase::default);

/// Processing log of the last (or running) task.
pub static TASK_LOG: GlobalSignal<Vec<LogEntry>> = Global::new(Vec::new);

/// Dispatch counters of the last finished task.
pub static TASK_STATS: GlobalSignal<Option<ProcessStats>> = Global::new(|| None);

/// Raw parsed dataset, present when debug mode was on.
pub static DEBUG_PAYLOAD: GlobalSignal<Option<String>> = Global::new(|| None);

/// Filter values of the history page.
pub static HISTORY_FILTER: GlobalSignal<HistoryFilter> = Global::new(HistoryFilter::default);

/// Rows currently shown on the history page.
pub static HISTORY_ROWS: GlobalSignal<Vec<HistoryRow>> = Global::new(Vec::new);

/// Whether a history fetch is in flight.
pub static HISTORY_LOADING: GlobalSignal<bool> = Global::new(|| false);

/// User message of the last failed history fetch.
pub static HISTORY_ERROR: GlobalSignal<Option<String>> = Global::new(|| None);

/// Last payload of the WhatsApp status endpoint.
pub static WHATSAPP_STATUS: GlobalSignal<Option<WhatsappStatus>> = Global::new(|| None);

/// API base URL override from config.json; empty means current origin.
pub static API_BASE: GlobalSignal<String> = Global::new(String::new);
