#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::state::{UploadPhase, DEBUG_PAYLOAD, TASK_LOG, TASK_STATS, UPLOAD_PHASE};

#[component]
pub fn ProgressPanel() -> Element {
    let phase = UPLOAD_PHASE.read().clone();
    let log = TASK_LOG.read().clone();
    let stats = *TASK_STATS.read();
    let debug = DEBUG_PAYLOAD.read().clone();

    let percent = phase.progress_percent();
    let bar_class = if matches!(phase, UploadPhase::Failed(_)) {
        "progress-fill error"
    } else {
        "progress-fill"
    };

    rsx! {
        section { class: "progress-panel",
            if !matches!(phase, UploadPhase::Idle) {
                div { class: "progress-bar",
                    div { class: "{bar_class}", style: "width: {percent}%" }
                }
            }

            if let UploadPhase::Failed(message) = &phase {
                p { class: "log-entry error", "{message}" }
            }

            if let Some(stats) = stats {
                div { class: "stats-row",
                    StatCard { label: "Mensagens", value: stats.total }
                    StatCard { label: "Equipes", value: stats.equipes }
                    StatCard { label: "Sucesso", value: stats.sucesso }
                    StatCard { label: "Erros", value: stats.erro }
                    StatCard { label: "Pendências", value: stats.pendencias }
                }
            }

            if !log.is_empty() {
                ul { class: "log-list",
                    for entry in log.iter() {
                        {
                            let class = format!("log-entry {}", entry.kind.css_class());
                            rsx! {
                                li { class: "{class}", "{entry.message}" }
                            }
                        }
                    }
                }
            }

            if let Some(debug) = debug.as_ref() {
                details { class: "debug-panel",
                    summary { "Dados de depuração" }
                    pre { class: "debug-json", "{debug}" }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: u32) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}
