#![allow(non_snake_case)]

use dioxus::prelude::*;
use report_common::error_map::ApiError;
use report_common::format::{format_size, is_csv_filename};
use report_common::types::{LogEntry, LogKind, ReportType};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::api::form::{self, UploadOptions};
use crate::api::{client, poller};
use crate::prefs;
use crate::state::{
    SelectedFile, UploadPhase, DEBUG_MODE, DEBUG_PAYLOAD, FORCE_RESEND, IGNORE_SATURDAYS,
    REPORT_TYPE, SELECTED_FILE, SELECTED_TEAMS, TASK_LOG, TASK_STATS, TEAMS, UPLOAD_PHASE,
};

use super::progress::ProgressPanel;

const FILE_INPUT_ID: &str = "csv-file-input";

#[component]
pub fn UploadPage() -> Element {
    let selected = SELECTED_FILE.read().clone();
    let teams = TEAMS.read().clone();
    let phase = UPLOAD_PHASE.read().clone();
    let report_type = *REPORT_TYPE.read();
    let in_flight = phase.in_flight();

    let file_label = if matches!(phase, UploadPhase::Done) {
        "Arquivo mantido"
    } else {
        "Arquivo selecionado"
    };
    let file_line = selected
        .as_ref()
        .map(|f| format!("{}: {} ({})", file_label, f.name, format_size(f.size)));

    rsx! {
        section { class: "upload-page",
            div { class: "upload-form",
                label { class: "field-label", r#for: FILE_INPUT_ID, "Arquivo CSV" }
                input {
                    id: FILE_INPUT_ID,
                    class: "file-input",
                    r#type: "file",
                    accept: ".csv",
                    onchange: move |_| on_file_selected(),
                }
                if let Some(line) = file_line.as_ref() {
                    p { class: "file-name", "{line}" }
                }

                div { class: "form-options",
                    label { class: "option-toggle",
                        input {
                            r#type: "checkbox",
                            checked: *IGNORE_SATURDAYS.read(),
                            onchange: move |e: Event<FormData>| {
                                *IGNORE_SATURDAYS.write() = e.checked();
                                prefs::save_prefs();
                            },
                        }
                        span { "Ignorar sábados" }
                    }
                    label { class: "option-toggle",
                        input {
                            r#type: "checkbox",
                            checked: *DEBUG_MODE.read(),
                            onchange: move |e: Event<FormData>| {
                                *DEBUG_MODE.write() = e.checked();
                                prefs::save_prefs();
                            },
                        }
                        span { "Modo debug" }
                    }
                    label { class: "option-toggle",
                        input {
                            r#type: "checkbox",
                            checked: *FORCE_RESEND.read(),
                            onchange: move |e: Event<FormData>| {
                                *FORCE_RESEND.write() = e.checked();
                                prefs::save_prefs();
                            },
                        }
                        span { "Forçar reenvio" }
                    }

                    label { class: "option-select",
                        span { "Tipo de relatório" }
                        select {
                            value: report_type.as_str(),
                            onchange: move |e: Event<FormData>| {
                                if let Some(tipo) = ReportType::parse(&e.value()) {
                                    *REPORT_TYPE.write() = tipo;
                                    prefs::save_prefs();
                                }
                            },
                            for tipo in ReportType::ALL {
                                {
                                    let label = tipo.as_str();
                                    rsx! {
                                        option {
                                            value: label,
                                            selected: tipo == report_type,
                                            "{label}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                if !teams.is_empty() {
                    div { class: "team-list",
                        span { class: "field-label", "Equipes" }
                        p { class: "text-secondary",
                            "Nenhuma seleção envia para todas as equipes."
                        }
                        div { class: "team-grid",
                            for team in teams.iter() {
                                {
                                    let name = team.clone();
                                    let checked = SELECTED_TEAMS.read().contains(&name);
                                    rsx! {
                                        label { class: "team-option", key: "{name}",
                                            input {
                                                r#type: "checkbox",
                                                checked: checked,
                                                onchange: {
                                                    let name = name.clone();
                                                    move |e: Event<FormData>| {
                                                        toggle_team(&name, e.checked());
                                                    }
                                                },
                                            }
                                            span { "{name}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                button {
                    class: "send-btn",
                    disabled: in_flight || selected.is_none(),
                    onclick: move |_| send_report(),
                    if in_flight { "Enviando..." } else { "Enviar" }
                }
            }

            ProgressPanel {}
        }
    }
}

fn toggle_team(name: &str, checked: bool) {
    let mut selected = SELECTED_TEAMS.write();
    if checked {
        if !selected.iter().any(|t| t == name) {
            selected.push(name.to_string());
        }
    } else {
        selected.retain(|t| t != name);
    }
}

fn file_input() -> Option<HtmlInputElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(FILE_INPUT_ID)?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

/// A new file was picked: keep the handle, validate the name and load
/// the team list for the dispatch filter.
fn on_file_selected() {
    let Some(input) = file_input() else { return };
    let Some(file) = input.files().and_then(|list| list.get(0)) else {
        return;
    };

    let name = file.name();
    if !is_csv_filename(&name) {
        *UPLOAD_PHASE.write() =
            UploadPhase::Failed("Formato inválido. Envie um arquivo .csv".to_string());
        return;
    }

    form::remember_file(file.clone());
    *SELECTED_FILE.write() = Some(SelectedFile {
        name,
        size: file.size() as u64,
    });
    *UPLOAD_PHASE.write() = UploadPhase::Idle;

    let ignore_saturdays = *IGNORE_SATURDAYS.read();
    let report_type = *REPORT_TYPE.read();
    wasm_bindgen_futures::spawn_local(async move {
        let form_data = match form::teams_form(&file, ignore_saturdays, report_type) {
            Ok(f) => f,
            Err(e) => {
                tracing::error!("Falha ao montar formulário de equipes: {:?}", e);
                return;
            }
        };
        match client::fetch_teams(&form_data).await {
            Ok(equipes) => {
                *SELECTED_TEAMS.write() = Vec::new();
                *TEAMS.write() = equipes;
            }
            Err(e) => {
                tracing::error!(
                    "Erro ao carregar equipes ({}): {}",
                    e.category().as_str(),
                    e.user_message()
                );
                *TEAMS.write() = Vec::new();
                *SELECTED_TEAMS.write() = Vec::new();
                *UPLOAD_PHASE.write() =
                    UploadPhase::Failed(teams_error_message(&e, report_type));
            }
        }
    });
}

/// A format rejection gets the per-type hint; anything else keeps the
/// mapped message.
fn teams_error_message(error: &ApiError, report_type: ReportType) -> String {
    match error {
        ApiError::Http { .. } => report_type.format_error().to_string(),
        _ => error.user_message(),
    }
}

/// Uploads the kept file and follows the task until it finishes.
fn send_report() {
    let Some(file) = form::current_file() else {
        *UPLOAD_PHASE.write() = UploadPhase::Failed("Selecione um arquivo CSV.".to_string());
        return;
    };

    let opts = UploadOptions {
        ignore_saturdays: *IGNORE_SATURDAYS.read(),
        debug_mode: *DEBUG_MODE.read(),
        force_resend: *FORCE_RESEND.read(),
        report_type: *REPORT_TYPE.read(),
        teams: SELECTED_TEAMS.read().clone(),
    };
    let debug_mode = opts.debug_mode;

    *UPLOAD_PHASE.write() = UploadPhase::Sending;
    *TASK_LOG.write() = Vec::new();
    *TASK_STATS.write() = None;
    *DEBUG_PAYLOAD.write() = None;

    wasm_bindgen_futures::spawn_local(async move {
        let form_data = match form::upload_form(&file, &opts) {
            Ok(f) => f,
            Err(e) => {
                tracing::error!("Falha ao montar formulário de envio: {:?}", e);
                *UPLOAD_PHASE.write() =
                    UploadPhase::Failed("Erro interno ao montar o envio.".to_string());
                return;
            }
        };

        tracing::info!("Enviando arquivo para processamento");
        let task_id = match client::send_csv(&form_data).await {
            Ok(id) => id,
            Err(e) => {
                tracing::error!(
                    "Erro no envio ({}): {}",
                    e.category().as_str(),
                    e.user_message()
                );
                *UPLOAD_PHASE.write() = UploadPhase::Failed(e.user_message());
                return;
            }
        };

        TASK_LOG.write().push(LogEntry {
            kind: LogKind::Info,
            message: "Processamento agendado. Aguardando resultado...".to_string(),
        });

        match poller::watch_task(&task_id).await {
            Ok(result) => {
                *TASK_LOG.write() = result.log;
                *TASK_STATS.write() = Some(result.stats);
                if debug_mode {
                    *DEBUG_PAYLOAD.write() = result.debug;
                }
                *UPLOAD_PHASE.write() = UploadPhase::Done;
            }
            Err(e) => {
                tracing::error!(
                    "Erro durante processamento ({}): {}",
                    e.category().as_str(),
                    e.user_message()
                );
                *UPLOAD_PHASE.write() = UploadPhase::Failed(e.user_message());
            }
        }
    });
}
