#![allow(non_snake_case)]

use dioxus::prelude::*;
use report_common::history::{distinct_teams, status_counts};
use report_common::types::ReportType;

use crate::api::client;
use crate::prefs;
use crate::state::{HISTORY_ERROR, HISTORY_FILTER, HISTORY_LOADING, HISTORY_ROWS};

use super::chart::StatusChart;

#[component]
pub fn HistoryPage() -> Element {
    use_effect(|| {
        load_history();
    });

    let rows = HISTORY_ROWS.read().clone();
    let filter = HISTORY_FILTER.read().clone();
    let loading = *HISTORY_LOADING.read();
    let error = HISTORY_ERROR.read().clone();

    // Team options track the current result set, like the original page
    let teams = distinct_teams(&rows);
    let counts = status_counts(&rows);

    rsx! {
        section { class: "history-page",
            div { class: "history-filters",
                label { class: "filter-field",
                    span { "Equipe" }
                    select {
                        value: "{filter.equipe}",
                        onchange: move |e: Event<FormData>| {
                            HISTORY_FILTER.write().equipe = e.value();
                        },
                        option { value: "", "Todas" }
                        for team in teams.iter() {
                            option {
                                value: "{team}",
                                selected: *team == filter.equipe,
                                "{team}"
                            }
                        }
                    }
                }

                label { class: "filter-field",
                    span { "Tipo" }
                    select {
                        value: "{filter.tipo}",
                        onchange: move |e: Event<FormData>| {
                            HISTORY_FILTER.write().tipo = e.value();
                        },
                        option { value: "", "Todos" }
                        for tipo in ReportType::ALL {
                            {
                                let label = tipo.as_str();
                                rsx! {
                                    option {
                                        value: label,
                                        selected: label == filter.tipo,
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                }

                label { class: "filter-field",
                    span { "Início" }
                    input {
                        r#type: "date",
                        value: "{filter.inicio}",
                        onchange: move |e: Event<FormData>| {
                            HISTORY_FILTER.write().inicio = e.value();
                        },
                    }
                }

                label { class: "filter-field",
                    span { "Fim" }
                    input {
                        r#type: "date",
                        value: "{filter.fim}",
                        onchange: move |e: Event<FormData>| {
                            HISTORY_FILTER.write().fim = e.value();
                        },
                    }
                }

                button {
                    class: "apply-btn",
                    onclick: move |_| {
                        prefs::save_prefs();
                        load_history();
                    },
                    "Aplicar filtros"
                }
            }

            if let Some(message) = error.as_ref() {
                p { class: "log-entry error", "{message}" }
            }

            if loading {
                p { class: "text-secondary", "Carregando histórico..." }
            } else if rows.is_empty() {
                p { class: "text-secondary", "Nenhum envio encontrado." }
            } else {
                div { class: "chart-card",
                    h2 { class: "section-title", "Envios por status" }
                    StatusChart { data: counts }
                }

                table { class: "history-table",
                    thead {
                        tr {
                            th { "Data" }
                            th { "Equipe" }
                            th { "Tipo" }
                            th { "Status" }
                            th { "Pessoa" }
                            th { "Motivo" }
                        }
                    }
                    tbody {
                        for row in rows.iter() {
                            {
                                let status_cell =
                                    format!("status-cell {}", status_class(&row.status));
                                rsx! {
                                    tr {
                                        td { "{row.data_envio}" }
                                        td { "{row.equipe}" }
                                        td { "{row.tipo_relatorio}" }
                                        td { class: "{status_cell}", "{row.status}" }
                                        td { "{row.pessoa}" }
                                        td { "{row.motivo_envio}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn status_class(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "sucesso" => "ok",
        "erro" => "err",
        _ => "",
    }
}

/// Fetches rows for the current filter into the page signals.
fn load_history() {
    let filter = HISTORY_FILTER.peek().clone();
    *HISTORY_LOADING.write() = true;
    *HISTORY_ERROR.write() = None;

    wasm_bindgen_futures::spawn_local(async move {
        match client::fetch_history(&filter).await {
            Ok(rows) => {
                *HISTORY_ROWS.write() = rows;
            }
            Err(e) => {
                tracing::error!(
                    "Erro ao consultar histórico ({}): {}",
                    e.category().as_str(),
                    e.user_message()
                );
                *HISTORY_ERROR.write() = Some(e.user_message());
            }
        }
        *HISTORY_LOADING.write() = false;
    });
}
