#![allow(non_snake_case)]

use dioxus::prelude::*;

mod api;
mod prefs;
mod state;
mod views;

use state::{Page, ACTIVE_PAGE};
use views::history::HistoryPage;
use views::upload::UploadPage;
use views::whatsapp::ConnectionBadge;

fn main() {
    dioxus::logger::initialize_default();
    launch(App);
}

#[component]
fn App() -> Element {
    use_effect(|| {
        api::init();
    });

    let page = *ACTIVE_PAGE.read();

    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }

        div { class: "app-shell",
            header { class: "app-header",
                h1 { class: "app-title", "Envio de Relatórios" }

                nav { class: "page-tabs",
                    PageTab { page: Page::Upload, label: "Envio" }
                    PageTab { page: Page::History, label: "Histórico" }
                }

                ConnectionBadge {}
            }

            main { class: "app-content",
                {
                    match page {
                        Page::Upload => rsx! { UploadPage {} },
                        Page::History => rsx! { HistoryPage {} },
                    }
                }
            }
        }
    }
}

#[component]
fn PageTab(page: Page, label: String) -> Element {
    let active = *ACTIVE_PAGE.read() == page;
    let class = if active { "page-tab active" } else { "page-tab" };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                *ACTIVE_PAGE.write() = page;
            },
            "{label}"
        }
    }
}
