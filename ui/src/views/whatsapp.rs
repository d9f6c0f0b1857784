#![allow(non_snake_case)]

use dioxus::prelude::*;
use report_common::whatsapp::qr_data_url;

use crate::api::whatsapp;
use crate::state::WHATSAPP_STATUS;

/// Header widget: connection dot, pairing QR and logout.
#[component]
pub fn ConnectionBadge() -> Element {
    let status = WHATSAPP_STATUS.read().clone();
    let state = status
        .as_ref()
        .map(|s| s.connection_state())
        .unwrap_or_default();

    let profile_text = status
        .as_ref()
        .and_then(|s| s.profile.as_ref())
        .map(|p| {
            match (p.name.as_deref(), p.number.as_deref()) {
                (Some(name), Some(number)) => format!("{name} ({number})"),
                (Some(name), None) => name.to_string(),
                (None, Some(number)) => number.to_string(),
                (None, None) => String::new(),
            }
        })
        .filter(|text| !text.is_empty());

    let qr = status
        .as_ref()
        .filter(|_| !state.is_open())
        .and_then(|s| s.qrcode.as_deref())
        .map(qr_data_url);

    let indicator_class = format!("status-indicator {}", state.css_class());
    let state_label = state.label();

    rsx! {
        div { class: "whatsapp-widget",
            div { class: "{indicator_class}",
                span { class: "status-dot" }
                span { class: "status-text", "{state_label}" }
            }

            if state.is_open() {
                if let Some(text) = profile_text.as_ref() {
                    span { class: "profile-info", "{text}" }
                }
                button {
                    class: "logout-btn",
                    onclick: move |_| whatsapp::logout(),
                    "Desconectar"
                }
            } else if let Some(qr) = qr.as_ref() {
                div { class: "qr-popover",
                    img {
                        class: "qr-image",
                        src: "{qr}",
                        alt: "QR code para conectar o WhatsApp",
                    }
                    span { class: "qr-hint", "Escaneie para conectar" }
                }
            }
        }
    }
}
