//! WhatsApp connection status: wire payload, state parsing and the
//! adaptive poll cadence of the status widget.

use serde::Deserialize;

/// Poll interval while the instance is disconnected or pairing.
pub const FAST_POLL_MS: i32 = 1_000;

/// Poll interval once the instance is connected.
pub const SLOW_POLL_MS: i32 = 5_000;

/// Connection state of the WhatsApp instance, as reported by the status
/// endpoint. Unrecognized values are kept visible instead of being
/// silently treated as closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    Open,
    Connecting,
    #[default]
    Closed,
    Unknown,
}

impl ConnectionState {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "open" => ConnectionState::Open,
            "connecting" => ConnectionState::Connecting,
            "close" | "closed" => ConnectionState::Closed,
            "" => ConnectionState::Closed,
            _ => ConnectionState::Unknown,
        }
    }

    pub fn is_open(self) -> bool {
        self == ConnectionState::Open
    }

    pub fn label(self) -> &'static str {
        match self {
            ConnectionState::Open => "Conectado",
            ConnectionState::Connecting => "Conectando...",
            ConnectionState::Closed => "Desconectado",
            ConnectionState::Unknown => "Status desconhecido",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ConnectionState::Open => "connected",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Closed | ConnectionState::Unknown => "disconnected",
        }
    }
}

/// How often to re-check the status endpoint for a given state.
pub fn poll_interval_ms(state: ConnectionState) -> i32 {
    if state.is_open() {
        SLOW_POLL_MS
    } else {
        FAST_POLL_MS
    }
}

/// The pairing QR arrives either as a full data URL or as bare base64;
/// normalize to something an `img` tag accepts.
pub fn qr_data_url(raw: &str) -> String {
    if raw.starts_with("data:") {
        raw.to_string()
    } else {
        format!("data:image/png;base64,{raw}")
    }
}

/// Payload of `GET /whatsapp/status`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct WhatsappStatus {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub qrcode: Option<String>,
    #[serde(default)]
    pub profile: Option<WhatsappProfile>,
}

impl WhatsappStatus {
    pub fn connection_state(&self) -> ConnectionState {
        ConnectionState::parse(&self.state)
    }
}

/// Profile info shown while connected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct WhatsappProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}
