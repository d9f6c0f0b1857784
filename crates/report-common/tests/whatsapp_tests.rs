use report_common::whatsapp::*;

// ============================================================================
// State parsing
// ============================================================================

#[test]
fn parse_is_case_insensitive() {
    assert_eq!(ConnectionState::parse("OPEN"), ConnectionState::Open);
    assert_eq!(ConnectionState::parse("open"), ConnectionState::Open);
    assert_eq!(ConnectionState::parse("Connecting"), ConnectionState::Connecting);
}

#[test]
fn parse_trims_whitespace() {
    assert_eq!(ConnectionState::parse("  open  "), ConnectionState::Open);
}

#[test]
fn parse_accepts_both_close_spellings() {
    assert_eq!(ConnectionState::parse("close"), ConnectionState::Closed);
    assert_eq!(ConnectionState::parse("closed"), ConnectionState::Closed);
}

#[test]
fn parse_empty_means_closed() {
    assert_eq!(ConnectionState::parse(""), ConnectionState::Closed);
}

#[test]
fn parse_keeps_unrecognized_states_distinct() {
    assert_eq!(ConnectionState::parse("qrReadFail"), ConnectionState::Unknown);
}

#[test]
fn only_open_counts_as_connected() {
    assert!(ConnectionState::Open.is_open());
    assert!(!ConnectionState::Connecting.is_open());
    assert!(!ConnectionState::Closed.is_open());
    assert!(!ConnectionState::Unknown.is_open());
}

// ============================================================================
// Poll cadence
// ============================================================================

#[test]
fn connected_polls_slowly() {
    assert_eq!(poll_interval_ms(ConnectionState::Open), SLOW_POLL_MS);
}

#[test]
fn disconnected_polls_fast() {
    assert_eq!(poll_interval_ms(ConnectionState::Closed), FAST_POLL_MS);
    assert_eq!(poll_interval_ms(ConnectionState::Connecting), FAST_POLL_MS);
    assert_eq!(poll_interval_ms(ConnectionState::Unknown), FAST_POLL_MS);
}

// ============================================================================
// QR normalization
// ============================================================================

#[test]
fn bare_base64_gets_the_png_prefix() {
    assert_eq!(
        qr_data_url("iVBORw0KGgo="),
        "data:image/png;base64,iVBORw0KGgo="
    );
}

#[test]
fn existing_data_url_is_untouched() {
    let url = "data:image/png;base64,iVBORw0KGgo=";
    assert_eq!(qr_data_url(url), url);
}

// ============================================================================
// Status payload
// ============================================================================

#[test]
fn status_with_profile() {
    let status: WhatsappStatus = serde_json::from_str(
        r#"{"success": true, "state": "open", "profile": {"name": "Relatórios", "number": "5511999990000"}}"#,
    )
    .unwrap();
    assert_eq!(status.connection_state(), ConnectionState::Open);
    let profile = status.profile.unwrap();
    assert_eq!(profile.name.as_deref(), Some("Relatórios"));
    assert!(status.qrcode.is_none());
}

#[test]
fn status_while_pairing_carries_qr() {
    let status: WhatsappStatus =
        serde_json::from_str(r#"{"success": true, "state": "connecting", "qrcode": "iVBORw0KGgo="}"#)
            .unwrap();
    assert_eq!(status.connection_state(), ConnectionState::Connecting);
    assert_eq!(status.qrcode.as_deref(), Some("iVBORw0KGgo="));
}

#[test]
fn status_defaults_when_fields_missing() {
    let status: WhatsappStatus = serde_json::from_str("{}").unwrap();
    assert_eq!(status.connection_state(), ConnectionState::Closed);
    assert!(status.profile.is_none());
}
