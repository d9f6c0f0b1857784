use report_common::types::*;

// ============================================================================
// Log entries
// ============================================================================

#[test]
fn log_entry_from_object() {
    let entry: LogEntry =
        serde_json::from_str(r#"{"type": "success", "message": "Mensagem enviada para LOJA 12"}"#)
            .unwrap();
    assert_eq!(entry.kind, LogKind::Success);
    assert_eq!(entry.message, "Mensagem enviada para LOJA 12");
}

#[test]
fn log_entry_from_bare_string() {
    let entry: LogEntry = serde_json::from_str(r#""Nenhum arquivo CSV enviado.""#).unwrap();
    assert_eq!(entry.kind, LogKind::Info);
    assert_eq!(entry.message, "Nenhum arquivo CSV enviado.");
}

#[test]
fn log_array_accepts_mixed_shapes() {
    let log: Vec<LogEntry> = serde_json::from_str(
        r#"[{"type": "warning", "message": "Números não encontrados"}, "texto solto"]"#,
    )
    .unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].kind, LogKind::Warning);
    assert_eq!(log[1].kind, LogKind::Info);
}

#[test]
fn log_entry_serializes_as_object() {
    let entry = LogEntry {
        kind: LogKind::Error,
        message: "falhou".to_string(),
    };
    let json = serde_json::to_string(&entry).unwrap();
    assert_eq!(json, r#"{"type":"error","message":"falhou"}"#);
}

// ============================================================================
// Task status payloads
// ============================================================================

#[test]
fn task_status_done_carries_results() {
    let payload = r#"{
        "success": true,
        "status": "done",
        "log": [{"type": "success", "message": "ok"}],
        "stats": {"total": 3, "equipes": 2, "sucesso": 2, "erro": 1, "pendencias": 1},
        "debug": "[{\"Nome\": \"A\"}]",
        "nome_arquivo_log": "processamento.log"
    }"#;
    let status: TaskStatusResponse = serde_json::from_str(payload).unwrap();
    assert_eq!(status.status, TaskState::Done);
    assert_eq!(status.log.len(), 1);
    let stats = status.stats.unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.pendencias, 1);
    assert_eq!(status.nome_arquivo_log.as_deref(), Some("processamento.log"));
}

#[test]
fn task_status_queued_is_minimal() {
    let status: TaskStatusResponse =
        serde_json::from_str(r#"{"success": true, "status": "queued"}"#).unwrap();
    assert_eq!(status.status, TaskState::Queued);
    assert!(status.log.is_empty());
    assert!(status.stats.is_none());
    assert!(status.error.is_none());
}

#[test]
fn task_status_error_carries_message() {
    let status: TaskStatusResponse = serde_json::from_str(
        r#"{"success": false, "status": "error", "error": "Planilha sem coluna Equipe"}"#,
    )
    .unwrap();
    assert_eq!(status.status, TaskState::Error);
    assert_eq!(status.error.as_deref(), Some("Planilha sem coluna Equipe"));
}

#[test]
fn stats_default_missing_counters_to_zero() {
    let stats: ProcessStats = serde_json::from_str(r#"{"total": 5}"#).unwrap();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.erro, 0);
    assert_eq!(stats.pendencias, 0);
}

// ============================================================================
// Upload / teams / history payloads
// ============================================================================

#[test]
fn upload_response_with_task_id() {
    let payload: UploadResponse = serde_json::from_str(
        r#"{"success": true, "task_id": "a1b2c3", "message": "Processamento agendado"}"#,
    )
    .unwrap();
    assert!(payload.success);
    assert_eq!(payload.task_id.as_deref(), Some("a1b2c3"));
}

#[test]
fn teams_response_defaults() {
    let payload: TeamsResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert!(payload.equipes.is_empty());
    assert!(payload.error.is_none());
}

#[test]
fn history_row_tolerates_missing_detail_fields() {
    let row: HistoryRow = serde_json::from_str(
        r#"{"data_envio": "01/08/2026 10:00:00", "equipe": "NORTE", "tipo_relatorio": "Auditoria", "status": "sucesso"}"#,
    )
    .unwrap();
    assert_eq!(row.equipe, "NORTE");
    assert_eq!(row.pessoa, "");
    assert_eq!(row.motivo_envio, "");
}

#[test]
fn ack_response_defaults_to_failure() {
    let ack: AckResponse = serde_json::from_str("{}").unwrap();
    assert!(!ack.success);
}

// ============================================================================
// Report types
// ============================================================================

#[test]
fn report_type_labels_round_trip() {
    for tipo in ReportType::ALL {
        assert_eq!(ReportType::parse(tipo.as_str()), Some(tipo));
    }
}

#[test]
fn report_type_parse_trims_whitespace() {
    assert_eq!(ReportType::parse(" Auditoria "), Some(ReportType::Auditoria));
}

#[test]
fn report_type_parse_rejects_unknown() {
    assert_eq!(ReportType::parse("auditoria"), None);
    assert_eq!(ReportType::parse("Relatório X"), None);
}

#[test]
fn report_type_serializes_with_accent() {
    let json = serde_json::to_string(&ReportType::Ocorrencias).unwrap();
    assert_eq!(json, "\"Ocorrências\"");
    let back: ReportType = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ReportType::Ocorrencias);
}

#[test]
fn report_type_defaults_to_auditoria() {
    assert_eq!(ReportType::default(), ReportType::Auditoria);
}

#[test]
fn format_errors_mention_the_selected_type() {
    for tipo in ReportType::ALL {
        assert!(tipo.format_error().contains(tipo.as_str()));
    }
}
