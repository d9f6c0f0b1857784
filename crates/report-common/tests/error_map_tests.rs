use report_common::error_map::*;

fn script(name: &str, message: &str) -> ApiError {
    ApiError::Script {
        name: name.to_string(),
        message: message.to_string(),
    }
}

fn http(status: u16, status_text: &str, body: Option<&str>) -> ApiError {
    ApiError::Http {
        status,
        status_text: status_text.to_string(),
        body: body.map(str::to_string),
    }
}

// ============================================================================
// HTTP status table
// ============================================================================

#[test]
fn status_message_bad_request() {
    assert_eq!(
        http_status_message(400, "Bad Request"),
        "Dados inválidos: Verifique o arquivo CSV e as configurações enviadas."
    );
}

#[test]
fn status_message_payload_too_large() {
    assert_eq!(
        http_status_message(413, ""),
        "Arquivo muito grande: Reduza o tamanho do arquivo CSV enviado."
    );
}

#[test]
fn status_message_server_error() {
    assert_eq!(
        http_status_message(500, "Internal Server Error"),
        "Erro interno do servidor: Problema no processamento. Verifique os logs."
    );
}

#[test]
fn status_message_unknown_uses_status_text() {
    assert_eq!(
        http_status_message(418, "I'm a teapot"),
        "Erro HTTP 418: I'm a teapot"
    );
}

#[test]
fn status_message_unknown_without_text() {
    assert_eq!(
        http_status_message(599, ""),
        "Erro HTTP 599: Status desconhecido"
    );
}

// ============================================================================
// Error body mining
// ============================================================================

#[test]
fn body_log_entry_replaces_base_message() {
    let body = r#"{"success": false, "log": [{"type": "error", "message": "❌ Formato inválido. Envie um arquivo .csv"}]}"#;
    assert_eq!(
        http_error_message(400, "Bad Request", Some(body)),
        "Formato inválido. Envie um arquivo .csv"
    );
}

#[test]
fn body_log_string_entries_are_joined() {
    let body = r#"{"log": ["❌ Nenhum arquivo CSV enviado.", "❌ Tente novamente."]}"#;
    assert_eq!(
        http_error_message(400, "", Some(body)),
        "Nenhum arquivo CSV enviado., Tente novamente."
    );
}

#[test]
fn body_log_ignores_non_error_objects() {
    let body = r#"{"log": [{"type": "info", "message": "processando"}, {"type": "error", "message": "falhou"}]}"#;
    assert_eq!(http_error_message(500, "", Some(body)), "falhou");
}

#[test]
fn body_without_error_entries_falls_back_to_error_field() {
    let body = r#"{"log": [{"type": "info", "message": "ok"}], "error": "Arquivo CSV inválido"}"#;
    assert_eq!(
        http_error_message(400, "Bad Request", Some(body)),
        "Dados inválidos: Verifique o arquivo CSV e as configurações enviadas. \
         Detalhes: Arquivo CSV inválido"
    );
}

#[test]
fn body_message_field_is_appended() {
    let body = r#"{"message": "tabela bloqueada"}"#;
    assert_eq!(
        http_error_message(409, "Conflict", Some(body)),
        "Conflito: Operação conflita com o estado atual do servidor. \
         Detalhes: tabela bloqueada"
    );
}

#[test]
fn invalid_json_body_keeps_base_message() {
    let message = http_error_message(502, "Bad Gateway", Some("<html>nginx</html>"));
    assert_eq!(
        message,
        "Bad Gateway: Servidor indisponível ou com problemas de comunicação."
    );
}

#[test]
fn missing_body_keeps_base_message() {
    assert_eq!(
        http_error_message(503, "", None),
        "Serviço indisponível: Servidor temporariamente fora do ar."
    );
}

// ============================================================================
// Script error messages
// ============================================================================

#[test]
fn failed_fetch_maps_to_connection_error() {
    let error = script("TypeError", "Failed to fetch");
    assert_eq!(
        error.user_message(),
        "Erro de conexão: Verifique se o servidor está rodando e sua internet \
         está funcionando."
    );
}

#[test]
fn abort_maps_to_timeout() {
    let error = script("AbortError", "The user aborted a request.");
    assert!(error.user_message().starts_with("Timeout:"));
}

#[test]
fn cors_is_detected_in_message() {
    let error = script("TypeError", "blocked by CORS policy");
    assert!(error.user_message().starts_with("Erro CORS:"));
}

#[test]
fn json_syntax_error_maps_to_invalid_response() {
    let error = script("SyntaxError", "Unexpected token < in JSON at position 0");
    assert_eq!(
        error.user_message(),
        "Resposta inválida do servidor: Dados corrompidos recebidos."
    );
}

#[test]
fn reference_error_includes_original_message() {
    let error = script("ReferenceError", "grafico is not defined");
    assert_eq!(
        error.user_message(),
        "Erro interno da aplicação: grafico is not defined. Recarregue a página."
    );
}

#[test]
fn plain_type_error_maps_to_type_message() {
    let error = script("TypeError", "x.foo is not a function");
    assert_eq!(
        error.user_message(),
        "Erro de tipo: x.foo is not a function. Recarregue a página e tente novamente."
    );
}

#[test]
fn quota_error_maps_to_storage_message() {
    let error = script("QuotaExceededError", "exceeded the quota");
    assert!(error.user_message().starts_with("Espaço insuficiente:"));
}

#[test]
fn unrecognized_error_gets_generic_prefix() {
    let error = script("SomeError", "algo estranho");
    assert_eq!(error.user_message(), "Erro de comunicação: algo estranho");
}

#[test]
fn empty_message_uses_unknown_placeholder() {
    let error = script("", "");
    assert_eq!(error.user_message(), "Erro de comunicação: Erro desconhecido");
}

#[test]
fn payload_error_reads_as_invalid_response() {
    let error = ApiError::Payload("missing field `status`".to_string());
    assert_eq!(
        error.user_message(),
        "Resposta inválida do servidor: Dados corrompidos recebidos."
    );
}

#[test]
fn server_error_message_is_shown_verbatim() {
    let error = ApiError::Server("Tarefa não encontrada".to_string());
    assert_eq!(error.user_message(), "Tarefa não encontrada");
}

// ============================================================================
// Categorization
// ============================================================================

#[test]
fn categorize_network() {
    assert_eq!(
        script("TypeError", "Failed to fetch").category(),
        ErrorCategory::Network
    );
}

#[test]
fn categorize_timeout() {
    assert_eq!(
        script("AbortError", "aborted").category(),
        ErrorCategory::Timeout
    );
}

#[test]
fn categorize_cors() {
    assert_eq!(
        script("Error", "cross-origin request blocked").category(),
        ErrorCategory::Cors
    );
}

#[test]
fn categorize_parse() {
    assert_eq!(
        script("SyntaxError", "Unexpected end of JSON input").category(),
        ErrorCategory::Parse
    );
}

#[test]
fn categorize_http_variant() {
    assert_eq!(http(500, "", None).category(), ErrorCategory::Http);
}

#[test]
fn categorize_server_message_with_status_digits() {
    let error = ApiError::Server("Erro Evolution API: 500 - internal".to_string());
    assert_eq!(error.category(), ErrorCategory::Http);
}

#[test]
fn categorize_script_error() {
    assert_eq!(
        script("ReferenceError", "x is not defined").category(),
        ErrorCategory::Script
    );
}

#[test]
fn categorize_unknown() {
    let error = ApiError::Server("algo deu errado".to_string());
    assert_eq!(error.category(), ErrorCategory::Unknown);
}

#[test]
fn network_takes_precedence_over_script() {
    // TypeError mentioning fetch is connectivity, not a code bug
    assert_eq!(
        script("TypeError", "fetch failed").category(),
        ErrorCategory::Network
    );
}

// ============================================================================
// Suggestions
// ============================================================================

#[test]
fn every_category_has_suggestions() {
    let categories = [
        ErrorCategory::Network,
        ErrorCategory::Timeout,
        ErrorCategory::Cors,
        ErrorCategory::Parse,
        ErrorCategory::Http,
        ErrorCategory::Script,
        ErrorCategory::Unknown,
    ];
    for category in categories {
        assert!(
            !suggestions(category).is_empty(),
            "no suggestions for {:?}",
            category
        );
    }
}

#[test]
fn category_labels_are_stable() {
    assert_eq!(ErrorCategory::Network.as_str(), "NETWORK");
    assert_eq!(ErrorCategory::Parse.as_str(), "PARSE_ERROR");
    assert_eq!(ErrorCategory::Script.as_str(), "JAVASCRIPT_ERROR");
}
