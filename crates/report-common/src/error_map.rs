//! Classification of request failures into user messages and categories.
//!
//! Mirrors the behavior users already know from the server: HTTP statuses
//! map to a fixed message table, browser-level failures are matched by
//! error name/message patterns, and JSON error bodies are mined for the
//! server's own log lines before falling back to the generic text.

use serde_json::Value;
use thiserror::Error;

/// A failed API interaction, captured with enough context to classify it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Browser-level failure before any HTTP response arrived: rejected
    /// fetch, abort, script error. `name` is the JS error name.
    #[error("{message}")]
    Script { name: String, message: String },

    /// Non-2xx response. The body is captured raw when available so the
    /// server's own error details can be extracted.
    #[error("HTTP {status} {status_text}")]
    Http {
        status: u16,
        status_text: String,
        body: Option<String>,
    },

    /// 2xx response whose JSON payload did not parse or match the
    /// expected shape.
    #[error("resposta inválida: {0}")]
    Payload(String),

    /// The server answered but reported a failure (`success: false`).
    #[error("{0}")]
    Server(String),
}

impl ApiError {
    pub fn category(&self) -> ErrorCategory {
        categorize(self)
    }

    pub fn user_message(&self) -> String {
        user_message(self)
    }

    pub fn suggestions(&self) -> &'static [&'static str] {
        suggestions(self.category())
    }
}

/// Coarse error class, used for technical logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Timeout,
    Cors,
    Parse,
    Http,
    Script,
    Unknown,
}

impl ErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::Network => "NETWORK",
            ErrorCategory::Timeout => "TIMEOUT",
            ErrorCategory::Cors => "CORS",
            ErrorCategory::Parse => "PARSE_ERROR",
            ErrorCategory::Http => "HTTP_ERROR",
            ErrorCategory::Script => "JAVASCRIPT_ERROR",
            ErrorCategory::Unknown => "UNKNOWN",
        }
    }
}

pub fn categorize(error: &ApiError) -> ErrorCategory {
    match error {
        ApiError::Http { .. } => ErrorCategory::Http,
        ApiError::Payload(_) => ErrorCategory::Parse,
        ApiError::Script { name, message } => categorize_text(name, message),
        ApiError::Server(message) => categorize_text("", message),
    }
}

fn categorize_text(name: &str, message: &str) -> ErrorCategory {
    if message.contains("fetch") || message.contains("NetworkError") {
        ErrorCategory::Network
    } else if message.contains("timeout") || name == "AbortError" {
        ErrorCategory::Timeout
    } else if message.contains("CORS") || message.contains("cross-origin") {
        ErrorCategory::Cors
    } else if message.contains("JSON") && name == "SyntaxError" {
        ErrorCategory::Parse
    } else if message.contains("HTTP") || has_three_digit_run(message) {
        ErrorCategory::Http
    } else if name == "ReferenceError" || name == "TypeError" {
        ErrorCategory::Script
    } else {
        ErrorCategory::Unknown
    }
}

fn has_three_digit_run(text: &str) -> bool {
    let mut run = 0;
    for c in text.chars() {
        if c.is_ascii_digit() {
            run += 1;
            if run == 3 {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

pub fn user_message(error: &ApiError) -> String {
    match error {
        ApiError::Script { name, message } => script_message(name, message),
        ApiError::Http {
            status,
            status_text,
            body,
        } => http_error_message(*status, status_text, body.as_deref()),
        ApiError::Payload(_) => {
            "Resposta inválida do servidor: Dados corrompidos recebidos.".to_string()
        }
        ApiError::Server(message) => message.clone(),
    }
}

/// Message for a browser-level error, matched most-specific first.
fn script_message(name: &str, message: &str) -> String {
    if name == "TypeError" && (message.contains("fetch") || message.contains("Failed to fetch")) {
        return "Erro de conexão: Verifique se o servidor está rodando e sua internet \
                está funcionando."
            .to_string();
    }
    if name == "AbortError" || message.contains("timeout") || message.contains("aborted") {
        return "Timeout: O servidor demorou muito para responder. Tente novamente em \
                alguns segundos."
            .to_string();
    }
    if message.contains("CORS")
        || message.contains("cross-origin")
        || message.contains("Access-Control-Allow-Origin")
    {
        return "Erro CORS: Problema de configuração de segurança. Contate o administrador."
            .to_string();
    }
    if name == "NetworkError" || message.contains("NetworkError") {
        return "Erro de rede: Verifique sua conexão com a internet e tente novamente."
            .to_string();
    }
    if name == "SyntaxError" && message.contains("JSON") {
        return "Resposta inválida do servidor: Dados corrompidos recebidos.".to_string();
    }
    if message.contains("404") || message.contains("Not Found") {
        return "Servidor não encontrado: Verifique se a aplicação está rodando na porta \
                correta."
            .to_string();
    }
    if message.contains("SSL") || message.contains("certificate") || message.contains("TLS") {
        return "Erro de segurança SSL: Problema com certificados de segurança.".to_string();
    }
    if name == "ReferenceError" {
        return format!("Erro interno da aplicação: {message}. Recarregue a página.");
    }
    if name == "TypeError" {
        return format!("Erro de tipo: {message}. Recarregue a página e tente novamente.");
    }
    if name == "QuotaExceededError" {
        return "Espaço insuficiente: Limpe o cache do navegador e tente novamente."
            .to_string();
    }
    let technical = if message.is_empty() {
        "Erro desconhecido"
    } else {
        message
    };
    format!("Erro de comunicação: {technical}")
}

/// Fixed message per HTTP status, with a technical fallback line.
pub fn http_status_message(status: u16, status_text: &str) -> String {
    let fixed = match status {
        400 => "Dados inválidos: Verifique o arquivo CSV e as configurações enviadas.",
        401 => "Não autorizado: Problema de autenticação com o servidor.",
        403 => "Acesso negado: Sem permissão para realizar esta operação.",
        404 => "Página não encontrada: Endpoint não existe no servidor.",
        405 => "Método não permitido: Operação não suportada pelo servidor.",
        408 => "Timeout da requisição: Servidor não respondeu a tempo.",
        409 => "Conflito: Operação conflita com o estado atual do servidor.",
        413 => "Arquivo muito grande: Reduza o tamanho do arquivo CSV enviado.",
        415 => "Tipo de arquivo não suportado: Envie apenas arquivos CSV.",
        429 => "Muitas requisições: Aguarde alguns segundos antes de tentar novamente.",
        500 => "Erro interno do servidor: Problema no processamento. Verifique os logs.",
        501 => "Não implementado: Funcionalidade não disponível no servidor.",
        502 => "Bad Gateway: Servidor indisponível ou com problemas de comunicação.",
        503 => "Serviço indisponível: Servidor temporariamente fora do ar.",
        504 => "Gateway timeout: Operação demorou muito para ser processada.",
        505 => "Versão HTTP não suportada: Problema de compatibilidade.",
        _ => {
            let text = if status_text.is_empty() {
                "Status desconhecido"
            } else {
                status_text
            };
            return format!("Erro HTTP {status}: {text}");
        }
    };
    fixed.to_string()
}

/// Full message for a non-2xx response: the status-table message, refined
/// with whatever the server put in its JSON error body.
pub fn http_error_message(status: u16, status_text: &str, body: Option<&str>) -> String {
    let base = http_status_message(status, status_text);
    let Some(body) = body else { return base };
    let Ok(payload) = serde_json::from_str::<Value>(body) else {
        return base;
    };

    // The server's own log lines replace the generic message entirely
    if let Some(details) = log_messages(&payload) {
        return details;
    }
    if let Some(error) = payload.get("error").and_then(Value::as_str) {
        return format!("{base} Detalhes: {error}");
    }
    if let Some(message) = payload.get("message").and_then(Value::as_str) {
        return format!("{base} Detalhes: {message}");
    }
    base
}

/// Joins the error entries of a `log` array, stripping the leading marker
/// the server prefixes to error lines.
fn log_messages(payload: &Value) -> Option<String> {
    let entries = payload.get("log")?.as_array()?;
    let messages: Vec<&str> = entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(text) => Some(text.as_str()),
            Value::Object(map) => {
                if map.get("type").and_then(Value::as_str) == Some("error") {
                    map.get("message").and_then(Value::as_str)
                } else {
                    None
                }
            }
            _ => None,
        })
        .map(|text| text.trim_start_matches("❌").trim_start())
        .filter(|text| !text.is_empty())
        .collect();

    if messages.is_empty() {
        None
    } else {
        Some(messages.join(", "))
    }
}

/// Remediation hints per category.
pub fn suggestions(category: ErrorCategory) -> &'static [&'static str] {
    match category {
        ErrorCategory::Network => &[
            "Verifique sua conexão com a internet",
            "Confirme se o servidor está rodando",
            "Tente recarregar a página",
        ],
        ErrorCategory::Timeout => &[
            "Aguarde alguns segundos e tente novamente",
            "Verifique se o arquivo CSV não é muito grande",
            "Confirme se o servidor não está sobrecarregado",
        ],
        ErrorCategory::Cors => &[
            "Contate o administrador do sistema",
            "Verifique se está acessando pelo domínio correto",
        ],
        ErrorCategory::Parse => &[
            "Recarregue a página",
            "Limpe o cache do navegador",
            "Contate o suporte técnico",
        ],
        ErrorCategory::Http => &[
            "Verifique os dados enviados",
            "Confirme se o arquivo CSV está no formato correto",
            "Consulte os logs do sistema",
        ],
        ErrorCategory::Script => &[
            "Recarregue a página",
            "Limpe o cache do navegador",
            "Tente usar um navegador diferente",
        ],
        ErrorCategory::Unknown => &[
            "Recarregue a página",
            "Tente novamente em alguns minutos",
            "Contate o suporte técnico se persistir",
        ],
    }
}
