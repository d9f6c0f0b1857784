use serde::{Deserialize, Deserializer, Serialize};

/// Severity of a processing log entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl LogKind {
    pub fn css_class(self) -> &'static str {
        match self {
            LogKind::Info => "info",
            LogKind::Success => "success",
            LogKind::Warning => "warning",
            LogKind::Error => "error",
        }
    }
}

/// One entry of the processing log returned by the task endpoint.
///
/// The backend emits both bare strings and `{type, message}` objects in the
/// same array; bare strings are treated as plain info lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    #[serde(rename = "type")]
    pub kind: LogKind,
    pub message: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireLogEntry {
    Full {
        #[serde(rename = "type")]
        kind: LogKind,
        message: String,
    },
    Text(String),
}

impl<'de> Deserialize<'de> for LogEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match WireLogEntry::deserialize(deserializer)? {
            WireLogEntry::Full { kind, message } => LogEntry { kind, message },
            WireLogEntry::Text(message) => LogEntry {
                kind: LogKind::Info,
                message,
            },
        })
    }
}

/// Dispatch counters reported when a task finishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub equipes: u32,
    #[serde(default)]
    pub sucesso: u32,
    #[serde(default)]
    pub erro: u32,
    #[serde(default)]
    pub pendencias: u32,
}

/// Lifecycle of a server-side task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Queued,
    Running,
    Done,
    Error,
}

/// Payload of `GET /status/{task_id}`.
///
/// Result fields are only present once the task reaches `done`; `error`
/// only once it reaches `error`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TaskStatusResponse {
    #[serde(default)]
    pub success: bool,
    pub status: TaskState,
    #[serde(default)]
    pub log: Vec<LogEntry>,
    #[serde(default)]
    pub stats: Option<ProcessStats>,
    #[serde(default)]
    pub debug: Option<String>,
    #[serde(default)]
    pub nome_arquivo_log: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Result of a finished task, as handed to the views.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskResult {
    pub log: Vec<LogEntry>,
    pub stats: ProcessStats,
    pub debug: Option<String>,
    pub nome_arquivo_log: Option<String>,
}

/// Payload of `POST /enviar`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Payload of `POST /equipes`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub equipes: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One row of the dispatch history table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRow {
    #[serde(default)]
    pub data_envio: String,
    #[serde(default)]
    pub equipe: String,
    #[serde(default)]
    pub tipo_relatorio: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub pessoa: String,
    #[serde(default)]
    pub motivo_envio: String,
}

/// Payload of `GET /historico/dados`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub dados: Vec<HistoryRow>,
}

/// Bare `{success}` acknowledgement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct AckResponse {
    #[serde(default)]
    pub success: bool,
}

/// Report flavor selected on the upload form. The labels double as the
/// wire values the backend expects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportType {
    #[default]
    Auditoria,
    #[serde(rename = "Ocorrências")]
    Ocorrencias,
    Assinaturas,
}

impl ReportType {
    pub const ALL: [ReportType; 3] = [
        ReportType::Auditoria,
        ReportType::Ocorrencias,
        ReportType::Assinaturas,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReportType::Auditoria => "Auditoria",
            ReportType::Ocorrencias => "Ocorrências",
            ReportType::Assinaturas => "Assinaturas",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw.trim())
    }

    /// Message shown when team extraction rejects the file for this type.
    pub fn format_error(self) -> &'static str {
        match self {
            ReportType::Ocorrencias => {
                "O tipo de relatório selecionado foi 'Ocorrências', mas o arquivo \
                 não contém as colunas esperadas ('Motivo', 'Ação pendente', etc)."
            }
            ReportType::Auditoria => {
                "O tipo de relatório selecionado foi 'Auditoria', mas o arquivo \
                 está em formato incorreto."
            }
            ReportType::Assinaturas => {
                "O tipo de relatório selecionado foi 'Assinaturas', mas o arquivo \
                 está em formato incorreto."
            }
        }
    }
}
