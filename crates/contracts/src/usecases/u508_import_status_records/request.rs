use serde::{Deserialize, Serialize};

fn default_id_column() -> String {
    "id".to_string()
}

fn default_title_column() -> String {
    "title".to_string()
}

fn default_status_column() -> String {
    "status".to_string()
}

/// Запрос на импорт записей со статусами из CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    /// Источник данных (имя файла, интеграция), попадает в лог и прогресс
    pub source: String,

    /// Колонка с идентификатором записи. Если колонки нет, используется номер строки.
    #[serde(default = "default_id_column")]
    pub id_column: String,

    #[serde(default = "default_title_column")]
    pub title_column: String,

    /// Колонка с сырым статусом
    #[serde(default = "default_status_column")]
    pub status_column: String,
}

impl ImportRequest {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            id_column: default_id_column(),
            title_column: default_title_column(),
            status_column: default_status_column(),
        }
    }
}
