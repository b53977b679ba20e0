use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Текущий прогресс импорта статусов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportProgress {
    pub session_id: String,
    pub source: String,
    pub status: ImportStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,

    pub processed: i32,
    pub total: Option<i32>,
    pub imported: i32,
    /// Записи, статус которых не распознан (Unknown)
    pub unrecognized: i32,
    pub errors: i32,

    /// Список ошибок
    pub error_messages: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ImportStatus {
    /// Импорт запущен
    Running,
    /// Импорт завершен успешно
    Completed,
    /// Импорт завершен, часть строк пропущена
    CompletedWithErrors,
    /// Импорт провален
    Failed,
}

impl ImportProgress {
    pub fn new(session_id: String, source: String) -> Self {
        Self {
            session_id,
            source,
            status: ImportStatus::Running,
            started_at: Utc::now(),
            completed_at: None,
            updated_at: Utc::now(),
            processed: 0,
            total: None,
            imported: 0,
            unrecognized: 0,
            errors: 0,
            error_messages: Vec::new(),
        }
    }
}
