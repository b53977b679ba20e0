use serde::{Deserialize, Serialize};

use crate::enums::CanonicalStatus;
use crate::shared::status::StatusCounts;

/// Строка доски статусов (проекция p909)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBoardRowDto {
    pub id: String,
    pub title: String,
    pub status: CanonicalStatus,
    pub status_label: String,
    pub rank: u32,
    /// Исходная метка статуса в текстовом виде, None если статуса не было
    pub raw_status: Option<String>,
}

/// Запрос на построение доски статусов
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusBoardRequest {
    /// Оставить только эти статусы; пустой список - все
    #[serde(default)]
    pub statuses: Vec<CanonicalStatus>,
    #[serde(default)]
    pub sort_desc: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBoardDto {
    pub rows: Vec<StatusBoardRowDto>,
    /// Счетчики по всем записям, до фильтрации
    pub counts: StatusCounts,
    pub total: usize,
}
