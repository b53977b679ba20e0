use serde::{Deserialize, Serialize};

use super::progress::ImportStatus;
use super::record::StatusRecord;

/// Результат импорта: записи в порядке источника и счетчики
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    pub session_id: String,
    pub status: ImportStatus,
    pub records: Vec<StatusRecord>,
    pub imported: usize,
    pub skipped: usize,
    pub unrecognized: usize,
}
