use serde::{Deserialize, Serialize};

use crate::enums::CanonicalStatus;
use crate::shared::status::{RawStatus, StatusRanked, StatusResolver};

/// Импортированная запись с нормализованным статусом
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub id: String,
    pub title: String,
    /// Значение статуса как пришло из источника
    #[serde(default)]
    pub raw_status: RawStatus,
    pub status: CanonicalStatus,
    pub rank: u32,
    /// Номер строки данных в источнике (с 1, без заголовка)
    pub row: usize,
}

impl StatusRanked for StatusRecord {
    fn raw_status(&self) -> RawStatus {
        self.raw_status.clone()
    }

    /// Статус фиксируется при импорте
    fn resolved_status(&self, _resolver: &StatusResolver) -> CanonicalStatus {
        self.status
    }

    fn resolved_rank(&self, _resolver: &StatusResolver) -> u32 {
        self.rank
    }
}
