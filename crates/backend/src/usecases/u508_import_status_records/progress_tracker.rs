use contracts::usecases::u508_import_status_records::{ImportProgress, ImportStatus};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Трекер прогресса импорта статусов (in-memory)
#[derive(Clone)]
pub struct ProgressTracker {
    sessions: Arc<RwLock<HashMap<String, ImportProgress>>>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, ImportProgress>> {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, ImportProgress>> {
        self.sessions.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create_session(&self, session_id: String, source: String) {
        self.write()
            .insert(session_id.clone(), ImportProgress::new(session_id, source));
    }

    pub fn get_progress(&self, session_id: &str) -> Option<ImportProgress> {
        self.read().get(session_id).cloned()
    }

    pub fn set_total(&self, session_id: &str, total: i32) {
        if let Some(p) = self.write().get_mut(session_id) {
            p.total = Some(total);
            p.updated_at = chrono::Utc::now();
        }
    }

    pub fn update_progress(&self, session_id: &str, processed: i32, imported: i32, unrecognized: i32) {
        if let Some(p) = self.write().get_mut(session_id) {
            p.processed = processed;
            p.imported = imported;
            p.unrecognized = unrecognized;
            p.updated_at = chrono::Utc::now();
        }
    }

    pub fn add_error(&self, session_id: &str, message: String) {
        if let Some(p) = self.write().get_mut(session_id) {
            p.error_messages.push(message);
            p.errors += 1;
            p.updated_at = chrono::Utc::now();
        }
    }

    pub fn complete_session(&self, session_id: &str, status: ImportStatus) {
        if let Some(p) = self.write().get_mut(session_id) {
            p.status = status;
            p.completed_at = Some(chrono::Utc::now());
            p.updated_at = chrono::Utc::now();
        }
    }

    pub fn cleanup_old_sessions(&self, max_age_hours: i64) {
        let now = chrono::Utc::now();
        self.write().retain(|_, p| {
            if let Some(completed_at) = p.completed_at {
                (now - completed_at).num_hours() < max_age_hours
            } else {
                true
            }
        });
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}
