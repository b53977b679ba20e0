use super::processors::records::{parse_records_csv, CsvRow};
use super::progress_tracker::ProgressTracker;
use crate::shared::status_registry::StatusRegistry;
use anyhow::Result;
use contracts::shared::status::CanonicalStatus;
use contracts::usecases::u508_import_status_records::{
    ImportProgress, ImportRequest, ImportResponse, ImportStatus, StatusRecord,
};
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

/// Завершенные сессии старше этого срока удаляются при следующем импорте
const DEFAULT_SESSION_RETENTION_HOURS: i64 = 24;

/// Executor для UseCase импорта записей со статусами
pub struct ImportExecutor {
    registry: Arc<StatusRegistry>,
    pub progress_tracker: Arc<ProgressTracker>,
    session_retention_hours: i64,
}

impl ImportExecutor {
    pub fn new(registry: Arc<StatusRegistry>, progress_tracker: Arc<ProgressTracker>) -> Self {
        Self {
            registry,
            progress_tracker,
            session_retention_hours: DEFAULT_SESSION_RETENTION_HOURS,
        }
    }

    pub fn with_session_retention(mut self, hours: i64) -> Self {
        self.session_retention_hours = hours;
        self
    }

    /// Получить прогресс сессии
    pub fn get_progress(&self, session_id: &str) -> Option<ImportProgress> {
        self.progress_tracker.get_progress(session_id)
    }

    /// Прочитать CSV файл и импортировать его
    pub async fn import_file(&self, path: &Path, request: &ImportRequest) -> Result<ImportResponse> {
        let csv_text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {}", path.display(), e))?;
        self.import_csv_text(request, &csv_text)
    }

    /// Импорт из CSV текста. Записи возвращаются в порядке источника.
    pub fn import_csv_text(&self, request: &ImportRequest, csv_text: &str) -> Result<ImportResponse> {
        self.progress_tracker
            .cleanup_old_sessions(self.session_retention_hours);

        let session_id = Uuid::new_v4().to_string();
        self.progress_tracker
            .create_session(session_id.clone(), request.source.clone());

        tracing::info!("Starting status import from {} (session {})", request.source, session_id);

        let rows = match parse_records_csv(csv_text, request) {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!("Status import from {} failed: {}", request.source, e);
                self.progress_tracker
                    .add_error(&session_id, format!("Import failed: {}", e));
                self.progress_tracker
                    .complete_session(&session_id, ImportStatus::Failed);
                return Err(e);
            }
        };

        let total = rows.len() as i32;
        self.progress_tracker.set_total(&session_id, total);

        // Один снимок резолвера на весь импорт
        let resolver = self.registry.current();

        let mut records = Vec::with_capacity(rows.len());
        let mut skipped = 0usize;
        let mut unrecognized = 0usize;

        for (idx, row) in rows.into_iter().enumerate() {
            match row {
                CsvRow::Parsed {
                    row,
                    id,
                    title,
                    raw_status,
                } => {
                    let status = resolver.normalize(raw_status.clone());
                    if status == CanonicalStatus::Unknown {
                        unrecognized += 1;
                        tracing::debug!("Record {} has unrecognized status {:?}", id, raw_status);
                    }

                    records.push(StatusRecord {
                        id,
                        title,
                        rank: resolver.rank(status),
                        raw_status,
                        status,
                        row,
                    });
                }
                CsvRow::Skipped { row, reason } => {
                    skipped += 1;
                    self.progress_tracker
                        .add_error(&session_id, format!("Row {}: {}", row, reason));
                }
            }

            self.progress_tracker.update_progress(
                &session_id,
                idx as i32 + 1,
                records.len() as i32,
                unrecognized as i32,
            );
        }

        let final_status = if skipped > 0 {
            ImportStatus::CompletedWithErrors
        } else {
            ImportStatus::Completed
        };
        self.progress_tracker.complete_session(&session_id, final_status);

        tracing::info!(
            "Status import from {} finished: imported={}, unrecognized={}, skipped={}",
            request.source,
            records.len(),
            unrecognized,
            skipped
        );

        Ok(ImportResponse {
            session_id,
            status: final_status,
            imported: records.len(),
            records,
            skipped,
            unrecognized,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::StatusConfig;
    use contracts::shared::status::RawStatus;
    use maplit::btreemap;
    use std::io::Write;

    fn executor(registry: StatusRegistry) -> ImportExecutor {
        ImportExecutor::new(Arc::new(registry), Arc::new(ProgressTracker::new()))
    }

    const CSV: &str = "id,title,status\n\
                       1,Ship release,Done\n\
                       2,Plan sprint,To Do\n\
                       3,Review PR, In Progress \n\
                       4,Old ticket,deleted\n\
                       5,Blank,\n";

    #[test]
    fn test_import_normalizes_statuses() {
        let executor = executor(StatusRegistry::default());
        let response = executor.import_csv_text(&ImportRequest::new("tickets.csv"), CSV).unwrap();

        let statuses: Vec<CanonicalStatus> = response.records.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                CanonicalStatus::Completed,
                CanonicalStatus::Unknown,
                CanonicalStatus::Active,
                CanonicalStatus::Archived,
                CanonicalStatus::Unknown,
            ]
        );
        assert_eq!(response.records[2].rank, 0);
        assert_eq!(response.records[1].raw_status, RawStatus::Text("To Do".into()));
        assert_eq!(response.imported, 5);
        assert_eq!(response.unrecognized, 2);
        assert_eq!(response.skipped, 0);
        assert_eq!(response.status, ImportStatus::Completed);

        let progress = executor.get_progress(&response.session_id).unwrap();
        assert_eq!(progress.status, ImportStatus::Completed);
        assert_eq!(progress.processed, 5);
        assert_eq!(progress.unrecognized, 2);
    }

    #[test]
    fn test_import_uses_current_registry() {
        let registry = StatusRegistry::default();
        registry
            .reload(&StatusConfig {
                aliases: btreemap! { "to do".to_string() => "pending".to_string() },
                ..Default::default()
            })
            .unwrap();

        let response = executor(registry)
            .import_csv_text(&ImportRequest::new("tickets.csv"), CSV)
            .unwrap();
        assert_eq!(response.records[1].status, CanonicalStatus::Pending);
        assert_eq!(response.unrecognized, 1);
    }

    #[test]
    fn test_skipped_rows_are_reported() {
        let executor = executor(StatusRegistry::default());
        let response = executor
            .import_csv_text(
                &ImportRequest::new("broken.csv"),
                "id,title,status\n1,ok,done\n2,broken\n",
            )
            .unwrap();

        assert_eq!(response.imported, 1);
        assert_eq!(response.skipped, 1);
        assert_eq!(response.status, ImportStatus::CompletedWithErrors);

        let progress = executor.get_progress(&response.session_id).unwrap();
        assert_eq!(progress.errors, 1);
        assert!(progress.error_messages[0].starts_with("Row 2"));
    }

    #[test]
    fn test_finished_sessions_are_cleaned_up() {
        let executor = executor(StatusRegistry::default()).with_session_retention(0);
        let request = ImportRequest::new("tickets.csv");

        let first = executor.import_csv_text(&request, CSV).unwrap();
        assert!(executor.get_progress(&first.session_id).is_some());

        let second = executor.import_csv_text(&request, CSV).unwrap();
        assert!(executor.get_progress(&first.session_id).is_none());
        assert!(executor.get_progress(&second.session_id).is_some());
    }

    #[test]
    fn test_recent_sessions_are_kept() {
        let executor = executor(StatusRegistry::default());
        let request = ImportRequest::new("tickets.csv");

        let first = executor.import_csv_text(&request, CSV).unwrap();
        let second = executor.import_csv_text(&request, CSV).unwrap();
        assert!(executor.get_progress(&first.session_id).is_some());
        assert!(executor.get_progress(&second.session_id).is_some());
    }

    #[tokio::test]
    async fn test_import_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", CSV).unwrap();

        let executor = executor(StatusRegistry::default());
        let response = executor
            .import_file(file.path(), &ImportRequest::new("tickets.csv"))
            .await
            .unwrap();
        assert_eq!(response.records.len(), 5);
    }

    #[tokio::test]
    async fn test_import_missing_file() {
        let executor = executor(StatusRegistry::default());
        let result = executor
            .import_file(Path::new("/nonexistent/records.csv"), &ImportRequest::new("x"))
            .await;
        assert!(result.is_err());
    }
}
