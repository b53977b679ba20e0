//! CLI flow: apply status config, import a CSV file, build the board.

use std::path::Path;
use std::sync::Arc;

use contracts::projections::p909_status_board::{StatusBoardDto, StatusBoardRequest};
use contracts::usecases::u508_import_status_records::ImportRequest;

use crate::projections::p909_status_board::service::build_board;
use crate::shared::config::Config;
use crate::shared::status_registry::StatusRegistry;
use crate::usecases::u508_import_status_records::{ImportExecutor, ProgressTracker};

pub async fn run_board(
    records_path: &Path,
    config: &Config,
    registry: Arc<StatusRegistry>,
) -> anyhow::Result<StatusBoardDto> {
    registry.reload(&config.status)?;

    let request = ImportRequest {
        source: records_path.display().to_string(),
        id_column: config.import.id_column.clone(),
        title_column: config.import.title_column.clone(),
        status_column: config.import.status_column.clone(),
    };

    let executor = ImportExecutor::new(Arc::clone(&registry), Arc::new(ProgressTracker::new()));
    let response = executor.import_file(records_path, &request).await?;

    Ok(build_board(
        response.records,
        &registry.current(),
        &StatusBoardRequest::default(),
    ))
}
