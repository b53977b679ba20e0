use anyhow::Result;
use contracts::shared::status::RawStatus;
use contracts::usecases::u508_import_status_records::ImportRequest;

/// Строка CSV после разбора, до нормализации статуса
#[derive(Debug, Clone, PartialEq)]
pub enum CsvRow {
    Parsed {
        row: usize,
        id: String,
        title: String,
        raw_status: RawStatus,
    },
    Skipped {
        row: usize,
        reason: String,
    },
}

/// Parse records CSV text into rows.
///
/// Header lookup is case-insensitive. A missing id column (or an empty id
/// cell) falls back to the 1-based row number; a missing status column
/// leaves every status absent. Rows with the wrong number of fields are
/// returned as `Skipped`.
pub fn parse_records_csv(csv_text: &str, request: &ImportRequest) -> Result<Vec<CsvRow>> {
    // Strip UTF-8 BOM if present
    let text = csv_text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = match reader.headers() {
        Ok(h) => h.clone(),
        Err(e) => {
            anyhow::bail!("Failed to read CSV headers: {}", e);
        }
    };

    let column = |name: &str| headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name.trim()));
    let id_idx = column(&request.id_column);
    let title_idx = column(&request.title_column);
    let status_idx = column(&request.status_column);

    if status_idx.is_none() {
        tracing::warn!(
            "{}: status column '{}' not found, all statuses will be unknown",
            request.source,
            request.status_column
        );
    }

    let mut rows = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let row = idx + 1;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("{}: skipping malformed CSV record {}: {}", request.source, row, e);
                rows.push(CsvRow::Skipped {
                    row,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let cell = |i: Option<usize>| i.and_then(|i| record.get(i));

        let id = cell(id_idx)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| row.to_string());
        let title = cell(title_idx).map(|v| v.trim().to_string()).unwrap_or_default();
        let raw_status = RawStatus::from(cell(status_idx));

        rows.push(CsvRow::Parsed {
            row,
            id,
            title,
            raw_status,
        });
    }

    Ok(rows)
}
