use contracts::projections::p909_status_board::{
    StatusBoardDto, StatusBoardRequest, StatusBoardRowDto,
};
use contracts::shared::status::{
    count_by_status, filter_by_status, sort_by_status, StatusResolver,
};
use contracts::usecases::u508_import_status_records::StatusRecord;

/// Построить доску статусов из импортированных записей.
///
/// Счетчики считаются по всем записям, затем применяется фильтр и
/// стабильная сортировка по рангу: записи с одинаковым рангом остаются в
/// порядке импорта. Статус и ранг берутся из записи, как они были
/// определены при импорте.
pub fn build_board(
    records: Vec<StatusRecord>,
    resolver: &StatusResolver,
    request: &StatusBoardRequest,
) -> StatusBoardDto {
    let counts = count_by_status(&records, resolver);
    let total = records.len();

    let mut rows = filter_by_status(records, resolver, &request.statuses);
    sort_by_status(&mut rows, resolver, !request.sort_desc);

    let rows = rows
        .into_iter()
        .map(|record| StatusBoardRowDto {
            status_label: record.status.display_name().to_string(),
            raw_status: record.raw_status.coerce().map(|s| s.into_owned()),
            id: record.id,
            title: record.title,
            status: record.status,
            rank: record.rank,
        })
        .collect();

    StatusBoardDto {
        rows,
        counts,
        total,
    }
}
