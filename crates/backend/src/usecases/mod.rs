pub mod u508_import_status_records;
