//! Export module
//!
//! Produces the downloadable spreadsheet for an estimate. The workbook is
//! built entirely in memory; writing it to disk is left to the caller.

pub mod xlsx;

pub use xlsx::{
    build_workbook, export_estimate_xlsx, CellValue, ExportRow, BY_TASK_COLUMNS,
    ESTIMATE_COLUMNS, EXPORT_FILE_NAME, XLSX_MIME,
};
