//! `qakit_io_xlsx` v1:
//! XLSX sheet-writer kernel for tabular QA artifacts.
//!
//! - `conf`   : Excel constants and default format presets
//! - `spec`   : format/options/report models
//! - `util`   : pure helper functions
//! - `writer` : workbook writer kernel
pub mod conf;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, N_WIDTH_CELL_MAX,
    N_WIDTH_CELL_MIN, N_WIDTH_CELL_PADDING, TUP_EXCEL_ILLEGAL, derive_default_format_header,
    derive_default_format_text, derive_default_format_title,
};
pub use spec::{
    SpecCellFormat, SpecColumnWidthPolicy, SpecSheetReport, SpecSheetWriteOptions,
};
pub use util::{
    calculate_column_width, derive_column_width_lens, sanitize_sheet_name,
    validate_row_widths, validate_unique_columns,
};
pub use writer::XlsxWriter;
