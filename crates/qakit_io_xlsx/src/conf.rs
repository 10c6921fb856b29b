//! XLSX constants and default preset factories.

use crate::spec::SpecCellFormat;

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];

/// Minimum display width assigned to any written column.
pub const N_WIDTH_CELL_MIN: usize = 12;
/// Maximum display width assigned to any written column.
pub const N_WIDTH_CELL_MAX: usize = 60;
/// Padding added to the longest rendered value when sizing a column.
pub const N_WIDTH_CELL_PADDING: usize = 2;

/// Font size used by the title preset.
pub const N_FONT_SIZE_TITLE: i64 = 14;

/// Build the default body-cell format (library defaults, no overrides).
pub fn derive_default_format_text() -> SpecCellFormat {
    SpecCellFormat::default()
}

/// Build the default header format: bold, horizontally centered.
pub fn derive_default_format_header() -> SpecCellFormat {
    derive_default_format_text().with_(SpecCellFormat {
        bold: Some(true),
        align: Some("center".to_string()),
        ..Default::default()
    })
}

/// Build the default title format: bold, enlarged font.
pub fn derive_default_format_title() -> SpecCellFormat {
    derive_default_format_text().with_(SpecCellFormat {
        bold: Some(true),
        font_size: Some(N_FONT_SIZE_TITLE),
        ..Default::default()
    })
}
