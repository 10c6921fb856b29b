//! Shared XLSX specification models.

use crate::conf::{N_WIDTH_CELL_MAX, N_WIDTH_CELL_MIN, N_WIDTH_CELL_PADDING};

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Declarative cell format spec mapped onto `rust_xlsxwriter::Format` at write time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,
    /// Horizontal alignment.
    pub align: Option<String>,
    /// Vertical alignment.
    pub valign: Option<String>,
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            align: other.align.clone().or_else(|| self.align.clone()),
            valign: other.valign.clone().or_else(|| self.valign.clone()),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WriteOptions

/// Column display-width sizing policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecColumnWidthPolicy {
    /// Lower clamp for the final column width.
    pub width_cell_min: usize,
    /// Upper clamp for the final column width.
    pub width_cell_max: usize,
    /// Padding added to the longest rendered value.
    pub width_cell_padding: usize,
}

impl Default for SpecColumnWidthPolicy {
    fn default() -> Self {
        Self {
            width_cell_min: N_WIDTH_CELL_MIN,
            width_cell_max: N_WIDTH_CELL_MAX,
            width_cell_padding: N_WIDTH_CELL_PADDING,
        }
    }
}

/// Per-sheet call options for [`crate::writer::XlsxWriter::write_case_sheet`].
#[derive(Debug, Clone, Default)]
pub struct SpecSheetWriteOptions {
    /// Column width sizing policy.
    pub policy_width: SpecColumnWidthPolicy,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Reports

/// Per-sheet write summary recorded by the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSheetReport {
    /// Final (sanitized, de-duplicated) sheet name.
    pub sheet_name: String,
    /// Number of body rows written (header excluded).
    pub cnt_rows: usize,
    /// Number of columns written.
    pub cnt_cols: usize,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
