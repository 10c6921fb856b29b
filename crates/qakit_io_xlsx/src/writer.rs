//! XLSX writer kernel that turns rendered string grids into workbook output.

use std::collections::BTreeSet;
use std::path::PathBuf;

use rust_xlsxwriter::{Format, FormatAlign, Workbook, XlsxError};

use crate::conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX,
    derive_default_format_header, derive_default_format_text, derive_default_format_title,
};
use crate::spec::{SpecCellFormat, SpecSheetReport, SpecSheetWriteOptions};
use crate::util::{
    calculate_column_width, derive_column_width_lens, sanitize_sheet_name, validate_row_widths,
    validate_unique_columns,
};

/// Stateful workbook writer.
///
/// The workbook is buffered in memory until [`Self::close`] is called; sheets
/// are created only by explicit writes, so no default sheet ever exists.
pub struct XlsxWriter {
    path_file_out: PathBuf,
    workbook: Workbook,
    fmt_text: SpecCellFormat,
    fmt_header: SpecCellFormat,
    fmt_title: SpecCellFormat,
    set_sheet_names_existing: BTreeSet<String>,
    l_reports: Vec<SpecSheetReport>,
    if_closed: bool,
}

impl XlsxWriter {
    /// Create a writer bound to an output path and explicit format presets.
    pub fn new(
        path_file_out: PathBuf,
        fmt_text: SpecCellFormat,
        fmt_header: SpecCellFormat,
        fmt_title: SpecCellFormat,
    ) -> Self {
        Self {
            path_file_out,
            workbook: Workbook::new(),
            fmt_text,
            fmt_header,
            fmt_title,
            set_sheet_names_existing: BTreeSet::new(),
            l_reports: Vec::new(),
            if_closed: false,
        }
    }

    /// Create a writer with the default text/header/title presets.
    pub fn with_default_formats(path_file_out: PathBuf) -> Self {
        Self::new(
            path_file_out,
            derive_default_format_text(),
            derive_default_format_header(),
            derive_default_format_title(),
        )
    }

    /// Return the output file path as a string.
    pub fn file_out(&self) -> String {
        self.path_file_out.to_string_lossy().to_string()
    }

    /// Return an immutable snapshot of per-sheet write reports.
    pub fn report(&self) -> Vec<SpecSheetReport> {
        self.l_reports.clone()
    }

    /// Flush the workbook to disk. Idempotent.
    pub fn close(&mut self) -> Result<(), String> {
        if self.if_closed {
            return Ok(());
        }
        self.workbook
            .save(&self.path_file_out)
            .map_err(derive_xlsx_error_text)?;
        self.if_closed = true;
        Ok(())
    }

    /// Write one tabular sheet: header row plus one row per rendered record.
    ///
    /// Row 1 carries `header` in the header preset; rows 2..N+1 carry `rows`
    /// in the text preset. Every column is then sized to its longest rendered
    /// value, clamped by `options.policy_width`.
    pub fn write_case_sheet(
        &mut self,
        sheet_name: &str,
        header: &[String],
        rows: &[Vec<String>],
        options: &SpecSheetWriteOptions,
    ) -> Result<(), String> {
        if self.if_closed {
            return Err("Cannot write after close().".to_string());
        }
        if header.is_empty() {
            return Err("Header must have >= 1 column.".to_string());
        }
        if header.len() > N_NCOLS_EXCEL_MAX {
            return Err(format!(
                "Header has {} columns, Excel allows {N_NCOLS_EXCEL_MAX}.",
                header.len()
            ));
        }
        if rows.len() + 1 > N_NROWS_EXCEL_MAX {
            return Err(format!(
                "Sheet has {} rows with header, Excel allows {N_NROWS_EXCEL_MAX}.",
                rows.len() + 1
            ));
        }
        validate_unique_columns(header)?;
        validate_row_widths(header.len(), rows)?;

        let sheet_name_unique =
            self.derive_unique_sheet_name(&sanitize_sheet_name(sheet_name, "_"));
        let fmt_header = derive_rust_xlsx_format(&self.fmt_header);
        let fmt_text = derive_rust_xlsx_format(&self.fmt_text);

        let worksheet = self.workbook.add_worksheet();
        worksheet
            .set_name(&sheet_name_unique)
            .map_err(derive_xlsx_error_text)?;

        for (n_idx_col, c_cell) in header.iter().enumerate() {
            worksheet
                .write_string_with_format(0, cast_col_num(n_idx_col)?, c_cell, &fmt_header)
                .map_err(derive_xlsx_error_text)?;
        }

        for (n_idx_row, l_values) in rows.iter().enumerate() {
            for (n_idx_col, c_cell) in l_values.iter().enumerate() {
                if c_cell.is_empty() {
                    continue;
                }
                worksheet
                    .write_string_with_format(
                        cast_row_num(n_idx_row + 1)?,
                        cast_col_num(n_idx_col)?,
                        c_cell,
                        &fmt_text,
                    )
                    .map_err(derive_xlsx_error_text)?;
            }
        }

        let l_len_by_col = derive_column_width_lens(header, rows);
        for (n_idx_col, n_len_longest) in l_len_by_col.iter().enumerate() {
            let n_width_final = calculate_column_width(*n_len_longest, &options.policy_width);
            worksheet
                .set_column_width(cast_col_num(n_idx_col)?, n_width_final as f64)
                .map_err(derive_xlsx_error_text)?;
        }

        self.l_reports.push(SpecSheetReport {
            sheet_name: sheet_name_unique,
            cnt_rows: rows.len(),
            cnt_cols: header.len(),
        });
        Ok(())
    }

    /// Write a freeform summary sheet: title in A1, note in A3, fixed column width.
    pub fn write_summary_sheet(
        &mut self,
        sheet_name: &str,
        c_title: &str,
        c_note: &str,
        n_width_col: usize,
    ) -> Result<(), String> {
        if self.if_closed {
            return Err("Cannot write after close().".to_string());
        }

        let sheet_name_unique =
            self.derive_unique_sheet_name(&sanitize_sheet_name(sheet_name, "_"));
        let fmt_title = derive_rust_xlsx_format(&self.fmt_title);
        let fmt_text = derive_rust_xlsx_format(&self.fmt_text);

        let worksheet = self.workbook.add_worksheet();
        worksheet
            .set_name(&sheet_name_unique)
            .map_err(derive_xlsx_error_text)?;
        worksheet
            .write_string_with_format(0, 0, c_title, &fmt_title)
            .map_err(derive_xlsx_error_text)?;
        worksheet
            .write_string_with_format(2, 0, c_note, &fmt_text)
            .map_err(derive_xlsx_error_text)?;
        worksheet
            .set_column_width(0, n_width_col as f64)
            .map_err(derive_xlsx_error_text)?;

        self.l_reports.push(SpecSheetReport {
            sheet_name: sheet_name_unique,
            cnt_rows: 2,
            cnt_cols: 1,
        });
        Ok(())
    }

    fn derive_unique_sheet_name(&mut self, name: &str) -> String {
        if !self.set_sheet_names_existing.contains(name) {
            self.set_sheet_names_existing.insert(name.to_string());
            return name.to_string();
        }

        let base_name: String = name
            .chars()
            .take(usize::max(1, N_LEN_EXCEL_SHEET_NAME_MAX - 3))
            .collect();

        let mut n_idx = 2usize;
        loop {
            let candidate: String = format!("{base_name}__{n_idx}")
                .chars()
                .take(N_LEN_EXCEL_SHEET_NAME_MAX)
                .collect();
            if !self.set_sheet_names_existing.contains(&candidate) {
                self.set_sheet_names_existing.insert(candidate.clone());
                return candidate;
            }
            n_idx += 1;
        }
    }
}

fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }
    if let Some(val) = &spec.align
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }
    if let Some(val) = &spec.valign
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }

    format
}

fn derive_format_align(align: &str) -> Option<FormatAlign> {
    let value = align.trim().to_ascii_lowercase();
    match value.as_str() {
        "general" => Some(FormatAlign::General),
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "right" => Some(FormatAlign::Right),
        "top" => Some(FormatAlign::Top),
        "bottom" => Some(FormatAlign::Bottom),
        "vcenter" | "vertical_center" => Some(FormatAlign::VerticalCenter),
        _ => None,
    }
}

fn cast_row_num(value: usize) -> Result<u32, String> {
    u32::try_from(value).map_err(|_| format!("row index overflow: {value}"))
}

fn cast_col_num(value: usize) -> Result<u16, String> {
    u16::try_from(value).map_err(|_| format!("column index overflow: {value}"))
}

fn derive_xlsx_error_text(err: XlsxError) -> String {
    format!("xlsx write error: {err}")
}
