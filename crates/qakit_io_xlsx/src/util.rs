//! Stateless helper utilities used by the XLSX writer kernel.

use std::collections::BTreeSet;

use crate::conf::{N_LEN_EXCEL_SHEET_NAME_MAX, TUP_EXCEL_ILLEGAL};
use crate::spec::SpecColumnWidthPolicy;

////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to a valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region GridValidation

/// Validate that `columns` has no duplicated names.
pub fn validate_unique_columns(columns: &[String]) -> Result<(), String> {
    let mut set_seen = BTreeSet::new();
    let l_duplicated: Vec<&str> = columns
        .iter()
        .filter(|c_name| !set_seen.insert(c_name.as_str()))
        .map(String::as_str)
        .collect();

    if l_duplicated.is_empty() {
        return Ok(());
    }
    Err(format!("Duplicate column names detected: {l_duplicated:?}"))
}

/// Validate that every row carries exactly `n_width_header` cells.
pub fn validate_row_widths(n_width_header: usize, rows: &[Vec<String>]) -> Result<(), String> {
    for (n_idx_row, l_values) in rows.iter().enumerate() {
        if l_values.len() != n_width_header {
            return Err(format!(
                "Row {n_idx_row} has {} cells, expected {n_width_header}.",
                l_values.len()
            ));
        }
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ColumnWidths

/// Longest rendered length per column across header and body rows.
///
/// Length is counted in characters, matching how the cells are displayed.
pub fn derive_column_width_lens(header: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut l_len_by_col: Vec<usize> = header.iter().map(|c_cell| c_cell.chars().count()).collect();

    for l_values in rows {
        for (n_idx_col, c_cell) in l_values.iter().enumerate() {
            if n_idx_col >= l_len_by_col.len() {
                break;
            }
            l_len_by_col[n_idx_col] = usize::max(l_len_by_col[n_idx_col], c_cell.chars().count());
        }
    }

    l_len_by_col
}

/// Clamp a longest-value length into a final display width.
pub fn calculate_column_width(n_len_longest: usize, policy: &SpecColumnWidthPolicy) -> usize {
    usize::min(
        policy.width_cell_max,
        usize::max(policy.width_cell_min, n_len_longest + policy.width_cell_padding),
    )
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn to_strings(l_values: &[&str]) -> Vec<String> {
        l_values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn sanitize_sheet_name_replaces_illegal_and_caps_length() {
        assert_eq!(sanitize_sheet_name("a/b:c", "_"), "a_b_c");
        assert_eq!(sanitize_sheet_name("   ", "_"), "Sheet");

        let c_long = "x".repeat(40);
        assert_eq!(sanitize_sheet_name(&c_long, "_").chars().count(), 31);
    }

    #[test]
    fn validate_unique_columns_rejects_duplicates() {
        assert!(validate_unique_columns(&to_strings(&["ID", "Title"])).is_ok());

        let err = validate_unique_columns(&to_strings(&["ID", "Title", "ID"]))
            .expect_err("must reject duplicate");
        assert!(err.contains("ID"));
    }

    #[test]
    fn validate_row_widths_rejects_short_rows() {
        let rows = vec![to_strings(&["a", "b"]), to_strings(&["c"])];
        let err = validate_row_widths(2, &rows).expect_err("must reject short row");
        assert!(err.contains("Row 1"));
    }

    #[test]
    fn derive_column_width_lens_covers_header_and_body() {
        let header = to_strings(&["ID", "Expected Result"]);
        let rows = vec![
            to_strings(&["P1-DISC-001", "ok"]),
            to_strings(&["P1-DISC-002", ""]),
        ];

        assert_eq!(derive_column_width_lens(&header, &rows), vec![11, 15]);
    }

    #[test]
    fn derive_column_width_lens_counts_chars_not_bytes() {
        let header = to_strings(&["Data"]);
        let rows = vec![to_strings(&["₹0.0"])];

        assert_eq!(derive_column_width_lens(&header, &rows), vec![4]);
    }

    #[test]
    fn calculate_column_width_clamps_both_ends() {
        let policy = SpecColumnWidthPolicy::default();

        // short values land on the lower clamp
        assert_eq!(calculate_column_width(2, &policy), 12);
        // padding applies inside the clamp window
        assert_eq!(calculate_column_width(20, &policy), 22);
        // long values land on the upper clamp
        assert_eq!(calculate_column_width(90, &policy), 60);
        // boundary: 58 + 2 == 60 stays unclamped
        assert_eq!(calculate_column_width(58, &policy), 60);
    }
}
