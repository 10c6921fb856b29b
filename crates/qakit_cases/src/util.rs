//! Rendering helpers shared by the builders and the assembler.

use crate::conf::{N_DIGITS_CASE_SEQ, TUP_COLUMNS_TESTCASE};
use crate::spec::SpecTestCaseRow;

/// Format a case ID as `<PREFIX>-<NNN>` with a zero-padded sequence number.
pub fn format_case_id(c_prefix: &str, n_seq: usize) -> String {
    format!("{c_prefix}-{n_seq:0width$}", width = N_DIGITS_CASE_SEQ)
}

/// Render the fixed column schema as owned header cells.
pub fn derive_header_values() -> Vec<String> {
    TUP_COLUMNS_TESTCASE
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Render case rows into a string grid in schema column order.
///
/// Every output row has exactly one cell per schema column.
pub fn derive_case_grid(rows: &[SpecTestCaseRow]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            TUP_COLUMNS_TESTCASE
                .iter()
                .map(|c_col| row.value_by_column(c_col).to_string())
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_case_id_zero_pads_to_three_digits() {
        assert_eq!(format_case_id("P1-DISC", 1), "P1-DISC-001");
        assert_eq!(format_case_id("P1-DISC", 42), "P1-DISC-042");
        assert_eq!(format_case_id("ANL", 107), "ANL-107");
    }

    #[test]
    fn derive_header_values_matches_schema_order() {
        let header = derive_header_values();
        assert_eq!(header.len(), 15);
        assert_eq!(header[0], "ID");
        assert_eq!(header[5], "Expected Result");
        assert_eq!(header[14], "Tags");
    }

    #[test]
    fn derive_case_grid_emits_one_cell_per_column() {
        let rows = vec![SpecTestCaseRow {
            id: "S2-CONS-001".to_string(),
            title: "Deep link validates same user".to_string(),
            ..Default::default()
        }];

        let grid = derive_case_grid(&rows);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0].len(), TUP_COLUMNS_TESTCASE.len());
        assert_eq!(grid[0][0], "S2-CONS-001");
        assert_eq!(grid[0][1], "Deep link validates same user");
        // absent fields render as empty strings, never as missing cells
        assert!(grid[0][2..].iter().all(String::is_empty));
    }
}
