//! Workbook assembly: summary sheet, five case sheets, one save.

use std::fs;
use std::path::Path;

use qakit_io_xlsx::spec::SpecSheetWriteOptions;
use qakit_io_xlsx::writer::XlsxWriter;

use crate::conf::{
    C_NOTE_SUMMARY, C_SHEET_ANALYTICS, C_SHEET_PHASE1_DISCOVERY, C_SHEET_PHASE1_POSTORDER,
    C_SHEET_PHASE3_PRESCRIPTIONS, C_SHEET_STAGE2_CONSULT, C_SHEET_SUMMARY, C_TITLE_SUMMARY,
    N_WIDTH_COL_SUMMARY,
};
use crate::rows::{
    derive_rows_analytics, derive_rows_phase1_discovery, derive_rows_phase1_postorder,
    derive_rows_phase3_prescriptions, derive_rows_stage2_consult,
};
use crate::spec::{AssembleError, ReportWorkbook, SpecTestCaseRow};
use crate::util::{derive_case_grid, derive_header_values};

/// Case sheets in workbook order, paired with their builder output.
pub fn derive_sheet_plan() -> Vec<(&'static str, Vec<SpecTestCaseRow>)> {
    vec![
        (C_SHEET_PHASE1_DISCOVERY, derive_rows_phase1_discovery()),
        (C_SHEET_PHASE1_POSTORDER, derive_rows_phase1_postorder()),
        (C_SHEET_STAGE2_CONSULT, derive_rows_stage2_consult()),
        (C_SHEET_PHASE3_PRESCRIPTIONS, derive_rows_phase3_prescriptions()),
        (C_SHEET_ANALYTICS, derive_rows_analytics()),
    ]
}

/// Build the full workbook and persist it at `path_file_out`.
///
/// Creates missing parent directories, writes the summary sheet and the five
/// case sheets in fixed order, then saves once.
pub fn assemble_workbook(path_file_out: &Path) -> Result<ReportWorkbook, AssembleError> {
    if let Some(path_dir_parent) = path_file_out.parent()
        && !path_dir_parent.as_os_str().is_empty()
    {
        fs::create_dir_all(path_dir_parent).map_err(|err| AssembleError::OutputDirInitFailed {
            path: path_dir_parent.to_path_buf(),
            message: err.to_string(),
        })?;
    }

    let mut writer = XlsxWriter::with_default_formats(path_file_out.to_path_buf());
    let derive_write_error = |message: String| AssembleError::WorkbookWriteFailed {
        path: path_file_out.to_path_buf(),
        message,
    };

    writer
        .write_summary_sheet(
            C_SHEET_SUMMARY,
            C_TITLE_SUMMARY,
            C_NOTE_SUMMARY,
            N_WIDTH_COL_SUMMARY,
        )
        .map_err(derive_write_error)?;

    let header = derive_header_values();
    let options = SpecSheetWriteOptions::default();
    let mut cnt_sheets = 1u64;
    let mut cnt_rows_cases = 0u64;

    for (c_sheet, l_rows) in derive_sheet_plan() {
        let grid = derive_case_grid(&l_rows);
        writer
            .write_case_sheet(c_sheet, &header, &grid, &options)
            .map_err(derive_write_error)?;
        log::debug!("wrote sheet {c_sheet}: {} rows", l_rows.len());

        cnt_sheets += 1;
        cnt_rows_cases += l_rows.len() as u64;
    }

    writer.close().map_err(derive_write_error)?;

    Ok(ReportWorkbook {
        cnt_sheets,
        cnt_rows_cases,
        path_file_out: writer.file_out(),
    })
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{assemble_workbook, derive_sheet_plan};
    use crate::conf::TUP_COLUMNS_TESTCASE;
    use crate::util::derive_case_grid;

    struct TestDir {
        path: PathBuf,
    }

    impl TestDir {
        fn new() -> Self {
            let n = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("clock")
                .as_nanos();
            let path = std::env::temp_dir().join(format!("qakit_cases_test_{n}"));
            std::fs::create_dir_all(&path).expect("create test dir");
            Self { path }
        }

        fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Drop for TestDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }

    #[test]
    fn sheet_plan_has_fixed_order_and_counts() {
        let plan = derive_sheet_plan();

        let l_names: Vec<&str> = plan.iter().map(|(c_sheet, _)| *c_sheet).collect();
        assert_eq!(
            l_names,
            vec![
                "Phase1_Discovery",
                "Phase1_PostOrder",
                "Stage2_ConsultFlow",
                "Phase3_Prescriptions",
                "NonProduct_Analytics"
            ]
        );

        let l_counts: Vec<usize> = plan.iter().map(|(_, l_rows)| l_rows.len()).collect();
        assert_eq!(l_counts, vec![8, 5, 6, 2, 3]);
    }

    #[test]
    fn sheet_plan_is_deterministic_across_builds() {
        let plan_first = derive_sheet_plan();
        let plan_second = derive_sheet_plan();

        assert_eq!(plan_first, plan_second);
        for ((_, l_rows_first), (_, l_rows_second)) in plan_first.iter().zip(&plan_second) {
            assert_eq!(derive_case_grid(l_rows_first), derive_case_grid(l_rows_second));
        }
    }

    #[test]
    fn every_rendered_row_spans_the_full_schema() {
        for (_, l_rows) in derive_sheet_plan() {
            for l_values in derive_case_grid(&l_rows) {
                assert_eq!(l_values.len(), TUP_COLUMNS_TESTCASE.len());
            }
        }
    }

    #[test]
    fn assemble_workbook_creates_missing_dirs_and_reports_counts() {
        let tmp = TestDir::new();
        let path_file_out = tmp.path().join("docs/nested/DocConsult_TestCases.xlsx");
        assert!(!path_file_out.parent().expect("parent").exists());

        let report = assemble_workbook(&path_file_out).expect("assemble");

        assert!(path_file_out.exists());
        assert!(path_file_out.parent().expect("parent").exists());
        assert_eq!(report.cnt_sheets, 6);
        assert_eq!(report.cnt_rows_cases, 24);
        assert_eq!(report.path_file_out, path_file_out.to_string_lossy());
    }

    #[test]
    fn assemble_workbook_fails_when_parent_is_a_file() {
        let tmp = TestDir::new();
        let path_blocker = tmp.path().join("docs");
        std::fs::write(&path_blocker, "not a directory").expect("write blocker");

        let err = assemble_workbook(&path_blocker.join("out.xlsx")).expect_err("must fail");
        assert!(err.to_string().contains("output directory"));
    }
}
