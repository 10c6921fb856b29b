//! Case-row model, assembler error types, and the run report.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

////////////////////////////////////////////////////////////////////////////////
// #region CaseRowModel

/// One manual-test-case record with the 15 fixed fields.
///
/// Absent content is the empty string; rendering resolves values by column
/// name so every rendered row carries exactly one cell per schema column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecTestCaseRow {
    /// Case identifier, `<PREFIX>-<NNN>` with a zero-padded sequence number.
    pub id: String,
    /// Short case title.
    pub title: String,
    /// What the case validates.
    pub objective: String,
    /// Required state before execution.
    pub preconditions: String,
    /// Execution steps, `>`-separated.
    pub steps: String,
    /// Expected observable result.
    pub expected_result: String,
    /// Priority bucket (P1, P2, ...).
    pub priority: String,
    /// Case type (Functional, Analytics, ...).
    pub case_type: String,
    /// Owning product module.
    pub module: String,
    /// Screen under test.
    pub screen: String,
    /// A/B experiment applicability.
    pub ab_variant: String,
    /// Test data reference.
    pub data: String,
    /// Screenshot/image reference.
    pub image_ref: String,
    /// Responsible owner.
    pub owner: String,
    /// Comma-separated tags.
    pub tags: String,
}

impl SpecTestCaseRow {
    /// Resolve the rendered value for one schema column; unknown names render empty.
    pub fn value_by_column(&self, column: &str) -> &str {
        match column {
            "ID" => &self.id,
            "Title" => &self.title,
            "Objective" => &self.objective,
            "Preconditions" => &self.preconditions,
            "Steps" => &self.steps,
            "Expected Result" => &self.expected_result,
            "Priority" => &self.priority,
            "Type" => &self.case_type,
            "Module" => &self.module,
            "Screen" => &self.screen,
            "AB Variant" => &self.ab_variant,
            "Data" => &self.data,
            "Image Ref" => &self.image_ref,
            "Owner" => &self.owner,
            "Tags" => &self.tags,
            _ => "",
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// "Top-level assembly failed" errors (setup / persistence stage).
#[derive(Debug)]
pub enum AssembleError {
    /// Output parent directory could not be created.
    OutputDirInitFailed {
        /// Directory that failed initialization.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Workbook population or save failed.
    WorkbookWriteFailed {
        /// Target workbook path.
        path: PathBuf,
        /// Underlying writer error text.
        message: String,
    },
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutputDirInitFailed { path, message } => {
                write!(
                    f,
                    "Failed to initialize output directory {}: {message}",
                    path.display()
                )
            }
            Self::WorkbookWriteFailed { path, message } => {
                write!(f, "Failed to write workbook {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for AssembleError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region RunReport

/// Aggregate counters for one `assemble_workbook` run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportWorkbook {
    /// Number of sheets written, summary included.
    pub cnt_sheets: u64,
    /// Number of case rows written across all case sheets.
    pub cnt_rows_cases: u64,
    /// Final workbook path as text.
    pub path_file_out: String,
}

impl ReportWorkbook {
    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_sheets".to_string(), self.cnt_sheets);
        dict_counts.insert("cnt_rows_cases".to_string(), self.cnt_rows_cases);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} sheets={} rows_cases={} file={}",
            self.cnt_sheets, self.cnt_rows_cases, self.path_file_out
        )
    }
}

impl fmt::Display for ReportWorkbook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[XLSX]"))
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ReportWorkbook, SpecTestCaseRow};

    #[test]
    fn value_by_column_defaults_to_empty() {
        let row = SpecTestCaseRow {
            id: "ANL-001".to_string(),
            title: "Key funnel metrics captured".to_string(),
            ..Default::default()
        };

        assert_eq!(row.value_by_column("ID"), "ANL-001");
        assert_eq!(row.value_by_column("Title"), "Key funnel metrics captured");
        assert_eq!(row.value_by_column("Image Ref"), "");
        assert_eq!(row.value_by_column("NoSuchColumn"), "");
    }

    #[test]
    fn report_workbook_to_dict_and_format_agree() {
        let report = ReportWorkbook {
            cnt_sheets: 6,
            cnt_rows_cases: 24,
            path_file_out: "docs/DocConsult_TestCases.xlsx".to_string(),
        };

        let dict_counts = report.to_dict();
        assert_eq!(dict_counts["cnt_sheets"], 6);
        assert_eq!(dict_counts["cnt_rows_cases"], 24);

        let txt = report.format("[XLSX]");
        assert_eq!(
            txt,
            "[XLSX] sheets=6 rows_cases=24 file=docs/DocConsult_TestCases.xlsx"
        );
        assert_eq!(report.to_string(), txt);
    }
}
