//! `qakit_cases` v1:
//! Doc Consult manual QA case data and workbook assembly.
//!
//! - `conf`     : column schema, sheet names, output path, summary literals
//! - `spec`     : case-row model, assembler errors, run report
//! - `util`     : rendering helpers
//! - `rows`     : literal case-row builders
//! - `assemble` : workbook assembly pipeline

pub mod assemble;
pub mod conf;
pub mod rows;
pub mod spec;
pub mod util;

pub use assemble::{assemble_workbook, derive_sheet_plan};
pub use conf::{C_PATH_FILE_OUT_DEFAULT, TUP_COLUMNS_TESTCASE};
pub use spec::{AssembleError, ReportWorkbook, SpecTestCaseRow};
pub use util::{derive_case_grid, derive_header_values, format_case_id};
