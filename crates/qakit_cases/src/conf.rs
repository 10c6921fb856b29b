//! Case-sheet constants: column schema, sheet names, output path, summary text.

/// Fixed column schema shared by every case sheet. Order matters.
pub const TUP_COLUMNS_TESTCASE: [&str; 15] = [
    "ID",
    "Title",
    "Objective",
    "Preconditions",
    "Steps",
    "Expected Result",
    "Priority",
    "Type",
    "Module",
    "Screen",
    "AB Variant",
    "Data",
    "Image Ref",
    "Owner",
    "Tags",
];

/// Summary sheet name.
pub const C_SHEET_SUMMARY: &str = "Summary";
/// Phase 1 discovery-surface sheet name.
pub const C_SHEET_PHASE1_DISCOVERY: &str = "Phase1_Discovery";
/// Phase 1 post-order sheet name.
pub const C_SHEET_PHASE1_POSTORDER: &str = "Phase1_PostOrder";
/// Stage 2 consult-flow sheet name.
pub const C_SHEET_STAGE2_CONSULT: &str = "Stage2_ConsultFlow";
/// Phase 3 prescriptions sheet name.
pub const C_SHEET_PHASE3_PRESCRIPTIONS: &str = "Phase3_Prescriptions";
/// Non-product analytics sheet name.
pub const C_SHEET_ANALYTICS: &str = "NonProduct_Analytics";

/// Default workbook output path, relative to the working directory.
pub const C_PATH_FILE_OUT_DEFAULT: &str = "docs/DocConsult_TestCases.xlsx";

/// Summary sheet title cell (A1).
pub const C_TITLE_SUMMARY: &str = "Doc Consult Test Cases";
/// Summary sheet note cell (A3).
pub const C_NOTE_SUMMARY: &str =
    "Generated from PRD and screenshots. Update Image Ref with actual paths if embedding.";
/// Display width of the summary sheet's only column.
pub const N_WIDTH_COL_SUMMARY: usize = 120;

/// Zero-padded digit count of case-ID sequence numbers.
pub const N_DIGITS_CASE_SEQ: usize = 3;
