//! Doc Consult QA workbook generator entry point.
//!
//! Takes no arguments; writes the workbook to the fixed output path and
//! prints it on success.

use std::path::PathBuf;

use qakit_cases::assemble::assemble_workbook;
use qakit_cases::conf::C_PATH_FILE_OUT_DEFAULT;

fn main() {
    env_logger::init();

    let path_file_out = PathBuf::from(C_PATH_FILE_OUT_DEFAULT);
    match assemble_workbook(&path_file_out) {
        Ok(report) => {
            log::info!("{report}");
            println!("Wrote: {}", path_file_out.display());
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
