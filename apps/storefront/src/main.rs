//! # Palengke Storefront Entry Point
//!
//! Setup lives in `lib.rs` for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    match palengke_storefront::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
