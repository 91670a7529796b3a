//! # Zelion Storefront Entry Point
//!
//! Loads configuration and the catalog, then reports what was loaded.
//! Setup lives in lib.rs so tests can build a `Storefront` directly.

use std::process::ExitCode;

fn main() -> ExitCode {
    match zelion_storefront::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "storefront failed to start");
            ExitCode::FAILURE
        }
    }
}
