//! # Tip50 Entry Point
//!
//! ```text
//! $ tip50 compute --bill 49.50 --round --split 2
//! Bill:            $49.50
//! Tip:             $9.50 (20.0% selected, 19.2% effective)
//! Grand total:     $59.00 (rounded from $59.40)
//! Per person (2):  $29.50 total, $4.75 tip
//! ```
//!
//! The actual setup is in lib.rs so it can be tested.

use std::process::ExitCode;

fn main() -> ExitCode {
    tip_cli::run()
}
