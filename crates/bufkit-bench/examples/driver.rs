//! Reference driver example.
//!
//! Runs every bufkit operation once over the fixed driver inputs and
//! prints the results.

use bufkit_bench::run_driver;

fn main() {
    println!("=== bufkit driver ===\n");

    match run_driver() {
        Ok(report) => {
            println!("{report}");
            if !report.record_update.is_clean() {
                println!(
                    "\nnote: {} record name(s) could not take their full suffix",
                    report.record_update.overflowed.len()
                );
            }
        }
        Err(e) => {
            eprintln!("driver failed: {e}");
            std::process::exit(1);
        }
    }
}
