//! Thin runner around the reconstruction core.
//!
//! Reads each test-case file named on the command line (defaulting to the
//! two canonical test cases), reconstructs the secret, and prints a report.
//! A failing case is reported and does not stop the remaining cases.

use std::env;
use std::fs;

use shamir_recover::{reconstruct, Record};

fn main() {
    let mut paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        paths = vec!["testcase1.json".to_string(), "testcase2.json".to_string()];
    }

    for path in &paths {
        match run_case(path) {
            Ok(()) => {}
            Err(message) => eprintln!("Error processing {}: {}", path, message),
        }
    }
}

fn run_case(path: &str) -> Result<(), String> {
    let raw = fs::read_to_string(path).map_err(|e| e.to_string())?;
    let record: Record = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    let result = reconstruct(&record).map_err(|e| e.to_string())?;

    println!("For {}:", path);
    println!("Coefficients (highest to lowest):");
    println!("{:?}", result.coefficients);
    println!("Secret (constant term c): {}", result.secret);
    println!("-----");
    Ok(())
}
