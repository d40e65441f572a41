//! Demo binary: scan the fixed reading set and print the verification report.
//!
//! Usage: cargo run --release            (text report)
//!        cargo run --release -- --json  (same results as JSON)

use anyhow::{bail, Result};
use serde::Serialize;

use rustyscan::{format_report, parity, scan, ScanSummary};

/// Demo inputs, fixed at compile time.
const DEMO_READINGS: [i32; 8] = [5, -3, 12, 6, 0, -1, 7, 4];
const DEMO_THRESHOLD: i32 = 5;

#[derive(Serialize)]
struct ScanOutput<'a> {
    readings: &'a [i32],
    transformed: &'a [i32],
    threshold: i32,
    #[serde(flatten)]
    summary: ScanSummary,
    final_parity: i32,
}

/// Parse the argument list (program name excluded): `--json` alone or
/// nothing at all; anything else is an error.
fn parse_args(args: &[String]) -> Result<bool> {
    match args {
        [] => Ok(false),
        [flag] if flag.as_str() == "--json" => Ok(true),
        _ => bail!("unexpected arguments {args:?} (expected at most --json)"),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = parse_args(&args)?;

    let (transformed, summary) = scan(&DEMO_READINGS, DEMO_THRESHOLD);
    let final_parity = parity(summary.combined_xor);

    if json {
        let out = ScanOutput {
            readings: &DEMO_READINGS,
            transformed: &transformed,
            threshold: DEMO_THRESHOLD,
            summary,
            final_parity,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!(
            "{}",
            format_report(
                &DEMO_READINGS,
                &transformed,
                DEMO_THRESHOLD,
                &summary,
                final_parity
            )
        );
    }

    // The embedded original parked in an infinite loop here so the debugger
    // session stayed alive. Outside that harness a normal exit is correct.
    Ok(())
}
