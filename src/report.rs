//! Fixed-order verification report.
//!
//! The line and field order here is the compatibility surface for external
//! verification scripts: input readings, transformed values, then the six
//! labeled scalars in the exact order `total_sum`, `above_threshold_count`,
//! `max_value`, `combined_or`, `combined_xor`, `final_parity`. Rendered to a
//! `String` so tests can pin the layout.

use std::fmt::Write;

use crate::scan::ScanSummary;

/// Render the verification report for one scan.
pub fn format_report(
    readings: &[i32],
    transformed: &[i32],
    threshold: i32,
    summary: &ScanSummary,
    final_parity: i32,
) -> String {
    let mut out = String::new();

    out.push_str("Input readings:     ");
    for r in readings {
        // infallible: fmt::Write on String never errors
        let _ = write!(out, "{r} ");
    }
    out.push('\n');

    out.push_str("Transformed values: ");
    for t in transformed {
        let _ = write!(out, "{t} ");
    }
    out.push_str("\n\n");

    let _ = writeln!(out, "total_sum             = {}", summary.total_sum);
    let _ = writeln!(
        out,
        "above_threshold_count = {} (threshold = {})",
        summary.above_threshold_count, threshold
    );
    let _ = writeln!(out, "max_value             = {}", summary.max_value);
    let _ = writeln!(out, "combined_or           = {}", summary.combined_or);
    let _ = writeln!(out, "combined_xor          = {}", summary.combined_xor);
    let _ = writeln!(out, "final_parity          = {final_parity}");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parity, scan};

    #[test]
    fn test_report_layout() {
        let readings = [5, -3, 12, 6, 0, -1, 7, 4];
        let (transformed, summary) = scan(&readings, 5);
        let report = format_report(
            &readings,
            &transformed,
            5,
            &summary,
            parity(summary.combined_xor),
        );

        // Trailing `\x20` keeps the space the report emits after each element
        // from being stripped by whitespace-trimming editors.
        let expected = "\
Input readings:     5 -3 12 6 0 -1 7 4\x20
Transformed values: 5 3 12 6 0 1 7 4\x20

total_sum             = 38
above_threshold_count = 4 (threshold = 5)
max_value             = 12
combined_or           = 15
combined_xor          = 14
final_parity          = 0
";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_report_empty_input() {
        let (transformed, summary) = scan(&[], 3);
        let report = format_report(&[], &transformed, 3, &summary, 0);
        assert!(report.starts_with("Input readings:     \n"));
        assert!(report.contains("total_sum             = 0\n"));
        assert!(report.contains("above_threshold_count = 0 (threshold = 3)\n"));
    }

    #[test]
    fn test_scalar_field_order() {
        let (transformed, summary) = scan(&[1, 2], 1);
        let report = format_report(&[1, 2], &transformed, 1, &summary, 1);
        let labels = [
            "total_sum",
            "above_threshold_count",
            "max_value",
            "combined_or",
            "combined_xor",
            "final_parity",
        ];
        let positions: Vec<usize> = labels
            .iter()
            .map(|l| report.find(l).expect("label missing from report"))
            .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "scalar labels out of order: {positions:?}"
        );
    }
}
