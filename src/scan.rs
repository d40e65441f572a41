//! Fused transform-and-reduce scan over `i32` readings.
//!
//! One traversal does all the work: each element is rectified
//! (`wrapping_abs`) into the output buffer while five accumulators fold the
//! rectified values — sum, threshold count, max, bitwise OR, bitwise XOR.
//! All accumulators start at zero and the hot path is integer-only.
//!
//! Arithmetic is wrapping throughout, so overflow is defined
//! two's-complement behavior in every build profile rather than a debug
//! panic. The one boundary this leaves open: `wrapping_abs(i32::MIN)` is
//! `i32::MIN` itself, so that single input value passes through negative.
//! Callers with data near the `i32` rails should widen before scanning.

use serde::{Deserialize, Serialize};

/// Result record of one fused scan.
///
/// Written exactly once per scan; all fields accumulate from zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Wrapping sum of all rectified values.
    pub total_sum: i32,
    /// How many rectified values are `>=` the threshold. The comparison is
    /// inclusive; off-by-one here inverts the boundary element.
    pub above_threshold_count: i32,
    /// Largest rectified value seen, or 0 for empty input.
    pub max_value: i32,
    /// Bitwise OR fold of the rectified values.
    pub combined_or: i32,
    /// Bitwise XOR fold of the rectified values.
    pub combined_xor: i32,
}

// ============================================================================
// Fused scan kernel
// ============================================================================

/// Fused scan into a caller-owned output buffer.
///
/// Rectifies `readings[i]` into `transformed[i]` and folds the five
/// reductions in the same pass. Accumulator updates per element happen in a
/// fixed order (sum, count, max, OR, XOR) after the store, so two scans of
/// the same input are bit-identical.
///
/// Panics if the buffer lengths differ — a mismatched output buffer is a
/// programming error, not a runtime condition.
#[inline]
pub fn scan_into(readings: &[i32], transformed: &mut [i32], threshold: i32) -> ScanSummary {
    assert_eq!(
        readings.len(),
        transformed.len(),
        "output buffer length must match input length"
    );

    let mut summary = ScanSummary::default();
    for (slot, &reading) in transformed.iter_mut().zip(readings) {
        let t = reading.wrapping_abs();
        *slot = t;
        summary.total_sum = summary.total_sum.wrapping_add(t);
        if t >= threshold {
            summary.above_threshold_count += 1;
        }
        if t > summary.max_value {
            summary.max_value = t;
        }
        summary.combined_or |= t;
        summary.combined_xor ^= t;
    }
    summary
}

/// Allocating wrapper: rectified vector plus the summary.
#[inline]
pub fn scan(readings: &[i32], threshold: i32) -> (Vec<i32>, ScanSummary) {
    let mut transformed = vec![0i32; readings.len()];
    let summary = scan_into(readings, &mut transformed, threshold);
    (transformed, summary)
}
