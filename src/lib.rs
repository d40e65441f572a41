//! # RustyScan
//!
//! `rustyscan` is a small fused-kernel crate: one pass over a slice of signed
//! 32-bit sensor readings rectifies every element (absolute value) and
//! simultaneously folds the rectified values into five scalars — sum,
//! threshold count, max, bitwise OR, bitwise XOR. A second step derives a
//! 1-bit parity from the XOR fold.
//!
//! The pass is integer-only and allocation-free (`scan_into` writes a
//! caller-owned buffer); `scan` is the allocating convenience wrapper.
//! `report` renders the fixed-order verification report the demo binary
//! prints.

pub mod parity;
pub mod report;
pub mod scan;

pub use parity::parity;
pub use report::format_report;
pub use scan::{scan, scan_into, ScanSummary};
