//! Floating-point helpers.
//!
//! Only the comparison primitive the condition-code path needs; the rest
//! of the FPU lives outside this crate.

/// Ordered double-precision comparisons.
pub mod cmp;

pub use cmp::{cmp_ole_64, cmp_olt_64};
