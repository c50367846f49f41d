//! Ordered Comparison Tests.
//!
//! The ordered predicates must agree with scalar IEEE comparisons,
//! including the NaN cases where every ordered comparison is false.

use vr4300_core::fpu::{cmp_ole_64, cmp_olt_64};

fn bits(x: f64) -> u64 {
    x.to_bits()
}

#[test]
fn ole_on_ordinary_values() {
    assert!(cmp_ole_64(bits(1.0), bits(2.0)));
    assert!(cmp_ole_64(bits(2.0), bits(2.0)));
    assert!(!cmp_ole_64(bits(3.0), bits(2.0)));
    assert!(cmp_ole_64(bits(-1.5), bits(0.0)));
}

#[test]
fn olt_on_ordinary_values() {
    assert!(cmp_olt_64(bits(1.0), bits(2.0)));
    assert!(!cmp_olt_64(bits(2.0), bits(2.0)));
    assert!(!cmp_olt_64(bits(3.0), bits(2.0)));
}

#[test]
fn nan_operands_compare_false() {
    let nan = bits(f64::NAN);
    assert!(!cmp_ole_64(nan, bits(1.0)));
    assert!(!cmp_ole_64(bits(1.0), nan));
    assert!(!cmp_ole_64(nan, nan));
    assert!(!cmp_olt_64(nan, bits(1.0)));
    assert!(!cmp_olt_64(bits(1.0), nan));
}

#[test]
fn signed_zeros_are_equal() {
    assert!(cmp_ole_64(bits(-0.0), bits(0.0)));
    assert!(cmp_ole_64(bits(0.0), bits(-0.0)));
    assert!(!cmp_olt_64(bits(-0.0), bits(0.0)));
}

#[test]
fn infinities_order_correctly() {
    assert!(cmp_olt_64(bits(f64::NEG_INFINITY), bits(f64::INFINITY)));
    assert!(cmp_ole_64(bits(f64::INFINITY), bits(f64::INFINITY)));
    assert!(!cmp_olt_64(bits(f64::INFINITY), bits(1.0)));
}
