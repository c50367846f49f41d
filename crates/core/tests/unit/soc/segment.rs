//! Segment Map Tests.
//!
//! The unmapped kernel windows resolve with the right cacheability and
//! offsets; TLB-mapped space and user-mode accesses miss.

use vr4300_core::core::cp0::{STATUS_ERL, STATUS_EXL};
use vr4300_core::soc::segment::{default_segment, segment_lookup};

/// Kernel-mode Status word (ERL set, as at cold reset).
const KERNEL: u32 = STATUS_ERL;

/// User-mode Status word (KSU = 10, EXL/ERL clear).
const USER: u32 = 0x10;

#[test]
fn kseg0_is_cached_and_offset_maps_to_bus_zero() {
    let segment = segment_lookup(0xFFFF_FFFF_8000_1234, KERNEL).expect("kseg0");
    assert!(segment.cached);
    assert_eq!(0xFFFF_FFFF_8000_1234 - segment.offset, 0x1234);
}

#[test]
fn kseg1_is_uncached_and_offset_maps_to_bus_zero() {
    let segment = segment_lookup(0xFFFF_FFFF_A000_1234, KERNEL).expect("kseg1");
    assert!(!segment.cached);
    assert_eq!(0xFFFF_FFFF_A000_1234 - segment.offset, 0x1234);
}

#[test]
fn segment_bounds_are_inclusive() {
    assert!(segment_lookup(0xFFFF_FFFF_8000_0000, KERNEL).is_some());
    assert!(segment_lookup(0xFFFF_FFFF_9FFF_FFFF, KERNEL).is_some());
    assert!(segment_lookup(0xFFFF_FFFF_BFFF_FFFF, KERNEL).is_some());
}

#[test]
fn mapped_space_misses() {
    // kuseg and ksseg/kseg3 need the TLB.
    assert!(segment_lookup(0x0000_0000_0000_1000, KERNEL).is_none());
    assert!(segment_lookup(0xFFFF_FFFF_C000_0000, KERNEL).is_none());
    assert!(segment_lookup(0xFFFF_FFFF_E000_0000, KERNEL).is_none());
}

#[test]
fn user_mode_cannot_reach_kernel_segments() {
    assert!(segment_lookup(0xFFFF_FFFF_8000_0000, USER).is_none());
    assert!(
        segment_lookup(0xFFFF_FFFF_8000_0000, USER | STATUS_EXL).is_some(),
        "EXL restores kernel access"
    );
}

#[test]
fn default_segment_misses_everything() {
    let segment = default_segment();
    // The containment rule the stages use: delta > length means miss.
    assert!(0xFFFF_FFFF_A000_0000u64.wrapping_sub(segment.start) > segment.length);
    assert!(4u64.wrapping_sub(segment.start) > segment.length);
}
