//! Kernel segment map and lookup.
//!
//! This module models the fixed (untranslated) portion of the VR4300
//! address map. It provides:
//! 1. **Segment Descriptors:** Windows `[start, start + length]` mapped to
//!    bus space by subtracting `offset`, with a cacheability flag.
//! 2. **Lookup:** Status-aware resolution of a virtual address to a
//!    segment; TLB-mapped regions are out of scope and miss.
//! 3. **Default Segment:** A zero-length descriptor used to prime the
//!    pipeline latches so the first access performs a real lookup.

use crate::core::cp0;

/// A virtual-address translation window.
///
/// An address `a` lies in the segment when `a - start <= length` under
/// unsigned arithmetic; its bus-space address is `a - offset`. Segments
/// live in a static table, so the pipeline holds plain `&'static`
/// references to them.
#[derive(Debug, PartialEq, Eq)]
pub struct Segment {
    /// First virtual address of the window.
    pub start: u64,
    /// Length of the window, minus one.
    pub length: u64,
    /// Subtracted from a virtual address to produce the bus address.
    pub offset: u64,
    /// Whether accesses go through the caches.
    pub cached: bool,
}

/// Zero-length segment installed at init; every real address misses it,
/// forcing a lookup on first use. Marked cached so the RF pass ahead of
/// that first lookup does not take the uncached fetch path.
static DEFAULT: Segment = Segment {
    start: 0,
    length: 0,
    offset: 0,
    cached: true,
};

/// Cached unmapped kernel segment (32-bit kseg0, sign-extended).
static KSEG0: Segment = Segment {
    start: 0xFFFF_FFFF_8000_0000,
    length: 0x1FFF_FFFF,
    offset: 0xFFFF_FFFF_8000_0000,
    cached: true,
};

/// Uncached unmapped kernel segment (32-bit kseg1, sign-extended).
static KSEG1: Segment = Segment {
    start: 0xFFFF_FFFF_A000_0000,
    length: 0x1FFF_FFFF,
    offset: 0xFFFF_FFFF_A000_0000,
    cached: false,
};

/// Returns the segment used to prime `icrf` and `exdc` at init.
pub fn default_segment() -> &'static Segment {
    &DEFAULT
}

/// Resolves a virtual address to a segment descriptor.
///
/// Only the unmapped kernel segments are modeled; kuseg, ksseg, and kseg3
/// require the TLB and always miss, as does any access to a kernel
/// segment from user mode.
///
/// # Arguments
///
/// * `address` - The virtual address to resolve.
/// * `cp0_status` - Current value of the CP0 Status register.
///
/// # Returns
///
/// The matching segment, or `None` when the address is untranslatable.
pub fn segment_lookup(address: u64, cp0_status: u32) -> Option<&'static Segment> {
    if !cp0::kernel_mode(cp0_status) {
        return None;
    }

    for segment in [&KSEG0, &KSEG1] {
        if address.wrapping_sub(segment.start) <= segment.length {
            return Some(segment);
        }
    }

    None
}
