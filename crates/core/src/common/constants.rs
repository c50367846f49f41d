//! Common constants used throughout the simulator.

/// Register index of `r0`, which is hard-wired to zero.
pub const R0: usize = 0;

/// Register index of the link register (`ra`).
pub const RA: usize = 31;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 32;

/// Size of one instruction in bytes.
pub const INSTRUCTION_SIZE: u64 = 4;

/// Bit shift for the `rs` (first source) register field.
pub const RS_SHIFT: u32 = 21;

/// Bit shift for the `rt` (second source / I-type destination) register field.
pub const RT_SHIFT: u32 = 16;

/// Bit shift for the `rd` (R-type destination) register field.
pub const RD_SHIFT: u32 = 11;

/// Bit shift for the shift-amount field.
pub const SA_SHIFT: u32 = 6;

/// Bit mask for a 5-bit register or shift-amount field.
pub const REG_MASK: u32 = 0x1F;

/// Bit mask for the 16-bit immediate field.
pub const IMM_MASK: u32 = 0xFFFF;

/// Bit mask for the 26-bit jump target field.
pub const JUMP_TARGET_MASK: u32 = 0x03FF_FFFF;

/// Cold reset exception vector (kseg1, uncached boot space).
pub const RESET_VECTOR: u64 = 0xFFFF_FFFF_BFC0_0000;

/// General exception vector when `Status.BEV` is clear.
pub const GENERAL_VECTOR: u64 = 0xFFFF_FFFF_8000_0180;

/// General exception vector when `Status.BEV` is set (boot-time handlers).
pub const BOOT_GENERAL_VECTOR: u64 = 0xFFFF_FFFF_BFC0_0380;

/// Pipeline drain latency charged when an architectural exception is taken.
pub const EXCEPTION_DELAY: u32 = 2;

/// Stall charged for an uncached instruction word fetch.
///
/// Approximates the SysAD round trip for a single word; the true figure
/// depends on the device answering the fetch.
pub const MEMORY_WORD_DELAY: u32 = 38;

/// Stall charged while the data cache services a read.
///
/// Placeholder latency; the cache itself is not modeled.
pub const DCACHE_ACCESS_DELAY: u32 = 1;

/// External signal bit: cold reset asserted.
pub const SIGNAL_COLD_RESET: u32 = 0x1;
