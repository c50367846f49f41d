//! Instruction set support.
//!
//! This module handles everything between a raw instruction word and the
//! execute stage. It includes:
//! 1. **Opcode Descriptors:** `Opcode { id, flags }` records and the
//!    handler dispatch table.
//! 2. **Decode:** Escape-table lookup from a 32-bit word to a descriptor.
//! 3. **Handlers:** The per-opcode execute functions.
//! 4. **Field Extraction:** Helpers for register, immediate, and target
//!    fields.

/// Instruction decode tables.
pub mod decode;

/// Opcode execute functions.
pub mod handlers;

/// Opcode identifiers, flags, and the handler table.
pub mod opcodes;

pub use decode::decode;
pub use opcodes::{Opcode, OpcodeId};

use crate::common::constants::{
    IMM_MASK, JUMP_TARGET_MASK, RD_SHIFT, REG_MASK, RS_SHIFT, RT_SHIFT, SA_SHIFT,
};

/// Extracts the `rs` register index.
#[inline(always)]
pub fn rs_field(iw: u32) -> usize {
    ((iw >> RS_SHIFT) & REG_MASK) as usize
}

/// Extracts the `rt` register index.
#[inline(always)]
pub fn rt_field(iw: u32) -> usize {
    ((iw >> RT_SHIFT) & REG_MASK) as usize
}

/// Extracts the `rd` register index.
#[inline(always)]
pub fn rd_field(iw: u32) -> usize {
    ((iw >> RD_SHIFT) & REG_MASK) as usize
}

/// Extracts the shift-amount field.
#[inline(always)]
pub fn sa_field(iw: u32) -> u32 {
    (iw >> SA_SHIFT) & REG_MASK
}

/// Extracts the 16-bit immediate, sign-extended to 64 bits.
#[inline(always)]
pub fn simm_field(iw: u32) -> i64 {
    (iw & IMM_MASK) as u16 as i16 as i64
}

/// Extracts the 16-bit immediate, zero-extended to 64 bits.
#[inline(always)]
pub fn uimm_field(iw: u32) -> u64 {
    (iw & IMM_MASK) as u64
}

/// Extracts the 26-bit jump target field.
#[inline(always)]
pub fn target_field(iw: u32) -> u64 {
    (iw & JUMP_TARGET_MASK) as u64
}
