//! CP0 system control coprocessor.
//!
//! The slice of CP0 the pipeline's fault helpers touch: the Status word
//! consumed by the segment lookup, and the Cause/EPC bookkeeping of
//! exception entry. It provides:
//! 1. **Status Fields:** IE/EXL/ERL/KSU/BEV bit definitions.
//! 2. **Exception Entry:** EPC and cause-code capture, EXL, and vector
//!    selection.
//! 3. **Reset:** Cold-reset register state.

use crate::common::constants::{BOOT_GENERAL_VECTOR, GENERAL_VECTOR, RESET_VECTOR};

/// Status: global interrupt enable.
pub const STATUS_IE: u32 = 1 << 0;

/// Status: exception level (set on exception entry).
pub const STATUS_EXL: u32 = 1 << 1;

/// Status: error level (set on reset).
pub const STATUS_ERL: u32 = 1 << 2;

/// Status: mode field (00 = kernel, 01 = supervisor, 10 = user).
pub const STATUS_KSU_MASK: u32 = 0x18;

/// Status: bootstrap exception vectors.
pub const STATUS_BEV: u32 = 1 << 22;

/// Cause: exception code field.
pub const CAUSE_EXC_MASK: u32 = 0x7C;

/// Shift of the exception code within Cause.
pub const CAUSE_EXC_SHIFT: u32 = 2;

/// Architectural exception codes recorded in Cause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExceptionCode {
    /// Address error on load or instruction fetch (AdEL).
    AddressErrorLoad = 4,
    /// Address error on store (AdES).
    AddressErrorStore = 5,
}

/// Returns whether the Status word grants kernel address-space access.
///
/// Kernel mode holds when the KSU field is zero or either of EXL/ERL is
/// set.
#[inline]
pub fn kernel_mode(status: u32) -> bool {
    status & STATUS_KSU_MASK == 0 || status & (STATUS_EXL | STATUS_ERL) != 0
}

/// The system control registers the pipeline interacts with.
#[derive(Clone, Debug)]
pub struct Cp0 {
    /// Status register.
    pub status: u32,
    /// Cause register.
    pub cause: u32,
    /// Exception program counter.
    pub epc: u64,
    /// Error exception program counter (reset, NMI).
    pub error_epc: u64,
}

impl Cp0 {
    /// Creates CP0 in its cold-reset state.
    pub fn new() -> Self {
        Self {
            status: STATUS_ERL | STATUS_BEV,
            cause: 0,
            epc: 0,
            error_epc: 0,
        }
    }

    /// Returns the current Status word.
    #[inline]
    pub fn status(&self) -> u32 {
        self.status
    }

    /// Records an architectural exception and returns its vector.
    ///
    /// EPC is captured only when EXL is clear (nested exceptions keep the
    /// original return point), the cause code replaces the previous one,
    /// and EXL is raised.
    pub fn enter_exception(&mut self, code: ExceptionCode, epc: u64) -> u64 {
        if self.status & STATUS_EXL == 0 {
            self.epc = epc;
        }
        self.status |= STATUS_EXL;
        self.cause = (self.cause & !CAUSE_EXC_MASK) | ((code as u32) << CAUSE_EXC_SHIFT);

        if self.status & STATUS_BEV != 0 {
            BOOT_GENERAL_VECTOR
        } else {
            GENERAL_VECTOR
        }
    }

    /// Applies the cold-reset sequence and returns the reset vector.
    pub fn cold_reset(&mut self, pc: u64) -> u64 {
        self.error_epc = pc;
        self.status = STATUS_ERL | STATUS_BEV;
        RESET_VECTOR
    }
}

impl Default for Cp0 {
    fn default() -> Self {
        Self::new()
    }
}
