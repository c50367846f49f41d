//! Pipeline fault definitions.
//!
//! This module defines the fault taxonomy carried through the pipeline
//! latches. It provides:
//! 1. **Fault Representation:** One variant per abortable pipeline event.
//! 2. **Error Handling:** Integration with the standard error traits for
//!    system-level reporting.

use std::fmt;

/// Pipeline faults raised by the stage functions and the cycle driver.
///
/// A latch whose `Common` record carries a fault squashes the downstream
/// stage for that instruction; the replay variants copy the marker forward
/// until it washes out of the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    /// Instruction address error.
    ///
    /// Raised when the fetch address is outside every translatable segment.
    Iade,

    /// Data address error.
    ///
    /// Raised when a load or store address is outside every translatable
    /// segment.
    Dade,

    /// Uncached segment fetch.
    ///
    /// Raised at RF when the fetch segment bypasses the instruction cache;
    /// the fault helper performs the word fetch on the bus.
    Unc,

    /// Load delay interlock.
    ///
    /// Raised at EX when a source register matches an in-flight load
    /// destination that has not yet reached writeback.
    Ldi,

    /// Data cache busy.
    ///
    /// Raised at DC while a read is serviced; the replay applies the
    /// load fix-up before resuming at EX.
    Dcb,

    /// Cold reset.
    ///
    /// Raised by the cycle driver when the reset signal is asserted.
    Rst,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Fault::Iade => "IADE (instruction address error)",
            Fault::Dade => "DADE (data address error)",
            Fault::Unc => "UNC (uncached fetch)",
            Fault::Ldi => "LDI (load delay interlock)",
            Fault::Dcb => "DCB (data cache busy)",
            Fault::Rst => "RST (cold reset)",
        };
        write!(f, "{}", name)
    }
}

impl std::error::Error for Fault {}
