//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the records carried between the five pipeline
//! stages: IC → RF → EX → DC → WB. It provides:
//! 1. **Common State:** The PC and fault marker every latch carries.
//! 2. **Stage Payloads:** Decode, bus request, and writeback fields.
//! 3. **Fault Propagation:** A faulted latch squashes its downstream
//!    stage; replay variants copy the marker forward instead of running
//!    the stage body.

use crate::common::constants::R0;
use crate::common::Fault;
use crate::isa::opcodes::Opcode;
use crate::soc::segment::{default_segment, Segment};

/// State shared by every latch: the instruction's PC and fault marker.
#[derive(Clone, Copy, Debug, Default)]
pub struct Common {
    /// Program counter of the instruction occupying the latch.
    pub pc: u64,
    /// Fault recorded against the instruction, if any.
    pub fault: Option<Fault>,
}

/// Kind of bus request staged by an opcode handler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestKind {
    /// No memory traffic.
    #[default]
    None,
    /// Word read (deferred through the data-cache-busy replay).
    Read,
    /// Word write, qualified by the DQM.
    Write,
}

/// A memory request travelling from execute to the data-cache stage.
#[derive(Clone, Copy, Debug, Default)]
pub struct BusRequest {
    /// Request kind.
    pub kind: RequestKind,
    /// Virtual address at issue; rewritten to a bus address by DC.
    pub address: u64,
    /// Store data at issue; load data after the read completes.
    pub word: u64,
    /// Access size in bytes (1..8).
    pub size: u32,
    /// Per-byte data-quality mask for writes.
    pub dqm: u32,
}

/// IC to RF latch.
#[derive(Clone, Copy, Debug)]
pub struct IcrfLatch {
    /// Common state of the instruction being fetched.
    pub common: Common,
    /// Segment the fetch PC currently resolves through.
    pub segment: &'static Segment,
    /// Fetch program counter.
    pub pc: u64,
}

impl Default for IcrfLatch {
    fn default() -> Self {
        Self {
            common: Common::default(),
            segment: default_segment(),
            pc: 0,
        }
    }
}

/// RF to EX latch.
///
/// `iw` is masked with `iw_mask` when IC finalizes the decode; a branch
/// that kills its delay slot zeroes the mask so the next finalize yields
/// the NOP encoding.
#[derive(Clone, Copy, Debug, Default)]
pub struct RfexLatch {
    /// Common state.
    pub common: Common,
    /// Decoded opcode descriptor.
    pub opcode: Opcode,
    /// Raw instruction word.
    pub iw: u32,
    /// Mask applied to `iw` at decode finalization.
    pub iw_mask: u32,
}

/// EX to DC latch.
#[derive(Clone, Copy, Debug)]
pub struct ExdcLatch {
    /// Common state.
    pub common: Common,
    /// Staged memory request, if the instruction issues one.
    pub request: BusRequest,
    /// Destination register index (R0 when nothing commits).
    pub dest: usize,
    /// Staged register result; doubles as the sign-keep mask for loads.
    pub result: u64,
    /// Segment the data address currently resolves through.
    pub segment: &'static Segment,
}

impl Default for ExdcLatch {
    fn default() -> Self {
        Self {
            common: Common::default(),
            request: BusRequest::default(),
            dest: R0,
            result: 0,
            segment: default_segment(),
        }
    }
}

/// DC to WB latch.
#[derive(Clone, Copy, Debug, Default)]
pub struct DcwbLatch {
    /// Common state.
    pub common: Common,
    /// Destination register index.
    pub dest: usize,
    /// Value writeback will commit.
    pub result: u64,
}
