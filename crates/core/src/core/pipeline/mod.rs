//! Five-stage instruction pipeline.
//!
//! This module contains the implementation of the VR4300's in-order
//! pipeline. It includes the following components:
//! 1. **Latches:** Inter-stage buffers (IC/RF, RF/EX, EX/DC, DC/WB).
//! 2. **Stages:** The IC, RF, EX, DC, and WB stage functions.
//! 3. **Cycle Driver:** The fast path and the per-stage replay variants.
//! 4. **Fault Injector:** Helpers that record faults and schedule replays.
//!
//! Within a tick, stages run in reverse pipeline order (WB first, IC
//! last) so each stage reads its upstream latch before the upstream stage
//! overwrites it; the latches therefore need no double buffering.

/// Cycle driver and replay variants.
pub mod cycle;

/// Fault helpers.
pub mod fault;

/// Inter-stage pipeline latches.
pub mod latches;

/// Pipeline stage implementations.
pub mod stages;

use cycle::ResumePoint;
use latches::{DcwbLatch, ExdcLatch, IcrfLatch, RfexLatch};

pub use cycle::cycle;

/// Pipeline latches and control state.
pub struct Pipeline {
    /// IC to RF latch.
    pub icrf_latch: IcrfLatch,
    /// RF to EX latch.
    pub rfex_latch: RfexLatch,
    /// EX to DC latch.
    pub exdc_latch: ExdcLatch,
    /// DC to WB latch.
    pub dcwb_latch: DcwbLatch,

    /// Remaining ticks to consume before any stage runs.
    pub cycles_to_stall: u32,
    /// Ticks since a fault was last raised; drives `fault_present` decay.
    pub exception_history: u32,
    /// A recently raised fault may still be propagating through a latch.
    pub fault_present: bool,
    /// Entry point of the next tick while faults are in flight.
    pub skip_stages: ResumePoint,
}

impl Pipeline {
    /// Creates a pipeline in its initialized state: every latch and
    /// control field zeroed, the default segment in IC/RF and EX/DC.
    pub fn new() -> Self {
        Self {
            icrf_latch: IcrfLatch::default(),
            rfex_latch: RfexLatch::default(),
            exdc_latch: ExdcLatch::default(),
            dcwb_latch: DcwbLatch::default(),
            cycles_to_stall: 0,
            exception_history: 0,
            fault_present: false,
            skip_stages: ResumePoint::Wb,
        }
    }

    /// Re-initializes the pipeline to the state `new` produces.
    pub fn init(&mut self) {
        *self = Self::new();
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
