//! CPU core: architectural state and the pipeline engine.
//!
//! This module aggregates everything the per-tick engine mutates. It
//! includes:
//! 1. **Cpu:** The owned aggregate of register file, CP0, pipeline
//!    latches, bus, and statistics.
//! 2. **CP0:** System control registers and exception entry.
//! 3. **Pipeline:** The five stage functions, the cycle driver, and the
//!    fault injector.

/// CP0 system control registers.
pub mod cp0;

/// Five-stage pipeline engine.
pub mod pipeline;

use crate::common::constants::SIGNAL_COLD_RESET;
use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::cp0::Cp0;
use crate::core::pipeline::Pipeline;
use crate::soc::Bus;
use crate::stats::SimStats;

/// The VR4300 processor state.
///
/// The only long-lived mutable state of the simulator; owned by the
/// caller and passed by exclusive reference into the cycle driver.
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// System control coprocessor.
    pub cp0: Cp0,
    /// Pipeline latches and control state.
    pub pipeline: Pipeline,
    /// System bus.
    pub bus: Bus,
    /// Externally asserted signal bits (cold reset).
    pub signals: u32,
    /// Simulation statistics.
    pub stats: SimStats,
    /// Emit per-stage trace lines on stderr.
    pub trace: bool,
}

impl Cpu {
    /// Creates a CPU with an initialized pipeline fetching at the
    /// configured start PC.
    pub fn new(bus: Bus, config: &Config) -> Self {
        let mut pipeline = Pipeline::new();
        pipeline.icrf_latch.pc = config.general.start_pc;

        Self {
            regs: RegisterFile::new(),
            cp0: Cp0::new(),
            pipeline,
            bus,
            signals: 0,
            stats: SimStats::default(),
            trace: config.general.trace,
        }
    }

    /// Advances the processor by one pclock tick.
    pub fn cycle(&mut self) {
        pipeline::cycle::cycle(self);
    }

    /// Asserts the cold-reset signal; serviced at the next tick boundary.
    pub fn assert_cold_reset(&mut self) {
        self.signals |= SIGNAL_COLD_RESET;
    }

    /// Dumps the register file and fetch PC to stdout.
    pub fn dump_state(&self) {
        println!("PC = {:#018x}", self.pipeline.icrf_latch.pc);
        let r = self.regs.dump();
        for i in (0..r.len()).step_by(2) {
            println!(
                "r{:<2} = {:#018x}    r{:<2} = {:#018x}",
                i,
                r[i],
                i + 1,
                r[i + 1]
            );
        }
    }
}
