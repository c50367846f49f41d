//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the VR4300 simulator. It
//! provides:
//! 1. **Cycle accounting:** Total ticks, stall ticks, and derived CPI.
//! 2. **Instruction mix:** Executed instruction counts by category.
//! 3. **Faults:** Per-kind fault and interlock counts.
//! 4. **Bus traffic:** Word reads and writes issued to the bus.

use std::time::Instant;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone)]
pub struct SimStats {
    start_time: Instant,
    /// Total processor ticks elapsed.
    pub cycles: u64,
    /// Ticks consumed by `cycles_to_stall` decrements.
    pub stall_cycles: u64,
    /// Instructions dispatched by the execute stage.
    pub instructions_executed: u64,

    /// Count of ALU instructions executed.
    pub inst_alu: u64,
    /// Count of load instructions executed.
    pub inst_load: u64,
    /// Count of store instructions executed.
    pub inst_store: u64,
    /// Count of branch and jump instructions executed.
    pub inst_branch: u64,
    /// Count of undecodable words executed as no-ops.
    pub inst_invalid: u64,

    /// Instruction address errors raised.
    pub iade_faults: u64,
    /// Data address errors raised.
    pub dade_faults: u64,
    /// Uncached instruction fetches performed.
    pub unc_fetches: u64,
    /// Load delay interlocks taken.
    pub ldi_interlocks: u64,
    /// Data cache busy stalls taken.
    pub dcb_stalls: u64,
    /// Cold resets serviced.
    pub resets: u64,

    /// Word reads issued on the bus.
    pub bus_reads: u64,
    /// Word writes issued on the bus.
    pub bus_writes: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            stall_cycles: 0,
            instructions_executed: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_invalid: 0,
            iade_faults: 0,
            dade_faults: 0,
            unc_fetches: 0,
            ldi_interlocks: 0,
            dcb_stalls: 0,
            resets: 0,
            bus_reads: 0,
            bus_writes: 0,
        }
    }
}

impl SimStats {
    /// Prints the end-of-run statistics report to stdout.
    pub fn print(&self) {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        let cpi = if self.instructions_executed > 0 {
            self.cycles as f64 / self.instructions_executed as f64
        } else {
            0.0
        };

        println!("==== Simulation Statistics ====");
        println!("Cycles:               {}", self.cycles);
        println!("  stalled:            {}", self.stall_cycles);
        println!("Instructions:         {}", self.instructions_executed);
        println!("  ALU:                {}", self.inst_alu);
        println!("  load:               {}", self.inst_load);
        println!("  store:              {}", self.inst_store);
        println!("  branch/jump:        {}", self.inst_branch);
        println!("  invalid (as nop):   {}", self.inst_invalid);
        println!("CPI:                  {:.2}", cpi);
        println!("Faults:");
        println!("  IADE: {}  DADE: {}  RST: {}", self.iade_faults, self.dade_faults, self.resets);
        println!(
            "  UNC fetches: {}  LDI: {}  DCB: {}",
            self.unc_fetches, self.ldi_interlocks, self.dcb_stalls
        );
        println!("Bus: {} reads, {} writes", self.bus_reads, self.bus_writes);
        println!("Wall time:            {:.3}s", elapsed);
    }
}
