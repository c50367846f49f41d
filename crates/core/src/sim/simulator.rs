//! Simulator: owns the CPU and drives the tick loop.

use crate::config::Config;
use crate::core::Cpu;
use crate::soc::{Bus, Rdram};

/// Top-level simulator: CPU plus the system it is wired to.
pub struct Simulator {
    /// Processor state, pipeline included.
    pub cpu: Cpu,
}

impl Simulator {
    /// Creates a simulator with RDRAM attached per the configuration.
    pub fn new(config: &Config) -> Self {
        let mut bus = Bus::new();
        bus.add_device(Box::new(Rdram::new(
            config.memory.rdram_base,
            config.memory.rdram_size,
        )));

        Self {
            cpu: Cpu::new(bus, config),
        }
    }

    /// Creates a simulator around an externally assembled bus.
    pub fn with_bus(bus: Bus, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(bus, config),
        }
    }

    /// Advances the simulation by one pclock tick.
    pub fn tick(&mut self) {
        self.cpu.cycle();
    }

    /// Runs for `ticks` pclocks.
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.cpu.cycle();
        }
    }
}
