//! Configuration system for the VR4300 simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline hardware constants (RDRAM size, boot PC).
//! 2. **Structures:** Hierarchical config for general and memory settings.
//!
//! Configuration is supplied via JSON from the CLI (`--config`) or use
//! `Config::default()`.

use serde::Deserialize;

/// Default configuration constants for the simulator.
mod defaults {
    /// Total size of RDRAM (8 MiB: base 4 MiB plus the expansion pak).
    pub const RDRAM_SIZE: usize = 8 * 1024 * 1024;

    /// Bus-space base address of RDRAM.
    pub const RDRAM_BASE: u64 = 0x0000_0000;

    /// Default boot PC: start of RDRAM through the uncached kseg1 window.
    ///
    /// Flat binaries are executed uncached; the fetch path of this engine
    /// generation only supplies instruction words through kseg1.
    pub const START_PC: u64 = 0xFFFF_FFFF_A000_0000;
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General simulation settings.
    pub general: GeneralConfig,
    /// Memory system settings.
    pub memory: MemoryConfig,
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Emit per-stage trace lines on stderr.
    pub trace: bool,
    /// Initial fetch PC (virtual address).
    pub start_pc: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace: false,
            start_pc: defaults::START_PC,
        }
    }
}

/// Memory system settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// RDRAM size in bytes.
    pub rdram_size: usize,
    /// RDRAM base address in bus space.
    pub rdram_base: u64,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            rdram_size: defaults::RDRAM_SIZE,
            rdram_base: defaults::RDRAM_BASE,
        }
    }
}
