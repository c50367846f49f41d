//! VR4300 pipeline simulator library.
//!
//! This crate implements the instruction execution core of a cycle-accurate
//! VR4300 (MIPS III) simulator with the following:
//! 1. **Core:** Five-stage in-order pipeline (IC, RF, EX, DC, WB), latches,
//!    interlocks, fault replay, and CP0 system control.
//! 2. **ISA:** Decode table and opcode handlers for the integer subset.
//! 3. **SoC:** Kernel segment map, word bus with byte-lane masking, and RDRAM.
//! 4. **FPU:** The SIMD-backed ordered comparison primitive.
//! 5. **Simulation:** Loader, configuration, and statistics collection.

/// Common types and constants (registers, faults, delays, field masks).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (pipeline engine, fault injector, CP0).
pub mod core;
/// Floating-point comparison primitives.
pub mod fpu;
/// Instruction set (decode table, opcode descriptors, handlers).
pub mod isa;
/// Binary loader and simulator wrapper.
pub mod sim;
/// System-on-chip (segment map, bus, RDRAM).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds the register file, pipeline, CP0, and bus.
pub use crate::core::Cpu;
/// Top-level simulator wrapper; construct with `Simulator::new`.
pub use crate::sim::Simulator;
