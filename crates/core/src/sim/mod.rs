//! Simulation plumbing around the CPU core.
//!
//! This module provides the pieces a host needs to run programs:
//! 1. **Loader:** Reads flat binaries from disk.
//! 2. **Simulator:** Owns the CPU and exposes the tick loop.

/// Binary loader.
pub mod loader;

/// Top-level simulator wrapper.
pub mod simulator;

pub use simulator::Simulator;
