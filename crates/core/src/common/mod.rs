//! Common utilities and types used throughout the VR4300 simulator.
//!
//! This module provides fundamental building blocks shared across all
//! components of the simulator. It includes:
//! 1. **Constants:** Register indices, instruction field masks, exception
//!    vectors, and interlock delays.
//! 2. **Error Handling:** The pipeline fault taxonomy.
//! 3. **Register Management:** The general-purpose register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Pipeline fault definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::Fault;
pub use reg::RegisterFile;
