//! System-on-chip components surrounding the CPU core.
//!
//! This module collects everything the pipeline reaches through its two
//! external contracts. It includes:
//! 1. **Segment Map:** Virtual-address windows onto bus space.
//! 2. **Bus:** Word-granular interconnect with byte-lane masking.
//! 3. **RDRAM:** The main memory device.

/// System bus and device trait.
pub mod bus;

/// RDRAM memory device.
pub mod memory;

/// Kernel segment map and lookup.
pub mod segment;

pub use bus::{Bus, Device};
pub use memory::Rdram;
pub use segment::{default_segment, segment_lookup, Segment};
