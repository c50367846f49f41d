
pub use latch_state::{DcwbBuilder, ExdcBuilder, RfexBuilder};
