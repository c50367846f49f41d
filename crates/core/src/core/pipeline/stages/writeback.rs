//! Writeback (WB) Stage.
//!
//! Final stage of the pipeline. WB commits the DC/WB latch into the
//! register file unless the instruction carries a fault, and re-asserts
//! the zero register afterwards.

use crate::common::constants::R0;
use crate::core::pipeline::stages::StageOutcome;
use crate::core::Cpu;

/// Executes the writeback stage.
pub fn wb_stage(cpu: &mut Cpu) -> StageOutcome {
    let dcwb = cpu.pipeline.dcwb_latch;

    if dcwb.common.fault.is_some() {
        return StageOutcome::Continue;
    }

    if cpu.trace && dcwb.dest != R0 {
        eprintln!(
            "WB  pc={:#018x} r{} <= {:#018x}",
            dcwb.common.pc, dcwb.dest, dcwb.result
        );
    }

    cpu.regs.write(dcwb.dest, dcwb.result);
    cpu.regs.write(R0, 0);
    StageOutcome::Continue
}
