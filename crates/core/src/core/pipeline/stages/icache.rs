//! Instruction Cache Fetch (IC) Stage.
//!
//! First stage of the pipeline. IC finalizes the decode pending in the
//! RF/EX latch (applying the squash mask a branch may have zeroed),
//! resolves the fetch PC against the current segment, and advances the
//! PC. Applying the mask here lets a branch retroactively nullify an
//! already-latched delay slot without the RF stage's involvement.

use crate::core::pipeline::fault;
use crate::core::pipeline::stages::StageOutcome;
use crate::core::Cpu;
use crate::isa::decode;
use crate::soc::segment::segment_lookup;

/// Executes the instruction fetch stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
///
/// # Behavior
///
/// - Latches the fetch PC into `icrf.common`.
/// - Masks `rfex.iw`, finalizes its decode, and resets the mask.
/// - On a segment miss, consults the segment map with the current CP0
///   Status; a lookup miss raises `IADE` and aborts without advancing
///   the PC.
/// - Clears the latch fault and advances the PC by one instruction.
pub fn ic_stage(cpu: &mut Cpu) -> StageOutcome {
    let pc = cpu.pipeline.icrf_latch.pc;
    cpu.pipeline.icrf_latch.common.pc = pc;

    // Finish decoding the instruction sitting in RF.
    let rfex = &mut cpu.pipeline.rfex_latch;
    rfex.iw &= rfex.iw_mask;
    rfex.opcode = *decode(rfex.iw);
    rfex.iw_mask = !0;

    let segment = cpu.pipeline.icrf_latch.segment;
    if pc.wrapping_sub(segment.start) > segment.length {
        let cp0_status = cpu.cp0.status();

        match segment_lookup(pc, cp0_status) {
            Some(segment) => cpu.pipeline.icrf_latch.segment = segment,
            None => {
                fault::iade(cpu);
                return StageOutcome::Abort;
            }
        }
    }

    if cpu.trace {
        eprintln!("IC  pc={:#018x}", pc);
    }

    cpu.pipeline.icrf_latch.common.fault = None;
    cpu.pipeline.icrf_latch.pc = pc.wrapping_add(4);
    StageOutcome::Continue
}
