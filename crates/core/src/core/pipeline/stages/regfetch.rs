//! Register Fetch (RF) Stage.
//!
//! Second stage of the pipeline. RF propagates the fetched instruction's
//! common state and gates on the segment's cacheability: uncached
//! segments defer to the `UNC` helper, which performs the word fetch on
//! the bus and schedules the resume from IC. Register reads themselves
//! happen in EX, after forwarding has been applied.

use crate::core::pipeline::fault;
use crate::core::pipeline::stages::StageOutcome;
use crate::core::Cpu;

/// Executes the register fetch stage.
pub fn rf_stage(cpu: &mut Cpu) -> StageOutcome {
    cpu.pipeline.rfex_latch.common = cpu.pipeline.icrf_latch.common;

    if !cpu.pipeline.icrf_latch.segment.cached {
        fault::unc(cpu);
        return StageOutcome::Abort;
    }

    StageOutcome::Continue
}
