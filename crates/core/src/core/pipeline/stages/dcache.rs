//! Data Cache (DC) Stage.
//!
//! Fourth stage of the pipeline. DC propagates the instruction's result
//! and destination to writeback, resolves the data address against the
//! segment map, and services the staged bus request: writes go out
//! immediately, reads defer through the `DCB` replay so the fix-up can
//! apply alignment and sign extension.

use crate::core::pipeline::fault;
use crate::core::pipeline::latches::RequestKind;
use crate::core::pipeline::stages::StageOutcome;
use crate::core::Cpu;
use crate::soc::segment::segment_lookup;

/// Executes the data cache stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
///
/// # Behavior
///
/// - Copies `exdc` common/result/dest into the DC/WB latch.
/// - Returns immediately when no request is staged.
/// - Checks segment containment with the unsigned-delta rule, consulting
///   the segment map on a miss; a lookup miss raises `DADE` and aborts.
/// - Rewrites the request address into bus space by subtracting the
///   segment offset.
/// - Reads raise `DCB` and abort; the next replay applies the load
///   fix-up. Writes issue `write_word` with the request's DQM.
pub fn dc_stage(cpu: &mut Cpu) -> StageOutcome {
    let exdc = &cpu.pipeline.exdc_latch;
    cpu.pipeline.dcwb_latch.common = exdc.common;
    cpu.pipeline.dcwb_latch.result = exdc.result;
    cpu.pipeline.dcwb_latch.dest = exdc.dest;

    if cpu.pipeline.exdc_latch.request.kind == RequestKind::None {
        return StageOutcome::Continue;
    }

    let address = cpu.pipeline.exdc_latch.request.address;
    let mut segment = cpu.pipeline.exdc_latch.segment;

    if address.wrapping_sub(segment.start) > segment.length {
        let cp0_status = cpu.cp0.status();

        match segment_lookup(address, cp0_status) {
            Some(found) => segment = found,
            None => {
                fault::dade(cpu);
                return StageOutcome::Abort;
            }
        }
    }

    cpu.pipeline.exdc_latch.segment = segment;
    cpu.pipeline.exdc_latch.request.address = address.wrapping_sub(segment.offset);

    match cpu.pipeline.exdc_latch.request.kind {
        RequestKind::Read => {
            // Latency placeholder; the cache itself is not modeled.
            fault::dcb(cpu);
            StageOutcome::Abort
        }
        RequestKind::Write => {
            let request = cpu.pipeline.exdc_latch.request;
            if cpu.trace {
                eprintln!(
                    "DC  write addr={:#010x} word={:#010x} dqm={:#010x}",
                    request.address, request.word as u32, request.dqm
                );
            }
            cpu.bus
                .write_word(request.address, request.word as u32, request.dqm);
            cpu.stats.bus_writes += 1;
            StageOutcome::Continue
        }
        RequestKind::None => StageOutcome::Continue,
    }
}
