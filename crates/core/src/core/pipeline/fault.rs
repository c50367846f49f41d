//! Fault helpers.
//!
//! Each helper records its fault kind in the latch the affected
//! instruction occupies, then schedules the replay: `cycles_to_stall`,
//! the `ResumePoint` for the stage that will resolve, `fault_present`,
//! and a zeroed `exception_history`. Interlock markers are placed so the
//! squash-copy chain of the replay variants washes them out; address
//! errors mark the writeback latch so the faulted instruction never
//! commits, and additionally enter the exception through CP0.

use crate::common::constants::{
    DCACHE_ACCESS_DELAY, EXCEPTION_DELAY, MEMORY_WORD_DELAY, SIGNAL_COLD_RESET,
};
use crate::common::Fault;
use crate::core::cp0::ExceptionCode;
use crate::core::pipeline::cycle::ResumePoint;
use crate::core::pipeline::latches::RequestKind;
use crate::core::Cpu;
use crate::soc::segment::default_segment;

/// Shared replay bookkeeping applied by every fault helper.
fn interlock(cpu: &mut Cpu, cycles_to_stall: u32, resume: ResumePoint) {
    let pipeline = &mut cpu.pipeline;
    pipeline.cycles_to_stall = cycles_to_stall;
    pipeline.skip_stages = resume;
    pipeline.fault_present = true;
    pipeline.exception_history = 0;
}

/// IADE: instruction address error (IC segment miss).
///
/// Enters the exception through CP0 and redirects the fetch PC to the
/// vector; the faulting fetch never advances past the miss.
pub fn iade(cpu: &mut Cpu) {
    cpu.stats.iade_faults += 1;

    let pc = cpu.pipeline.icrf_latch.pc;
    cpu.pipeline.icrf_latch.common.fault = Some(Fault::Iade);

    let vector = cpu.cp0.enter_exception(ExceptionCode::AddressErrorLoad, pc);
    cpu.pipeline.icrf_latch.pc = vector;

    if cpu.trace {
        eprintln!("IADE pc={:#018x} -> vector={:#018x}", pc, vector);
    }

    interlock(cpu, EXCEPTION_DELAY, ResumePoint::Ic);
}

/// DADE: data address error (DC segment miss).
///
/// Marks the writeback latch so the instruction never commits, kills the
/// younger instructions behind it, and enters the exception through CP0.
pub fn dade(cpu: &mut Cpu) {
    cpu.stats.dade_faults += 1;

    let epc = cpu.pipeline.exdc_latch.common.pc;
    let code = if cpu.pipeline.exdc_latch.request.kind == RequestKind::Write {
        ExceptionCode::AddressErrorStore
    } else {
        ExceptionCode::AddressErrorLoad
    };

    cpu.pipeline.dcwb_latch.common.fault = Some(Fault::Dade);
    cpu.pipeline.exdc_latch.common.fault = Some(Fault::Dade);
    cpu.pipeline.rfex_latch.common.fault = Some(Fault::Dade);
    cpu.pipeline.icrf_latch.common.fault = Some(Fault::Dade);

    let vector = cpu.cp0.enter_exception(code, epc);
    cpu.pipeline.icrf_latch.pc = vector;

    if cpu.trace {
        eprintln!("DADE pc={:#018x} -> vector={:#018x}", epc, vector);
    }

    interlock(cpu, EXCEPTION_DELAY, ResumePoint::Ic);
}

/// UNC: uncached instruction fetch observed at RF.
///
/// Performs the word fetch on the bus (the sole instruction-supply path
/// of this engine generation) and resumes from IC so the fetched word is
/// decode-finalized next tick.
pub fn unc(cpu: &mut Cpu) {
    cpu.stats.unc_fetches += 1;
    cpu.stats.bus_reads += 1;

    let segment = cpu.pipeline.icrf_latch.segment;
    let address = cpu
        .pipeline
        .icrf_latch
        .common
        .pc
        .wrapping_sub(segment.offset);

    let word = cpu.bus.read_word(address);
    cpu.pipeline.rfex_latch.iw = word;
    cpu.pipeline.icrf_latch.common.fault = Some(Fault::Unc);

    if cpu.trace {
        eprintln!(
            "UNC fetch addr={:#010x} iw={:#010x}",
            address, word
        );
    }

    interlock(cpu, MEMORY_WORD_DELAY, ResumePoint::Ic);
}

/// LDI: load delay interlock raised at EX.
///
/// The dependent instruction replays from RF once the load has cleared
/// writeback. The load's request has been serviced by this point; drop
/// it so the replayed EX sees a clean latch instead of re-raising the
/// interlock.
pub fn ldi(cpu: &mut Cpu) {
    cpu.stats.ldi_interlocks += 1;
    cpu.pipeline.exdc_latch.request.kind = RequestKind::None;
    cpu.pipeline.exdc_latch.common.fault = Some(Fault::Ldi);
    interlock(cpu, 0, ResumePoint::Rf);
}

/// DCB: data cache busy, raised for every read at DC.
///
/// Performs the bus read, aligns the addressed bytes into the low lanes
/// of `request.word`, and schedules the fix-up replay that applies the
/// extension mask.
pub fn dcb(cpu: &mut Cpu) {
    cpu.stats.dcb_stalls += 1;
    cpu.stats.bus_reads += 1;

    let request = cpu.pipeline.exdc_latch.request;
    let word = cpu.bus.read_word(request.address);

    // Big-endian lane extraction; naturally aligned accesses only.
    let lane = 8 * (4u64
        .saturating_sub(u64::from(request.size.min(4)))
        .saturating_sub(request.address & 0x3)) as u32;

    cpu.pipeline.exdc_latch.request.word = u64::from(word >> lane);
    cpu.pipeline.exdc_latch.common.fault = Some(Fault::Dcb);

    if cpu.trace {
        eprintln!(
            "DCB read addr={:#010x} word={:#010x}",
            request.address, word
        );
    }

    interlock(cpu, DCACHE_ACCESS_DELAY, ResumePoint::ExFixDc);
}

/// RST: cold reset.
///
/// Squashes everything in flight, applies the CP0 cold-reset sequence,
/// and restarts fetch at the reset vector through a fresh segment
/// lookup.
pub fn rst(cpu: &mut Cpu) {
    cpu.stats.resets += 1;
    cpu.signals &= !SIGNAL_COLD_RESET;

    let pc = cpu.pipeline.icrf_latch.pc;
    let vector = cpu.cp0.cold_reset(pc);

    cpu.pipeline.icrf_latch.common.fault = Some(Fault::Rst);
    cpu.pipeline.rfex_latch.common.fault = Some(Fault::Rst);
    cpu.pipeline.exdc_latch.common.fault = Some(Fault::Rst);
    cpu.pipeline.dcwb_latch.common.fault = Some(Fault::Rst);

    cpu.pipeline.icrf_latch.pc = vector;
    cpu.pipeline.icrf_latch.segment = default_segment();

    if cpu.trace {
        eprintln!("RST -> vector={:#018x}", vector);
    }

    interlock(cpu, 0, ResumePoint::Ic);
}
