//! Cycle driver and fault-recovery replay variants.
//!
//! One call to `cycle` advances the processor by one pclock. The fast
//! path runs all five stages back-to-back in reverse pipeline order; when
//! a fault is in flight the driver dispatches to the replay variant for
//! the stage that resolved, each of which squashes faulted latches by
//! copying the upstream common record instead of running the stage body.

use crate::common::constants::SIGNAL_COLD_RESET;
use crate::core::pipeline::fault;
use crate::core::pipeline::stages::{dc_stage, ex_stage, ic_stage, rf_stage, wb_stage};
use crate::core::Cpu;

/// Entry point of the next tick while a fault or interlock is resolving.
///
/// `Wb` doubles as the fast-path state: with no fault in flight the
/// driver skips the per-latch checks entirely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResumePoint {
    /// Full replay from WB (also the fast-path state).
    #[default]
    Wb,
    /// Resume from DC (WB resolved an interlock).
    Dc,
    /// Resume from EX (DC resolved an interlock).
    Ex,
    /// Resume from RF (EX resolved an interlock).
    Rf,
    /// Resume from IC (RF resolved an interlock).
    Ic,
    /// Resume from EX after patching the DC/WB latch with a completed
    /// read.
    ExFixDc,
}

/// Advances the processor pipeline by one pclock.
pub fn cycle(cpu: &mut Cpu) {
    cpu.stats.cycles += 1;

    // Stalling for an interlock, or we just took an exception.
    if cpu.pipeline.cycles_to_stall > 0 {
        cpu.pipeline.cycles_to_stall -= 1;
        cpu.stats.stall_cycles += 1;
        return;
    }

    // The reset exception outranks anything already active, except the
    // stall drained above. Keep that ordering.
    if cpu.signals & SIGNAL_COLD_RESET != 0 {
        fault::rst(cpu);
    }

    // Faults are rare; only walk the per-latch fault checks when one may
    // still be in flight.
    if cpu.pipeline.fault_present || cpu.pipeline.skip_stages != ResumePoint::Wb {
        match cpu.pipeline.skip_stages {
            ResumePoint::Wb => cycle_slow_wb(cpu),
            ResumePoint::Dc => cycle_slow_dc(cpu),
            ResumePoint::Ex => cycle_slow_ex(cpu),
            ResumePoint::Rf => cycle_slow_rf(cpu),
            ResumePoint::Ic => cycle_slow_ic(cpu),
            ResumePoint::ExFixDc => cycle_slow_ex_fixdc(cpu),
        }
        return;
    }

    if wb_stage(cpu).aborted() {
        return;
    }
    if dc_stage(cpu).aborted() {
        return;
    }
    if ex_stage(cpu).aborted() {
        return;
    }
    if rf_stage(cpu).aborted() {
        return;
    }
    if ic_stage(cpu).aborted() {}
}

/// Full replay: run every stage, squashing faulted latches.
fn cycle_slow_wb(cpu: &mut Cpu) {
    // Switch back to fast mode once a full pipeline length has passed
    // without a new fault.
    let history = cpu.pipeline.exception_history;
    cpu.pipeline.exception_history += 1;
    if history > 4 {
        cpu.pipeline.fault_present = false;
    }

    if cpu.pipeline.dcwb_latch.common.fault.is_none() {
        if wb_stage(cpu).aborted() {
            return;
        }
    } else {
        cpu.pipeline.dcwb_latch.common = cpu.pipeline.exdc_latch.common;
    }

    if cpu.pipeline.exdc_latch.common.fault.is_none() {
        if dc_stage(cpu).aborted() {
            return;
        }
    } else {
        cpu.pipeline.exdc_latch.common = cpu.pipeline.rfex_latch.common;
    }

    if cpu.pipeline.rfex_latch.common.fault.is_none() {
        if ex_stage(cpu).aborted() {
            return;
        }
    } else {
        cpu.pipeline.rfex_latch.common = cpu.pipeline.icrf_latch.common;
    }

    if cpu.pipeline.icrf_latch.common.fault.is_none() && rf_stage(cpu).aborted() {
        return;
    }

    if ic_stage(cpu).aborted() {}
}

/// Replay from DC (WB resolved an interlock).
fn cycle_slow_dc(cpu: &mut Cpu) {
    if cpu.pipeline.exdc_latch.common.fault.is_none() {
        if dc_stage(cpu).aborted() {
            return;
        }
    } else {
        cpu.pipeline.exdc_latch.common = cpu.pipeline.rfex_latch.common;
    }

    if cpu.pipeline.rfex_latch.common.fault.is_none() {
        if ex_stage(cpu).aborted() {
            return;
        }
    } else {
        cpu.pipeline.rfex_latch.common = cpu.pipeline.icrf_latch.common;
    }

    if cpu.pipeline.icrf_latch.common.fault.is_none() && rf_stage(cpu).aborted() {
        return;
    }

    if ic_stage(cpu).aborted() {
        return;
    }

    cpu.pipeline.skip_stages = ResumePoint::Wb;
}

/// Replay from EX (DC resolved an interlock).
fn cycle_slow_ex(cpu: &mut Cpu) {
    if cpu.pipeline.rfex_latch.common.fault.is_none() {
        if ex_stage(cpu).aborted() {
            return;
        }
    } else {
        cpu.pipeline.rfex_latch.common = cpu.pipeline.icrf_latch.common;
    }

    if cpu.pipeline.icrf_latch.common.fault.is_none() && rf_stage(cpu).aborted() {
        return;
    }

    if ic_stage(cpu).aborted() {
        return;
    }

    cpu.pipeline.skip_stages = ResumePoint::Wb;
}

/// Replay from EX, first patching the DC/WB latch with the completed
/// read.
///
/// The handler staged `exdc.result` as a keep-mask over the destination's
/// high bits; the reconstruction produces both zero- and sign-extended
/// alignments of the fetched word and merges them under that mask, which
/// factors alignment and extension out of the bus layer.
fn cycle_slow_ex_fixdc(cpu: &mut Cpu) {
    let request = cpu.pipeline.exdc_latch.request;
    let maskshift = request.size * 8;
    let datashift = (8 - request.size) * 8;

    let mut data = request.word as u32 as u64;
    let mut sdata = request.word as u32 as i32 as i64;
    let mask = cpu.pipeline.exdc_latch.result as i64;

    // Shall we sign extend? Size 8 keeps nothing.
    let mask = if maskshift < 64 {
        (mask >> maskshift) << maskshift
    } else {
        0
    };
    sdata = (sdata << datashift) >> datashift;
    data = (data << datashift) >> datashift;
    cpu.pipeline.dcwb_latch.result = ((sdata as u64) & (mask as u64)) | data;

    // Continue with the rest of the pipeline.
    if cpu.pipeline.rfex_latch.common.fault.is_none() {
        if ex_stage(cpu).aborted() {
            return;
        }
    } else {
        cpu.pipeline.rfex_latch.common = cpu.pipeline.icrf_latch.common;
    }

    if cpu.pipeline.icrf_latch.common.fault.is_none() && rf_stage(cpu).aborted() {
        return;
    }

    if ic_stage(cpu).aborted() {
        return;
    }

    cpu.pipeline.skip_stages = ResumePoint::Wb;
}

/// Replay from RF (EX resolved an interlock).
fn cycle_slow_rf(cpu: &mut Cpu) {
    if cpu.pipeline.icrf_latch.common.fault.is_none() && rf_stage(cpu).aborted() {
        return;
    }

    if ic_stage(cpu).aborted() {
        return;
    }

    cpu.pipeline.skip_stages = ResumePoint::Wb;
}

/// Replay from IC (RF resolved an interlock).
fn cycle_slow_ic(cpu: &mut Cpu) {
    if ic_stage(cpu).aborted() {
        return;
    }

    cpu.pipeline.skip_stages = ResumePoint::Wb;
}
