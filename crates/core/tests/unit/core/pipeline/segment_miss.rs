//! Segment Miss Tests.
//!
//! Fetch and data addresses outside every translatable segment raise the
//! address-error faults, enter the exception through CP0, and redirect
//! fetch to the vector.

use crate::common::builder::ExdcBuilder;
use crate::common::harness::TestContext;
use vr4300_core::common::constants::{BOOT_GENERAL_VECTOR, EXCEPTION_DELAY};
use vr4300_core::common::Fault;
use vr4300_core::core::pipeline::cycle::ResumePoint;

/// An address in the sign-extended hole below kseg0; no segment covers
/// it.
const UNMAPPED_FETCH: u64 = 0xFFFF_FFFF_0000_0000;

// ══════════════════════════════════════════════════════════
// 1. Instruction address error
// ══════════════════════════════════════════════════════════

#[test]
fn ic_miss_raises_iade() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().pipeline.icrf_latch.pc = UNMAPPED_FETCH;

    ctx.run(1);

    assert_eq!(
        ctx.cpu().pipeline.icrf_latch.common.fault,
        Some(Fault::Iade)
    );
    assert_eq!(ctx.cpu().stats.iade_faults, 1);
    assert_eq!(ctx.cpu().pipeline.skip_stages, ResumePoint::Ic);
    assert_eq!(ctx.cpu().pipeline.cycles_to_stall, EXCEPTION_DELAY);
}

#[test]
fn ic_miss_does_not_advance_past_the_miss() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().pipeline.icrf_latch.pc = UNMAPPED_FETCH;

    ctx.run(1);

    let pc = ctx.cpu().pipeline.icrf_latch.pc;
    assert_ne!(pc, UNMAPPED_FETCH + 4, "PC must not step over the fault");
    assert_eq!(pc, BOOT_GENERAL_VECTOR, "fetch redirected to the vector");
    assert_eq!(ctx.cpu().cp0.epc, UNMAPPED_FETCH);
}

#[test]
fn fetch_resumes_at_the_vector() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().pipeline.icrf_latch.pc = UNMAPPED_FETCH;

    // Fault tick, exception drain, then the IC replay installs kseg1
    // for the boot vector and moves on.
    ctx.run(1 + EXCEPTION_DELAY as u64 + 1);

    assert!(ctx.cpu().pipeline.icrf_latch.common.fault.is_none());
    assert_eq!(ctx.cpu().pipeline.icrf_latch.pc, BOOT_GENERAL_VECTOR + 4);
    assert_eq!(ctx.cpu().pipeline.skip_stages, ResumePoint::Wb);
}

// ══════════════════════════════════════════════════════════
// 2. Data address error
// ══════════════════════════════════════════════════════════

#[test]
fn dc_miss_raises_dade_and_kills_the_pipeline() {
    let mut ctx = TestContext::new();
    // Store to kuseg: TLB-mapped, so the lookup misses.
    ctx.cpu_mut().pipeline.exdc_latch = ExdcBuilder::new()
        .pc(0xFFFF_FFFF_8000_0010)
        .write(0x1234, 0xAB, 1, 0xFF00_0000)
        .build();

    ctx.run(1);

    assert_eq!(
        ctx.cpu().pipeline.dcwb_latch.common.fault,
        Some(Fault::Dade),
        "faulted instruction must not commit"
    );
    assert_eq!(
        ctx.cpu().pipeline.exdc_latch.common.fault,
        Some(Fault::Dade)
    );
    assert_eq!(ctx.cpu().stats.dade_faults, 1);
    assert_eq!(ctx.cpu().pipeline.skip_stages, ResumePoint::Ic);
    assert_eq!((ctx.cpu().cp0.cause >> 2) & 0x1F, 5, "AdES for a write");
    assert_eq!(ctx.cpu().cp0.epc, 0xFFFF_FFFF_8000_0010);
    assert_eq!(ctx.cpu().stats.bus_writes, 0, "nothing reached the bus");
}
