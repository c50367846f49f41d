//! Cold Reset Tests.
//!
//! The reset signal is serviced at the tick boundary, ahead of every
//! stage, but only after any active stall has drained.

use crate::common::harness::TestContext;
use vr4300_core::common::constants::{RESET_VECTOR, SIGNAL_COLD_RESET};
use vr4300_core::common::Fault;
use vr4300_core::core::cp0::{STATUS_BEV, STATUS_ERL};
use vr4300_core::core::pipeline::cycle::ResumePoint;

#[test]
fn reset_is_serviced_before_any_stage() {
    let mut ctx = TestContext::new();
    ctx.queue_rfex(0x0022_1820); // ADD r3, r1, r2 would execute this tick
    ctx.set_reg(1, 1);
    ctx.cpu_mut().assert_cold_reset();

    ctx.run(1);

    assert_eq!(ctx.cpu().stats.resets, 1);
    assert_eq!(ctx.cpu().signals & SIGNAL_COLD_RESET, 0, "signal consumed");
    assert_eq!(
        ctx.cpu().stats.instructions_executed,
        0,
        "no stage ran ahead of the reset"
    );
}

#[test]
fn reset_squashes_the_pipeline_and_refetches_the_vector() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().assert_cold_reset();

    ctx.run(1);

    // The same tick's IC replay already fetched at the vector and
    // cleared the IC/RF marker; the downstream kills remain.
    assert_eq!(ctx.cpu().pipeline.icrf_latch.pc, RESET_VECTOR + 4);
    assert!(ctx.cpu().pipeline.icrf_latch.common.fault.is_none());
    assert_eq!(ctx.cpu().pipeline.rfex_latch.common.fault, Some(Fault::Rst));
    assert_eq!(ctx.cpu().pipeline.exdc_latch.common.fault, Some(Fault::Rst));
    assert_eq!(ctx.cpu().pipeline.dcwb_latch.common.fault, Some(Fault::Rst));
    assert_eq!(ctx.cpu().pipeline.skip_stages, ResumePoint::Wb);
    assert!(ctx.cpu().pipeline.fault_present);

    let status = ctx.cpu().cp0.status;
    assert_ne!(status & STATUS_ERL, 0);
    assert_ne!(status & STATUS_BEV, 0);
}

#[test]
fn stall_drains_before_reset_is_observed() {
    // The stall decrement ends the tick before the signal is inspected;
    // a stalling CPU ignores reset until the stall clears.
    let mut ctx = TestContext::new();
    ctx.cpu_mut().pipeline.cycles_to_stall = 2;
    ctx.cpu_mut().assert_cold_reset();

    ctx.run(1);
    assert_eq!(ctx.cpu().stats.resets, 0);
    assert_ne!(ctx.cpu().signals & SIGNAL_COLD_RESET, 0);

    ctx.run(1);
    assert_eq!(ctx.cpu().stats.resets, 0);

    ctx.run(1);
    assert_eq!(ctx.cpu().stats.resets, 1, "serviced once the stall drained");
}
