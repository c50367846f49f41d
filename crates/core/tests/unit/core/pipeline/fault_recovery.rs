//! Fault Recovery Tests.
//!
//! The slow path stays armed while a fault may be propagating: faulted
//! latches squash their downstream stage and the marker washes forward
//! one stage per tick, and `fault_present` decays after a fault-free
//! stretch of full replays.

use crate::common::harness::TestContext;
use vr4300_core::common::Fault;
use vr4300_core::core::pipeline::cycle::ResumePoint;

/// ADDIU r9, r0, 0x55
const ADDIU_R9: u32 = 0x2409_0055;

#[test]
fn fault_present_decays_after_a_quiet_stretch() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().pipeline.fault_present = true;
    ctx.cpu_mut().pipeline.exception_history = 0;

    ctx.run(4);
    assert!(
        ctx.cpu().pipeline.fault_present,
        "still armed inside the pipeline-length window"
    );

    ctx.run(1);
    assert!(ctx.cpu().pipeline.fault_present, "boundary tick still armed");

    ctx.run(1);
    assert!(
        !ctx.cpu().pipeline.fault_present,
        "cleared once the history count exceeds the pipeline length"
    );
    assert_eq!(ctx.cpu().pipeline.skip_stages, ResumePoint::Wb);
}

#[test]
fn faulted_latch_squashes_its_stage_and_washes_out() {
    let mut ctx = TestContext::new();
    ctx.queue_rfex(ADDIU_R9);
    ctx.cpu_mut().pipeline.rfex_latch.common.fault = Some(Fault::Dade);
    ctx.cpu_mut().pipeline.fault_present = true;

    ctx.run(1);

    assert!(
        ctx.cpu().pipeline.rfex_latch.common.fault.is_none(),
        "marker replaced by the upstream common record"
    );
    assert_eq!(ctx.get_reg(9), 0, "squashed instruction did not execute");
    assert_eq!(ctx.cpu().stats.instructions_executed, 0);
}

#[test]
fn a_new_fault_rearms_the_history_window() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().pipeline.fault_present = true;

    ctx.run(3);
    // An IADE in the middle of the quiet stretch restarts the count.
    ctx.cpu_mut().pipeline.icrf_latch.pc = 0xFFFF_FFFF_0000_0000;
    ctx.run(1);
    assert_eq!(ctx.cpu().pipeline.exception_history, 0);

    ctx.run(6);
    assert!(
        ctx.cpu().pipeline.fault_present,
        "stall and IC replay ticks do not advance the history"
    );
}
