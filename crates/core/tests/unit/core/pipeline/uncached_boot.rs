//! Uncached Execution Tests.
//!
//! End-to-end run of a flat program through the kseg1 window: every
//! instruction word is supplied by the uncached fetch path (RF deferring
//! to `UNC`), stores reach RDRAM through the DQM write path, and loads
//! come back through the `DCB` fix-up replay.

use crate::common::harness::TestContext;

/// Flat test program, loaded at the base of RDRAM:
///
/// ```text
/// 0x00  ADDIU r1, r0, 5
/// 0x04  ADDIU r2, r0, 7
/// 0x08  ADDU  r3, r1, r2
/// 0x0C  LUI   r4, 0xA000        ; kseg1 base, sign-extended
/// 0x10  SW    r3, 0x100(r4)
/// 0x14  LW    r5, 0x100(r4)
/// 0x18  J     0xA000_0018       ; park in a self-loop
/// 0x1C  NOP
/// ```
const PROGRAM: [u32; 8] = [
    0x2401_0005,
    0x2402_0007,
    0x0022_1821,
    0x3C04_A000,
    0xAC83_0100,
    0x8C85_0100,
    0x0800_0006,
    0x0000_0000,
];

/// Generous budget: each uncached instruction costs a word-fetch stall
/// plus a handful of replay ticks.
const TICKS: u64 = 800;

#[test]
fn flat_program_executes_through_the_uncached_window() {
    let mut ctx = TestContext::cold();
    ctx.load_words(0, &PROGRAM);

    ctx.run(TICKS);

    assert_eq!(ctx.get_reg(1), 5);
    assert_eq!(ctx.get_reg(2), 7);
    assert_eq!(ctx.get_reg(3), 12, "ADDU over uncached operands");
    assert_eq!(ctx.get_reg(4), 0xFFFF_FFFF_A000_0000, "LUI sign-extends");
    assert_eq!(ctx.get_reg(0), 0);
}

#[test]
fn store_reaches_rdram_through_the_dqm_path() {
    let mut ctx = TestContext::cold();
    ctx.load_words(0, &PROGRAM);

    ctx.run(TICKS);

    assert_eq!(
        ctx.cpu_mut().bus.read_word(0x100),
        12,
        "SW through kseg1 lands at the bus address"
    );
    assert!(ctx.cpu().stats.bus_writes >= 1);
}

#[test]
fn load_returns_through_the_fixup_replay() {
    let mut ctx = TestContext::cold();
    ctx.load_words(0, &PROGRAM);

    ctx.run(TICKS);

    assert_eq!(ctx.get_reg(5), 12, "LW observes the earlier store");
    assert!(ctx.cpu().stats.dcb_stalls >= 1, "read went through DCB");
    assert!(ctx.cpu().stats.unc_fetches >= 8, "all fetches were uncached");
}
