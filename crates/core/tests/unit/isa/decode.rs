//! Decode Table Tests.
//!
//! Representative encodings map to the expected descriptors, the NOP
//! encoding resolves the way the squash path requires, and the handler
//! table stays aligned with the identifier order.

use vr4300_core::isa::opcodes::{
    HANDLER_TABLE, NUM_OPCODES, BRANCH, LOAD, NEEDRS, NEEDRT, STORE,
};
use vr4300_core::isa::{decode, OpcodeId};

#[test]
fn zero_word_decodes_as_the_nop_shift() {
    let opcode = decode(0);
    assert_eq!(opcode.id, OpcodeId::Sll);
}

#[test]
fn r_type_alu_needs_both_sources() {
    // ADDU r3, r1, r2
    let opcode = decode(0x0022_1821);
    assert_eq!(opcode.id, OpcodeId::Addu);
    assert_eq!(opcode.flags, NEEDRS | NEEDRT);
}

#[test]
fn i_type_alu_needs_rs_only() {
    // ADDIU r1, r0, 5
    let opcode = decode(0x2401_0005);
    assert_eq!(opcode.id, OpcodeId::Addiu);
    assert_eq!(opcode.flags, NEEDRS);
}

#[test]
fn lui_needs_nothing() {
    // LUI r4, 0xA000
    let opcode = decode(0x3C04_A000);
    assert_eq!(opcode.id, OpcodeId::Lui);
    assert_eq!(opcode.flags, 0);
}

#[test]
fn loads_and_stores_carry_their_class_bits() {
    // LW r5, 0x100(r4)
    let lw = decode(0x8C85_0100);
    assert_eq!(lw.id, OpcodeId::Lw);
    assert_eq!(lw.flags, NEEDRS | LOAD);

    // SW r3, 0x100(r4)
    let sw = decode(0xAC83_0100);
    assert_eq!(sw.id, OpcodeId::Sw);
    assert_eq!(sw.flags, NEEDRS | NEEDRT | STORE);
}

#[test]
fn branches_carry_the_branch_bit() {
    // BEQ r1, r2, +4
    let beq = decode(0x1022_0004);
    assert_eq!(beq.id, OpcodeId::Beq);
    assert_eq!(beq.flags, NEEDRS | NEEDRT | BRANCH);

    // J
    let j = decode(0x0800_0006);
    assert_eq!(j.id, OpcodeId::J);
    assert_eq!(j.flags, BRANCH);

    // JR r31
    let jr = decode(0x03E0_0008);
    assert_eq!(jr.id, OpcodeId::Jr);
    assert_eq!(jr.flags, NEEDRS | BRANCH);
}

#[test]
fn unimplemented_encodings_resolve_to_invalid() {
    // COP0 (op 16), LD (op 55), and a SPECIAL hole (MULT).
    assert_eq!(decode(0x4000_0000).id, OpcodeId::Invalid);
    assert_eq!(decode(0xDC00_0000).id, OpcodeId::Invalid);
    assert_eq!(decode(0x0000_0018).id, OpcodeId::Invalid);
}

#[test]
fn handler_table_covers_every_identifier() {
    assert_eq!(HANDLER_TABLE.len(), NUM_OPCODES);
    assert_eq!(OpcodeId::Xori as usize, NUM_OPCODES - 1);
}
