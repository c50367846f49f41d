//! Instruction decode tables.
//!
//! This module maps a raw 32-bit instruction word to its `Opcode`
//! descriptor. Decode is a pair of 64-entry escape tables in the hardware
//! manner: the primary opcode field selects either a main-table entry or,
//! for SPECIAL encodings, a function-field entry. Unimplemented encodings
//! resolve to the `Invalid` descriptor.

use crate::isa::opcodes::{Opcode, OpcodeId};
use crate::isa::opcodes::{BRANCH, LOAD, NEEDRS, NEEDRT, STORE};

const fn op(id: OpcodeId, flags: u32) -> Opcode {
    Opcode { id, flags }
}

const INVALID: Opcode = op(OpcodeId::Invalid, 0);

/// Main opcode table, indexed by instruction bits 31..26.
///
/// Index 0 (SPECIAL) is escaped to `SPECIAL_TABLE` by `decode` and never
/// read here.
static MAIN_TABLE: [Opcode; 64] = [
    // 0..7: SPECIAL, REGIMM, J, JAL, BEQ, BNE, BLEZ, BGTZ
    INVALID,
    INVALID,
    op(OpcodeId::J, BRANCH),
    op(OpcodeId::Jal, BRANCH),
    op(OpcodeId::Beq, NEEDRS | NEEDRT | BRANCH),
    op(OpcodeId::Bne, NEEDRS | NEEDRT | BRANCH),
    op(OpcodeId::Blez, NEEDRS | BRANCH),
    op(OpcodeId::Bgtz, NEEDRS | BRANCH),
    // 8..15: ADDI, ADDIU, SLTI, SLTIU, ANDI, ORI, XORI, LUI
    op(OpcodeId::Addi, NEEDRS),
    op(OpcodeId::Addiu, NEEDRS),
    op(OpcodeId::Slti, NEEDRS),
    op(OpcodeId::Sltiu, NEEDRS),
    op(OpcodeId::Andi, NEEDRS),
    op(OpcodeId::Ori, NEEDRS),
    op(OpcodeId::Xori, NEEDRS),
    op(OpcodeId::Lui, 0),
    // 16..23: COP0, COP1, COP2, -, BEQL, BNEL, BLEZL, BGTZL
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    op(OpcodeId::Beql, NEEDRS | NEEDRT | BRANCH),
    op(OpcodeId::Bnel, NEEDRS | NEEDRT | BRANCH),
    INVALID,
    INVALID,
    // 24..31: DADDI, DADDIU, LDL, LDR, -, -, -, -
    INVALID,
    op(OpcodeId::Daddiu, NEEDRS),
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    // 32..39: LB, LH, LWL, LW, LBU, LHU, LWR, LWU
    op(OpcodeId::Lb, NEEDRS | LOAD),
    op(OpcodeId::Lh, NEEDRS | LOAD),
    INVALID,
    op(OpcodeId::Lw, NEEDRS | LOAD),
    op(OpcodeId::Lbu, NEEDRS | LOAD),
    op(OpcodeId::Lhu, NEEDRS | LOAD),
    INVALID,
    op(OpcodeId::Lwu, NEEDRS | LOAD),
    // 40..47: SB, SH, SWL, SW, SDL, SDR, SWR, CACHE
    op(OpcodeId::Sb, NEEDRS | NEEDRT | STORE),
    op(OpcodeId::Sh, NEEDRS | NEEDRT | STORE),
    INVALID,
    op(OpcodeId::Sw, NEEDRS | NEEDRT | STORE),
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    // 48..55: LL, LWC1, LWC2, -, LLD, LDC1, LDC2, LD
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    // 56..63: SC, SWC1, SWC2, -, SCD, SDC1, SDC2, SD
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
];

/// SPECIAL function table, indexed by instruction bits 5..0.
static SPECIAL_TABLE: [Opcode; 64] = [
    // 0..7: SLL, -, SRL, SRA, SLLV, -, SRLV, SRAV
    op(OpcodeId::Sll, NEEDRT),
    INVALID,
    op(OpcodeId::Srl, NEEDRT),
    op(OpcodeId::Sra, NEEDRT),
    op(OpcodeId::Sllv, NEEDRS | NEEDRT),
    INVALID,
    op(OpcodeId::Srlv, NEEDRS | NEEDRT),
    op(OpcodeId::Srav, NEEDRS | NEEDRT),
    // 8..15: JR, JALR, -, -, SYSCALL, BREAK, -, SYNC
    op(OpcodeId::Jr, NEEDRS | BRANCH),
    op(OpcodeId::Jalr, NEEDRS | BRANCH),
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    // 16..23: MFHI, MTHI, MFLO, MTLO, DSLLV, -, DSRLV, DSRAV
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    // 24..31: MULT, MULTU, DIV, DIVU, DMULT, DMULTU, DDIV, DDIVU
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    // 32..39: ADD, ADDU, SUB, SUBU, AND, OR, XOR, NOR
    op(OpcodeId::Add, NEEDRS | NEEDRT),
    op(OpcodeId::Addu, NEEDRS | NEEDRT),
    op(OpcodeId::Sub, NEEDRS | NEEDRT),
    op(OpcodeId::Subu, NEEDRS | NEEDRT),
    op(OpcodeId::And, NEEDRS | NEEDRT),
    op(OpcodeId::Or, NEEDRS | NEEDRT),
    op(OpcodeId::Xor, NEEDRS | NEEDRT),
    op(OpcodeId::Nor, NEEDRS | NEEDRT),
    // 40..47: -, -, SLT, SLTU, DADD, DADDU, DSUB, DSUBU
    INVALID,
    INVALID,
    op(OpcodeId::Slt, NEEDRS | NEEDRT),
    op(OpcodeId::Sltu, NEEDRS | NEEDRT),
    INVALID,
    op(OpcodeId::Daddu, NEEDRS | NEEDRT),
    INVALID,
    op(OpcodeId::Dsubu, NEEDRS | NEEDRT),
    // 48..55: TGE, TGEU, TLT, TLTU, TEQ, -, TNE, -
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    // 56..63: DSLL, -, DSRL, DSRA, DSLL32, -, DSRL32, DSRA32
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
    INVALID,
];

/// Decodes an instruction word to its opcode descriptor.
///
/// The masked word `0` decodes to `SLL r0, r0, 0`, the NOP encoding the
/// delay-slot squash path relies on.
pub fn decode(iw: u32) -> &'static Opcode {
    let primary = (iw >> 26) as usize;
    if primary == 0 {
        &SPECIAL_TABLE[(iw & 0x3F) as usize]
    } else {
        &MAIN_TABLE[primary]
    }
}
