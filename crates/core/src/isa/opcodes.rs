//! Opcode identifiers, descriptor flags, and the handler table.
//!
//! This module defines the decode-side view of the instruction set. It
//! provides:
//! 1. **Flags:** Operand-need and classification bits consumed by the
//!    execute stage.
//! 2. **Identifiers:** One `OpcodeId` per implemented instruction, in the
//!    order of the handler table.
//! 3. **Dispatch:** `HANDLER_TABLE`, indexed by `OpcodeId`.

use crate::core::Cpu;
use crate::isa::handlers;

/// The instruction reads `rs` before execute.
pub const NEEDRS: u32 = 1 << 0;

/// The instruction reads `rt` before execute.
pub const NEEDRT: u32 = 1 << 1;

/// The instruction issues a bus read.
pub const LOAD: u32 = 1 << 2;

/// The instruction issues a bus write.
pub const STORE: u32 = 1 << 3;

/// The instruction may redirect the fetch PC.
pub const BRANCH: u32 = 1 << 4;

/// Identifier of an implemented opcode.
///
/// The discriminants index `HANDLER_TABLE`; keep the two in the same
/// order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpcodeId {
    /// Undecodable word; executes as a counted no-op.
    #[default]
    Invalid,
    Add,
    Addi,
    Addiu,
    Addu,
    And,
    Andi,
    Beq,
    Beql,
    Bgtz,
    Blez,
    Bne,
    Bnel,
    Daddiu,
    Daddu,
    Dsubu,
    J,
    Jal,
    Jalr,
    Jr,
    Lb,
    Lbu,
    Lh,
    Lhu,
    Lui,
    Lw,
    Lwu,
    Nor,
    Or,
    Ori,
    Sb,
    Sh,
    Sll,
    Sllv,
    Slt,
    Slti,
    Sltiu,
    Sltu,
    Sra,
    Srav,
    Srl,
    Srlv,
    Sub,
    Subu,
    Sw,
    Xor,
    Xori,
}

/// Number of opcode identifiers (and handler table entries).
pub const NUM_OPCODES: usize = 47;

/// Decoded opcode descriptor stored in the RF/EX latch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Opcode {
    /// Handler table index.
    pub id: OpcodeId,
    /// `NEEDRS`/`NEEDRT` and classification bits.
    pub flags: u32,
}

/// Signature of an opcode execute function.
///
/// Handlers receive the forwarded source operand values; they may write
/// the EX/DC latch (`request`, `dest`, `result`) and, for control flow,
/// the IC/RF fetch PC and the RF/EX decode mask.
pub type OpcodeHandler = fn(&mut Cpu, u64, u64);

/// Execute dispatch table, indexed by `OpcodeId`.
pub const HANDLER_TABLE: [OpcodeHandler; NUM_OPCODES] = [
    handlers::invalid,
    handlers::add,
    handlers::addi,
    handlers::addiu,
    handlers::addu,
    handlers::and,
    handlers::andi,
    handlers::beq,
    handlers::beql,
    handlers::bgtz,
    handlers::blez,
    handlers::bne,
    handlers::bnel,
    handlers::daddiu,
    handlers::daddu,
    handlers::dsubu,
    handlers::j,
    handlers::jal,
    handlers::jalr,
    handlers::jr,
    handlers::lb,
    handlers::lbu,
    handlers::lh,
    handlers::lhu,
    handlers::lui,
    handlers::lw,
    handlers::lwu,
    handlers::nor,
    handlers::or,
    handlers::ori,
    handlers::sb,
    handlers::sh,
    handlers::sll,
    handlers::sllv,
    handlers::slt,
    handlers::slti,
    handlers::sltiu,
    handlers::sltu,
    handlers::sra,
    handlers::srav,
    handlers::srl,
    handlers::srlv,
    handlers::sub,
    handlers::subu,
    handlers::sw,
    handlers::xor,
    handlers::xori,
];
