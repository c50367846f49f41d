//! Execute (EX) Stage.
//!
//! Third stage of the pipeline. EX detects load-use interlocks against
//! the DC/WB latch, forwards the in-flight writeback value into the
//! register file with the swap-read-restore idiom, and dispatches the
//! opcode handler with the forwarded operands.

use crate::common::constants::R0;
use crate::core::pipeline::fault;
use crate::core::pipeline::latches::RequestKind;
use crate::core::pipeline::stages::StageOutcome;
use crate::core::Cpu;
use crate::isa::opcodes::{OpcodeId, BRANCH, HANDLER_TABLE, LOAD, NEEDRS, NEEDRT, STORE};
use crate::isa::{rs_field, rt_field};

/// Executes the execute stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
///
/// # Behavior
///
/// - Propagates `rfex.common` into the EX/DC latch.
/// - Drops the operand-need bits when no bus request is pending; they are
///   only observable while a memory instruction is in flight.
/// - Raises `LDI` and aborts when a needed source matches the in-flight
///   load destination.
/// - Forwards `dcwb.result` by temporarily writing it into the register
///   file, reading both sources, then restoring the slot (`r0` is forced
///   to zero inside the window so its forwarding is a no-op).
/// - Resets the outgoing request and destination, then dispatches the
///   opcode handler.
pub fn ex_stage(cpu: &mut Cpu) -> StageOutcome {
    cpu.pipeline.exdc_latch.common = cpu.pipeline.rfex_latch.common;

    let mut flags = cpu.pipeline.rfex_latch.opcode.flags;
    if cpu.pipeline.exdc_latch.request.kind == RequestKind::None {
        flags &= !(NEEDRS | NEEDRT);
    }

    let iw = cpu.pipeline.rfex_latch.iw;
    let rs = rs_field(iw);
    let rt = rt_field(iw);

    // Hold off execution if the source is still being loaded.
    let dest = cpu.pipeline.dcwb_latch.dest;
    if (dest == rs && flags & NEEDRS != 0) || (dest == rt && flags & NEEDRT != 0) {
        fault::ldi(cpu);
        return StageOutcome::Abort;
    }

    // No LDI, so just forward the DC/WB result through the register
    // file, restoring the slot after the reads.
    let temp = cpu.regs.read(dest);
    cpu.regs.write(dest, cpu.pipeline.dcwb_latch.result);
    cpu.regs.write(R0, 0);

    let rs_reg = cpu.regs.read(rs);
    let rt_reg = cpu.regs.read(rt);

    cpu.regs.write(dest, temp);

    let opcode = cpu.pipeline.rfex_latch.opcode;
    if cpu.trace {
        eprintln!(
            "EX  pc={:#018x} {:?}",
            cpu.pipeline.rfex_latch.common.pc, opcode.id
        );
    }

    cpu.stats.instructions_executed += 1;
    if opcode.id == OpcodeId::Invalid {
        cpu.stats.inst_invalid += 1;
    } else if opcode.flags & LOAD != 0 {
        cpu.stats.inst_load += 1;
    } else if opcode.flags & STORE != 0 {
        cpu.stats.inst_store += 1;
    } else if opcode.flags & BRANCH != 0 {
        cpu.stats.inst_branch += 1;
    } else {
        cpu.stats.inst_alu += 1;
    }

    cpu.pipeline.exdc_latch.dest = R0;
    cpu.pipeline.exdc_latch.request.kind = RequestKind::None;
    HANDLER_TABLE[opcode.id as usize](cpu, rs_reg, rt_reg);

    StageOutcome::Continue
}
