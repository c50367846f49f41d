//! Opcode execute functions.
//!
//! One function per `OpcodeId`, dispatched by the execute stage through
//! `HANDLER_TABLE` with the forwarded `rs`/`rt` operand values. Results
//! are staged in the EX/DC latch and committed by writeback; nothing here
//! touches the register file directly. Branch handlers redirect the fetch
//! PC in the IC/RF latch, and the likely variants zero the decode mask to
//! squash their delay slot when not taken.

use crate::common::constants::{INSTRUCTION_SIZE, RA};
use crate::core::pipeline::latches::{BusRequest, RequestKind};
use crate::core::Cpu;
use crate::isa::{rd_field, rt_field, sa_field, simm_field, target_field, uimm_field};

/// Stages a register result for writeback.
#[inline]
fn set_result(cpu: &mut Cpu, dest: usize, result: u64) {
    cpu.pipeline.exdc_latch.dest = dest;
    cpu.pipeline.exdc_latch.result = result;
}

/// Computes the taken target of a PC-relative branch.
#[inline]
fn branch_target(cpu: &Cpu) -> u64 {
    let iw = cpu.pipeline.rfex_latch.iw;
    let base = cpu.pipeline.rfex_latch.common.pc.wrapping_add(INSTRUCTION_SIZE);
    base.wrapping_add((simm_field(iw) << 2) as u64)
}

/// Redirects the fetch PC.
#[inline]
fn take_branch(cpu: &mut Cpu, target: u64) {
    cpu.pipeline.icrf_latch.pc = target;
}

/// Nullifies the delay slot of a branch-likely instruction.
#[inline]
fn squash_delay_slot(cpu: &mut Cpu) {
    cpu.pipeline.rfex_latch.iw_mask = 0;
}

/// Stages a bus read; `keep_mask` selects sign extension in the fix-up.
#[inline]
fn load(cpu: &mut Cpu, rs: u64, size: u32, keep_mask: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    let address = rs.wrapping_add(simm_field(iw) as u64);

    cpu.pipeline.exdc_latch.request = BusRequest {
        kind: RequestKind::Read,
        address,
        word: 0,
        size,
        dqm: !0,
    };
    cpu.pipeline.exdc_latch.dest = rt_field(iw);
    cpu.pipeline.exdc_latch.result = keep_mask;
}

/// Stages a bus write of the low `size` bytes of `rt`.
#[inline]
fn store(cpu: &mut Cpu, rs: u64, rt: u64, size: u32) {
    let iw = cpu.pipeline.rfex_latch.iw;
    let address = rs.wrapping_add(simm_field(iw) as u64);

    // Big-endian byte lanes; naturally aligned accesses only.
    let lane = 8 * (4u64.saturating_sub(u64::from(size)).saturating_sub(address & 0x3)) as u32;
    let value_mask = (!0u32).wrapping_shr(32 - size * 8);

    cpu.pipeline.exdc_latch.request = BusRequest {
        kind: RequestKind::Write,
        address,
        word: u64::from(((rt as u32) & value_mask) << lane),
        size,
        dqm: value_mask << lane,
    };
}

pub fn invalid(_cpu: &mut Cpu, _rs: u64, _rt: u64) {}

pub fn add(cpu: &mut Cpu, rs: u64, rt: u64) {
    // Integer overflow traps are not modeled; same result path as ADDU.
    let iw = cpu.pipeline.rfex_latch.iw;
    let result = (rs as i32).wrapping_add(rt as i32);
    set_result(cpu, rd_field(iw), result as i64 as u64);
}

pub fn addu(cpu: &mut Cpu, rs: u64, rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    let result = (rs as i32).wrapping_add(rt as i32);
    set_result(cpu, rd_field(iw), result as i64 as u64);
}

pub fn sub(cpu: &mut Cpu, rs: u64, rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    let result = (rs as i32).wrapping_sub(rt as i32);
    set_result(cpu, rd_field(iw), result as i64 as u64);
}

pub fn subu(cpu: &mut Cpu, rs: u64, rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    let result = (rs as i32).wrapping_sub(rt as i32);
    set_result(cpu, rd_field(iw), result as i64 as u64);
}

pub fn and(cpu: &mut Cpu, rs: u64, rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    set_result(cpu, rd_field(iw), rs & rt);
}

pub fn or(cpu: &mut Cpu, rs: u64, rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    set_result(cpu, rd_field(iw), rs | rt);
}

pub fn xor(cpu: &mut Cpu, rs: u64, rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    set_result(cpu, rd_field(iw), rs ^ rt);
}

pub fn nor(cpu: &mut Cpu, rs: u64, rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    set_result(cpu, rd_field(iw), !(rs | rt));
}

pub fn slt(cpu: &mut Cpu, rs: u64, rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    set_result(cpu, rd_field(iw), ((rs as i64) < (rt as i64)) as u64);
}

pub fn sltu(cpu: &mut Cpu, rs: u64, rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    set_result(cpu, rd_field(iw), (rs < rt) as u64);
}

pub fn daddu(cpu: &mut Cpu, rs: u64, rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    set_result(cpu, rd_field(iw), rs.wrapping_add(rt));
}

pub fn dsubu(cpu: &mut Cpu, rs: u64, rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    set_result(cpu, rd_field(iw), rs.wrapping_sub(rt));
}

pub fn sll(cpu: &mut Cpu, _rs: u64, rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    let result = ((rt as u32) << sa_field(iw)) as i32;
    set_result(cpu, rd_field(iw), result as i64 as u64);
}

pub fn srl(cpu: &mut Cpu, _rs: u64, rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    let result = ((rt as u32) >> sa_field(iw)) as i32;
    set_result(cpu, rd_field(iw), result as i64 as u64);
}

pub fn sra(cpu: &mut Cpu, _rs: u64, rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    let result = (rt as i32) >> sa_field(iw);
    set_result(cpu, rd_field(iw), result as i64 as u64);
}

pub fn sllv(cpu: &mut Cpu, rs: u64, rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    let result = ((rt as u32) << (rs as u32 & 0x1F)) as i32;
    set_result(cpu, rd_field(iw), result as i64 as u64);
}

pub fn srlv(cpu: &mut Cpu, rs: u64, rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    let result = ((rt as u32) >> (rs as u32 & 0x1F)) as i32;
    set_result(cpu, rd_field(iw), result as i64 as u64);
}

pub fn srav(cpu: &mut Cpu, rs: u64, rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    let result = (rt as i32) >> (rs as u32 & 0x1F);
    set_result(cpu, rd_field(iw), result as i64 as u64);
}

pub fn addi(cpu: &mut Cpu, rs: u64, _rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    let result = (rs as i32).wrapping_add(simm_field(iw) as i32);
    set_result(cpu, rt_field(iw), result as i64 as u64);
}

pub fn addiu(cpu: &mut Cpu, rs: u64, _rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    let result = (rs as i32).wrapping_add(simm_field(iw) as i32);
    set_result(cpu, rt_field(iw), result as i64 as u64);
}

pub fn daddiu(cpu: &mut Cpu, rs: u64, _rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    set_result(cpu, rt_field(iw), rs.wrapping_add(simm_field(iw) as u64));
}

pub fn slti(cpu: &mut Cpu, rs: u64, _rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    set_result(cpu, rt_field(iw), ((rs as i64) < simm_field(iw)) as u64);
}

pub fn sltiu(cpu: &mut Cpu, rs: u64, _rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    set_result(cpu, rt_field(iw), (rs < simm_field(iw) as u64) as u64);
}

pub fn andi(cpu: &mut Cpu, rs: u64, _rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    set_result(cpu, rt_field(iw), rs & uimm_field(iw));
}

pub fn ori(cpu: &mut Cpu, rs: u64, _rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    set_result(cpu, rt_field(iw), rs | uimm_field(iw));
}

pub fn xori(cpu: &mut Cpu, rs: u64, _rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    set_result(cpu, rt_field(iw), rs ^ uimm_field(iw));
}

pub fn lui(cpu: &mut Cpu, _rs: u64, _rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    let result = ((uimm_field(iw) as u32) << 16) as i32;
    set_result(cpu, rt_field(iw), result as i64 as u64);
}

pub fn beq(cpu: &mut Cpu, rs: u64, rt: u64) {
    if rs == rt {
        let target = branch_target(cpu);
        take_branch(cpu, target);
    }
}

pub fn bne(cpu: &mut Cpu, rs: u64, rt: u64) {
    if rs != rt {
        let target = branch_target(cpu);
        take_branch(cpu, target);
    }
}

pub fn blez(cpu: &mut Cpu, rs: u64, _rt: u64) {
    if (rs as i64) <= 0 {
        let target = branch_target(cpu);
        take_branch(cpu, target);
    }
}

pub fn bgtz(cpu: &mut Cpu, rs: u64, _rt: u64) {
    if (rs as i64) > 0 {
        let target = branch_target(cpu);
        take_branch(cpu, target);
    }
}

pub fn beql(cpu: &mut Cpu, rs: u64, rt: u64) {
    if rs == rt {
        let target = branch_target(cpu);
        take_branch(cpu, target);
    } else {
        squash_delay_slot(cpu);
    }
}

pub fn bnel(cpu: &mut Cpu, rs: u64, rt: u64) {
    if rs != rt {
        let target = branch_target(cpu);
        take_branch(cpu, target);
    } else {
        squash_delay_slot(cpu);
    }
}

pub fn j(cpu: &mut Cpu, _rs: u64, _rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    let base = cpu.pipeline.rfex_latch.common.pc.wrapping_add(INSTRUCTION_SIZE);
    take_branch(cpu, (base & !0x0FFF_FFFF) | (target_field(iw) << 2));
}

pub fn jal(cpu: &mut Cpu, _rs: u64, _rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    let pc = cpu.pipeline.rfex_latch.common.pc;
    let base = pc.wrapping_add(INSTRUCTION_SIZE);
    set_result(cpu, RA, pc.wrapping_add(2 * INSTRUCTION_SIZE));
    take_branch(cpu, (base & !0x0FFF_FFFF) | (target_field(iw) << 2));
}

pub fn jr(cpu: &mut Cpu, rs: u64, _rt: u64) {
    take_branch(cpu, rs);
}

pub fn jalr(cpu: &mut Cpu, rs: u64, _rt: u64) {
    let iw = cpu.pipeline.rfex_latch.iw;
    let pc = cpu.pipeline.rfex_latch.common.pc;
    set_result(cpu, rd_field(iw), pc.wrapping_add(2 * INSTRUCTION_SIZE));
    take_branch(cpu, rs);
}

pub fn lb(cpu: &mut Cpu, rs: u64, _rt: u64) {
    load(cpu, rs, 1, !0);
}

pub fn lbu(cpu: &mut Cpu, rs: u64, _rt: u64) {
    load(cpu, rs, 1, 0);
}

pub fn lh(cpu: &mut Cpu, rs: u64, _rt: u64) {
    load(cpu, rs, 2, !0);
}

pub fn lhu(cpu: &mut Cpu, rs: u64, _rt: u64) {
    load(cpu, rs, 2, 0);
}

pub fn lw(cpu: &mut Cpu, rs: u64, _rt: u64) {
    load(cpu, rs, 4, !0);
}

pub fn lwu(cpu: &mut Cpu, rs: u64, _rt: u64) {
    load(cpu, rs, 4, 0);
}

pub fn sb(cpu: &mut Cpu, rs: u64, rt: u64) {
    store(cpu, rs, rt, 1);
}

pub fn sh(cpu: &mut Cpu, rs: u64, rt: u64) {
    store(cpu, rs, rt, 2);
}

pub fn sw(cpu: &mut Cpu, rs: u64, rt: u64) {
    store(cpu, rs, rt, 4);
}
