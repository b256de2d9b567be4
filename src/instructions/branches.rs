//! Conditional branches: BPL, BMI, BVC, BVS, BCC, BCS, BNE, BEQ.
//!
//! All take a signed 8-bit displacement relative to the next instruction.
//! 2 cycles when not taken, +1 when taken, +1 more when the target lies on
//! a different page. No flags are affected.

use crate::cpu::{Cpu, Cycles};
use crate::memory::MemoryBus;
use crate::opcodes::OpcodeInfo;
use crate::ExecutionError;

/// Consumes the displacement byte and redirects PC when `taken`.
fn branch_on(cpu: &mut Cpu, mem: &mut dyn MemoryBus, cycles: &mut Cycles, taken: bool) {
    // i8 -> u16 sign-extends, so wrapping_add walks backwards too
    let offset = cpu.fetch_byte(mem, cycles) as i8;
    if taken {
        *cycles -= 1;
        let target = cpu.pc.wrapping_add(offset as u16);
        if (target ^ cpu.pc) & 0xFF00 != 0 {
            *cycles -= 1;
        }
        cpu.pc = target;
    }
}

/// BPL - branch when Negative is clear.
pub(crate) fn bpl(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    let taken = !cpu.flag_n();
    branch_on(cpu, mem, cycles, taken);
    Ok(())
}

/// BMI - branch when Negative is set.
pub(crate) fn bmi(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    let taken = cpu.flag_n();
    branch_on(cpu, mem, cycles, taken);
    Ok(())
}

/// BVC - branch when Overflow is clear.
pub(crate) fn bvc(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    let taken = !cpu.flag_v();
    branch_on(cpu, mem, cycles, taken);
    Ok(())
}

/// BVS - branch when Overflow is set.
pub(crate) fn bvs(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    let taken = cpu.flag_v();
    branch_on(cpu, mem, cycles, taken);
    Ok(())
}

/// BCC - branch when Carry is clear.
pub(crate) fn bcc(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    let taken = !cpu.flag_c();
    branch_on(cpu, mem, cycles, taken);
    Ok(())
}

/// BCS - branch when Carry is set.
pub(crate) fn bcs(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    let taken = cpu.flag_c();
    branch_on(cpu, mem, cycles, taken);
    Ok(())
}

/// BNE - branch when Zero is clear.
pub(crate) fn bne(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    let taken = !cpu.flag_z();
    branch_on(cpu, mem, cycles, taken);
    Ok(())
}

/// BEQ - branch when Zero is set.
pub(crate) fn beq(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    let taken = cpu.flag_z();
    branch_on(cpu, mem, cycles, taken);
    Ok(())
}
