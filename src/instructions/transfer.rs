//! Register transfer instructions: TAX, TAY, TXA, TYA, TSX, TXS.
//!
//! All are implied-mode, 2 cycles (opcode fetch plus one internal cycle).
//! Every transfer except TXS sets Zero and Negative from the moved value.

use crate::cpu::{Cpu, Cycles, STACK_BASE};
use crate::memory::MemoryBus;
use crate::opcodes::OpcodeInfo;
use crate::ExecutionError;

/// TAX - copy the accumulator into X.
pub(crate) fn tax(
    cpu: &mut Cpu,
    _mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 1;
    cpu.x = cpu.a;
    cpu.set_zn(cpu.x);
    Ok(())
}

/// TAY - copy the accumulator into Y.
pub(crate) fn tay(
    cpu: &mut Cpu,
    _mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 1;
    cpu.y = cpu.a;
    cpu.set_zn(cpu.y);
    Ok(())
}

/// TXA - copy X into the accumulator.
pub(crate) fn txa(
    cpu: &mut Cpu,
    _mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 1;
    cpu.a = cpu.x;
    cpu.set_zn(cpu.a);
    Ok(())
}

/// TYA - copy Y into the accumulator.
pub(crate) fn tya(
    cpu: &mut Cpu,
    _mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 1;
    cpu.a = cpu.y;
    cpu.set_zn(cpu.a);
    Ok(())
}

/// TSX - copy the stack pointer's page offset into X.
pub(crate) fn tsx(
    cpu: &mut Cpu,
    _mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 1;
    cpu.x = (cpu.sp & 0x00FF) as u8;
    cpu.set_zn(cpu.x);
    Ok(())
}

/// TXS - rebase the stack pointer at X's offset into the stack page.
///
/// The only transfer that touches no flags.
pub(crate) fn txs(
    cpu: &mut Cpu,
    _mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 1;
    cpu.sp = STACK_BASE | cpu.x as u16;
    Ok(())
}
