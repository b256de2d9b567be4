//! Stack push/pull instructions: PHA, PHP, PLA, PLP.
//!
//! One byte each; the stack pointer moves by exactly one slot. Pushes cost
//! 3 cycles (fetch, write, pointer adjust); pulls cost 4 (fetch, read, two
//! internal cycles).

use crate::cpu::{Cpu, Cycles};
use crate::memory::MemoryBus;
use crate::opcodes::OpcodeInfo;
use crate::ExecutionError;

/// PHA - push the accumulator.
pub(crate) fn pha(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 1;
    cpu.stack_push_byte(mem, cpu.a, cycles);
    Ok(())
}

/// PHP - push the packed status byte.
pub(crate) fn php(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 1;
    let status = cpu.status();
    cpu.stack_push_byte(mem, status, cycles);
    Ok(())
}

/// PLA - pull a byte into the accumulator; sets Zero and Negative.
pub(crate) fn pla(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 2;
    let value = cpu.stack_pull_byte(mem, cycles);
    cpu.a = value;
    cpu.set_zn(value);
    Ok(())
}

/// PLP - pull a byte and restore the seven flags from it.
pub(crate) fn plp(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 2;
    let value = cpu.stack_pull_byte(mem, cycles);
    cpu.set_status(value);
    Ok(())
}
