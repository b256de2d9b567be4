//! Increment and decrement instructions: INC, DEC, INX, INY, DEX, DEY.
//!
//! All set Zero and Negative from the result. The memory forms pay
//! read + modify + write; indexed forms always pay the fixup cycle.

use crate::cpu::{Cpu, Cycles, IndexPenalty};
use crate::memory::MemoryBus;
use crate::opcodes::OpcodeInfo;
use crate::ExecutionError;

/// INC - increment a memory byte.
pub(crate) fn inc(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    let addr = cpu.operand_address(mem, info.mode, IndexPenalty::Always, cycles);
    let value = cpu.read_byte(mem, addr, cycles).wrapping_add(1);
    *cycles -= 1; // modify
    cpu.write_byte(mem, addr, value, cycles);
    cpu.set_zn(value);
    Ok(())
}

/// DEC - decrement a memory byte.
pub(crate) fn dec(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    let addr = cpu.operand_address(mem, info.mode, IndexPenalty::Always, cycles);
    let value = cpu.read_byte(mem, addr, cycles).wrapping_sub(1);
    *cycles -= 1; // modify
    cpu.write_byte(mem, addr, value, cycles);
    cpu.set_zn(value);
    Ok(())
}

/// INX - increment the X register.
pub(crate) fn inx(
    cpu: &mut Cpu,
    _mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 1;
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_zn(cpu.x);
    Ok(())
}

/// INY - increment the Y register.
pub(crate) fn iny(
    cpu: &mut Cpu,
    _mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 1;
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_zn(cpu.y);
    Ok(())
}

/// DEX - decrement the X register.
pub(crate) fn dex(
    cpu: &mut Cpu,
    _mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 1;
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_zn(cpu.x);
    Ok(())
}

/// DEY - decrement the Y register.
pub(crate) fn dey(
    cpu: &mut Cpu,
    _mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 1;
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_zn(cpu.y);
    Ok(())
}
