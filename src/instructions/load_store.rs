//! Load and store instructions: LDA, LDX, LDY, STA, STX, STY.
//!
//! Loads set Zero and Negative from the loaded value; stores touch no flags.

use crate::cpu::{Cpu, Cycles, IndexPenalty};
use crate::memory::MemoryBus;
use crate::opcodes::OpcodeInfo;
use crate::ExecutionError;

/// LDA - load a byte into the accumulator.
pub(crate) fn lda(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    let value = cpu.load_operand(mem, info.mode, cycles);
    cpu.a = value;
    cpu.set_zn(value);
    Ok(())
}

/// LDX - load a byte into the X register.
pub(crate) fn ldx(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    let value = cpu.load_operand(mem, info.mode, cycles);
    cpu.x = value;
    cpu.set_zn(value);
    Ok(())
}

/// LDY - load a byte into the Y register.
pub(crate) fn ldy(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    let value = cpu.load_operand(mem, info.mode, cycles);
    cpu.y = value;
    cpu.set_zn(value);
    Ok(())
}

/// STA - store the accumulator.
///
/// Indexed stores always pay the fixup cycle; there is no page-cross
/// discount on a write.
pub(crate) fn sta(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    let addr = cpu.operand_address(mem, info.mode, IndexPenalty::Always, cycles);
    cpu.write_byte(mem, addr, cpu.a, cycles);
    Ok(())
}

/// STX - store the X register.
pub(crate) fn stx(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    let addr = cpu.operand_address(mem, info.mode, IndexPenalty::Always, cycles);
    cpu.write_byte(mem, addr, cpu.x, cycles);
    Ok(())
}

/// STY - store the Y register.
pub(crate) fn sty(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    let addr = cpu.operand_address(mem, info.mode, IndexPenalty::Always, cycles);
    cpu.write_byte(mem, addr, cpu.y, cycles);
    Ok(())
}
