//! Shift and rotate instructions: ASL, LSR, ROL, ROR.
//!
//! Each exists in an accumulator form (2 cycles) and memory forms that pay
//! read + modify + write. The bit shifted out lands in Carry; Zero and
//! Negative come from the result.

use crate::addressing::AddressingMode;
use crate::cpu::{Cpu, Cycles, IndexPenalty};
use crate::memory::MemoryBus;
use crate::opcodes::OpcodeInfo;
use crate::ExecutionError;

/// Applies `apply` to the accumulator or to the addressed memory byte,
/// storing the result back and setting Zero and Negative from it. `apply`
/// is responsible for the Carry flag.
fn read_modify_write(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    mode: AddressingMode,
    cycles: &mut Cycles,
    apply: fn(&mut Cpu, u8) -> u8,
) {
    match mode {
        AddressingMode::Accumulator => {
            *cycles -= 1;
            let result = apply(cpu, cpu.a);
            cpu.a = result;
            cpu.set_zn(result);
        }
        _ => {
            let addr = cpu.operand_address(mem, mode, IndexPenalty::Always, cycles);
            let value = cpu.read_byte(mem, addr, cycles);
            *cycles -= 1; // modify
            let result = apply(cpu, value);
            cpu.write_byte(mem, addr, result, cycles);
            cpu.set_zn(result);
        }
    }
}

/// ASL - arithmetic shift left; bit 7 into Carry, 0 into bit 0.
pub(crate) fn asl(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, mem, info.mode, cycles, |cpu, value| {
        cpu.flag_c = value & 0x80 != 0;
        value << 1
    });
    Ok(())
}

/// LSR - logical shift right; bit 0 into Carry, 0 into bit 7.
pub(crate) fn lsr(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, mem, info.mode, cycles, |cpu, value| {
        cpu.flag_c = value & 0x01 != 0;
        value >> 1
    });
    Ok(())
}

/// ROL - rotate left through Carry.
pub(crate) fn rol(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, mem, info.mode, cycles, |cpu, value| {
        let carry_in = cpu.flag_c as u8;
        cpu.flag_c = value & 0x80 != 0;
        (value << 1) | carry_in
    });
    Ok(())
}

/// ROR - rotate right through Carry.
pub(crate) fn ror(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, mem, info.mode, cycles, |cpu, value| {
        let carry_in = (cpu.flag_c as u8) << 7;
        cpu.flag_c = value & 0x01 != 0;
        (value >> 1) | carry_in
    });
    Ok(())
}
