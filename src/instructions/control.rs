//! Control flow instructions: JMP, JSR, RTS, BRK, RTI, NOP.
//!
//! JSR is the template for every stack-touching instruction: the return
//! address goes to the stack through the word-write primitive, and the
//! stack pointer advances by exactly the width pushed. The value pushed is
//! the address of the call's *last* byte (PC minus one after both operand
//! bytes are consumed); RTS adds the one back.

use crate::cpu::{Cpu, Cycles, IndexPenalty, IRQ_VECTOR};
use crate::memory::MemoryBus;
use crate::opcodes::OpcodeInfo;
use crate::ExecutionError;

/// JMP - unconditional jump, absolute or indirect.
pub(crate) fn jmp(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    let target = cpu.operand_address(mem, info.mode, IndexPenalty::PageCross, cycles);
    cpu.pc = target;
    Ok(())
}

/// JSR - push the return address and jump to the subroutine.
pub(crate) fn jsr(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    let target = cpu.fetch_word(mem, cycles);
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.stack_push_word(mem, return_addr, cycles)?;
    *cycles -= 1; // internal pointer shuffle
    cpu.pc = target;
    Ok(())
}

/// RTS - pull the return address and resume one byte past it.
pub(crate) fn rts(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 3; // pointer adjust and increment-past-operand cycles
    let return_addr = cpu.stack_pull_word(mem, cycles)?;
    cpu.pc = return_addr.wrapping_add(1);
    Ok(())
}

/// BRK - software interrupt.
///
/// Pushes PC + 1 (the byte after BRK's padding byte), then the status byte
/// with Break set, sets Interrupt-Disable, and vectors through
/// [`IRQ_VECTOR`].
pub(crate) fn brk(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    let return_addr = cpu.pc.wrapping_add(1);
    cpu.stack_push_word(mem, return_addr, cycles)?;
    let status = cpu.status() | 0b0001_0000; // B set in the pushed copy
    cpu.stack_push_byte(mem, status, cycles);
    cpu.flag_i = true;
    cpu.pc = cpu.read_word(mem, IRQ_VECTOR, cycles)?;
    *cycles -= 1; // internal sequencing
    Ok(())
}

/// RTI - return from interrupt: restore flags, then PC (no +1, unlike RTS).
pub(crate) fn rti(
    cpu: &mut Cpu,
    mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 2; // pointer adjust cycles
    let status = cpu.stack_pull_byte(mem, cycles);
    cpu.set_status(status);
    cpu.pc = cpu.stack_pull_word(mem, cycles)?;
    Ok(())
}

/// NOP - burn one internal cycle.
pub(crate) fn nop(
    _cpu: &mut Cpu,
    _mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 1;
    Ok(())
}
