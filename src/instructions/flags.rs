//! Flag manipulation instructions: CLC, SEC, CLI, SEI, CLD, SED, CLV.
//!
//! All implied-mode, 2 cycles, touching exactly one flag. There is no SEV;
//! Overflow can only be cleared explicitly.

use crate::cpu::{Cpu, Cycles};
use crate::memory::MemoryBus;
use crate::opcodes::OpcodeInfo;
use crate::ExecutionError;

/// CLC - clear Carry.
pub(crate) fn clc(
    cpu: &mut Cpu,
    _mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 1;
    cpu.flag_c = false;
    Ok(())
}

/// SEC - set Carry.
pub(crate) fn sec(
    cpu: &mut Cpu,
    _mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 1;
    cpu.flag_c = true;
    Ok(())
}

/// CLI - clear Interrupt-Disable.
pub(crate) fn cli(
    cpu: &mut Cpu,
    _mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 1;
    cpu.flag_i = false;
    Ok(())
}

/// SEI - set Interrupt-Disable.
pub(crate) fn sei(
    cpu: &mut Cpu,
    _mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 1;
    cpu.flag_i = true;
    Ok(())
}

/// CLD - clear Decimal mode.
pub(crate) fn cld(
    cpu: &mut Cpu,
    _mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 1;
    cpu.flag_d = false;
    Ok(())
}

/// SED - set Decimal mode.
pub(crate) fn sed(
    cpu: &mut Cpu,
    _mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 1;
    cpu.flag_d = true;
    Ok(())
}

/// CLV - clear Overflow.
pub(crate) fn clv(
    cpu: &mut Cpu,
    _mem: &mut dyn MemoryBus,
    _info: &OpcodeInfo,
    cycles: &mut Cycles,
) -> Result<(), ExecutionError> {
    *cycles -= 1;
    cpu.flag_v = false;
    Ok(())
}
