//! # Opcode Dispatch Table
//!
//! The 256-slot table that decode dispatches through; the single source of
//! truth for instruction metadata. Each populated slot carries the mnemonic,
//! addressing mode, documented base cycle count, encoded size, and the
//! handler that implements the instruction. The 105 undocumented opcodes are
//! `None`: the execution loop reports and skips them.
//!
//! Base cycle counts are the documented NMOS figures. They are not deducted
//! from the budget wholesale - handlers pay per bus access and internal
//! operation - but the sums must agree, and the integration tests check
//! representative opcodes both ways. Page-crossing penalties are dynamic and
//! sit on top of the base figure.

use crate::addressing::AddressingMode;
use crate::cpu::{Cpu, Cycles};
use crate::instructions::{
    alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer,
};
use crate::memory::MemoryBus;
use crate::ExecutionError;

/// Instruction handler: consumes operand bytes, performs the memory
/// accesses, updates registers and flags, and pays cycles as it goes.
pub type Handler =
    fn(&mut Cpu, &mut dyn MemoryBus, &OpcodeInfo, &mut Cycles) -> Result<(), ExecutionError>;

/// Static description of one opcode.
#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    /// Three-letter mnemonic, e.g. `"LDA"`.
    pub mnemonic: &'static str,

    /// How the operand bytes are interpreted.
    pub mode: AddressingMode,

    /// Documented cycle cost before page-crossing penalties.
    pub base_cycles: u8,

    /// Encoded size in bytes, opcode included (1-3).
    pub size_bytes: u8,

    /// The function that executes this opcode.
    pub exec: Handler,
}

const fn op(
    mnemonic: &'static str,
    mode: AddressingMode,
    base_cycles: u8,
    size_bytes: u8,
    exec: Handler,
) -> Option<OpcodeInfo> {
    Some(OpcodeInfo {
        mnemonic,
        mode,
        base_cycles,
        size_bytes,
        exec,
    })
}

/// All 151 documented NMOS 6502 opcodes, indexed by opcode byte.
pub const OPCODE_TABLE: [Option<OpcodeInfo>; 256] = {
    use AddressingMode::*;
    let mut t: [Option<OpcodeInfo>; 256] = [None; 256];

    t[0x00] = op("BRK", Implied, 7, 1, control::brk);
    t[0x01] = op("ORA", IndirectX, 6, 2, alu::ora);
    t[0x05] = op("ORA", ZeroPage, 3, 2, alu::ora);
    t[0x06] = op("ASL", ZeroPage, 5, 2, shifts::asl);
    t[0x08] = op("PHP", Implied, 3, 1, stack::php);
    t[0x09] = op("ORA", Immediate, 2, 2, alu::ora);
    t[0x0A] = op("ASL", Accumulator, 2, 1, shifts::asl);
    t[0x0D] = op("ORA", Absolute, 4, 3, alu::ora);
    t[0x0E] = op("ASL", Absolute, 6, 3, shifts::asl);

    t[0x10] = op("BPL", Relative, 2, 2, branches::bpl);
    t[0x11] = op("ORA", IndirectY, 5, 2, alu::ora);
    t[0x15] = op("ORA", ZeroPageX, 4, 2, alu::ora);
    t[0x16] = op("ASL", ZeroPageX, 6, 2, shifts::asl);
    t[0x18] = op("CLC", Implied, 2, 1, flags::clc);
    t[0x19] = op("ORA", AbsoluteY, 4, 3, alu::ora);
    t[0x1D] = op("ORA", AbsoluteX, 4, 3, alu::ora);
    t[0x1E] = op("ASL", AbsoluteX, 7, 3, shifts::asl);

    t[0x20] = op("JSR", Absolute, 6, 3, control::jsr);
    t[0x21] = op("AND", IndirectX, 6, 2, alu::and);
    t[0x24] = op("BIT", ZeroPage, 3, 2, alu::bit);
    t[0x25] = op("AND", ZeroPage, 3, 2, alu::and);
    t[0x26] = op("ROL", ZeroPage, 5, 2, shifts::rol);
    t[0x28] = op("PLP", Implied, 4, 1, stack::plp);
    t[0x29] = op("AND", Immediate, 2, 2, alu::and);
    t[0x2A] = op("ROL", Accumulator, 2, 1, shifts::rol);
    t[0x2C] = op("BIT", Absolute, 4, 3, alu::bit);
    t[0x2D] = op("AND", Absolute, 4, 3, alu::and);
    t[0x2E] = op("ROL", Absolute, 6, 3, shifts::rol);

    t[0x30] = op("BMI", Relative, 2, 2, branches::bmi);
    t[0x31] = op("AND", IndirectY, 5, 2, alu::and);
    t[0x35] = op("AND", ZeroPageX, 4, 2, alu::and);
    t[0x36] = op("ROL", ZeroPageX, 6, 2, shifts::rol);
    t[0x38] = op("SEC", Implied, 2, 1, flags::sec);
    t[0x39] = op("AND", AbsoluteY, 4, 3, alu::and);
    t[0x3D] = op("AND", AbsoluteX, 4, 3, alu::and);
    t[0x3E] = op("ROL", AbsoluteX, 7, 3, shifts::rol);

    t[0x40] = op("RTI", Implied, 6, 1, control::rti);
    t[0x41] = op("EOR", IndirectX, 6, 2, alu::eor);
    t[0x45] = op("EOR", ZeroPage, 3, 2, alu::eor);
    t[0x46] = op("LSR", ZeroPage, 5, 2, shifts::lsr);
    t[0x48] = op("PHA", Implied, 3, 1, stack::pha);
    t[0x49] = op("EOR", Immediate, 2, 2, alu::eor);
    t[0x4A] = op("LSR", Accumulator, 2, 1, shifts::lsr);
    t[0x4C] = op("JMP", Absolute, 3, 3, control::jmp);
    t[0x4D] = op("EOR", Absolute, 4, 3, alu::eor);
    t[0x4E] = op("LSR", Absolute, 6, 3, shifts::lsr);

    t[0x50] = op("BVC", Relative, 2, 2, branches::bvc);
    t[0x51] = op("EOR", IndirectY, 5, 2, alu::eor);
    t[0x55] = op("EOR", ZeroPageX, 4, 2, alu::eor);
    t[0x56] = op("LSR", ZeroPageX, 6, 2, shifts::lsr);
    t[0x58] = op("CLI", Implied, 2, 1, flags::cli);
    t[0x59] = op("EOR", AbsoluteY, 4, 3, alu::eor);
    t[0x5D] = op("EOR", AbsoluteX, 4, 3, alu::eor);
    t[0x5E] = op("LSR", AbsoluteX, 7, 3, shifts::lsr);

    t[0x60] = op("RTS", Implied, 6, 1, control::rts);
    t[0x61] = op("ADC", IndirectX, 6, 2, alu::adc);
    t[0x65] = op("ADC", ZeroPage, 3, 2, alu::adc);
    t[0x66] = op("ROR", ZeroPage, 5, 2, shifts::ror);
    t[0x68] = op("PLA", Implied, 4, 1, stack::pla);
    t[0x69] = op("ADC", Immediate, 2, 2, alu::adc);
    t[0x6A] = op("ROR", Accumulator, 2, 1, shifts::ror);
    t[0x6C] = op("JMP", Indirect, 5, 3, control::jmp);
    t[0x6D] = op("ADC", Absolute, 4, 3, alu::adc);
    t[0x6E] = op("ROR", Absolute, 6, 3, shifts::ror);

    t[0x70] = op("BVS", Relative, 2, 2, branches::bvs);
    t[0x71] = op("ADC", IndirectY, 5, 2, alu::adc);
    t[0x75] = op("ADC", ZeroPageX, 4, 2, alu::adc);
    t[0x76] = op("ROR", ZeroPageX, 6, 2, shifts::ror);
    t[0x78] = op("SEI", Implied, 2, 1, flags::sei);
    t[0x79] = op("ADC", AbsoluteY, 4, 3, alu::adc);
    t[0x7D] = op("ADC", AbsoluteX, 4, 3, alu::adc);
    t[0x7E] = op("ROR", AbsoluteX, 7, 3, shifts::ror);

    t[0x81] = op("STA", IndirectX, 6, 2, load_store::sta);
    t[0x84] = op("STY", ZeroPage, 3, 2, load_store::sty);
    t[0x85] = op("STA", ZeroPage, 3, 2, load_store::sta);
    t[0x86] = op("STX", ZeroPage, 3, 2, load_store::stx);
    t[0x88] = op("DEY", Implied, 2, 1, inc_dec::dey);
    t[0x8A] = op("TXA", Implied, 2, 1, transfer::txa);
    t[0x8C] = op("STY", Absolute, 4, 3, load_store::sty);
    t[0x8D] = op("STA", Absolute, 4, 3, load_store::sta);
    t[0x8E] = op("STX", Absolute, 4, 3, load_store::stx);

    t[0x90] = op("BCC", Relative, 2, 2, branches::bcc);
    t[0x91] = op("STA", IndirectY, 6, 2, load_store::sta);
    t[0x94] = op("STY", ZeroPageX, 4, 2, load_store::sty);
    t[0x95] = op("STA", ZeroPageX, 4, 2, load_store::sta);
    t[0x96] = op("STX", ZeroPageY, 4, 2, load_store::stx);
    t[0x98] = op("TYA", Implied, 2, 1, transfer::tya);
    t[0x99] = op("STA", AbsoluteY, 5, 3, load_store::sta);
    t[0x9A] = op("TXS", Implied, 2, 1, transfer::txs);
    t[0x9D] = op("STA", AbsoluteX, 5, 3, load_store::sta);

    t[0xA0] = op("LDY", Immediate, 2, 2, load_store::ldy);
    t[0xA1] = op("LDA", IndirectX, 6, 2, load_store::lda);
    t[0xA2] = op("LDX", Immediate, 2, 2, load_store::ldx);
    t[0xA4] = op("LDY", ZeroPage, 3, 2, load_store::ldy);
    t[0xA5] = op("LDA", ZeroPage, 3, 2, load_store::lda);
    t[0xA6] = op("LDX", ZeroPage, 3, 2, load_store::ldx);
    t[0xA8] = op("TAY", Implied, 2, 1, transfer::tay);
    t[0xA9] = op("LDA", Immediate, 2, 2, load_store::lda);
    t[0xAA] = op("TAX", Implied, 2, 1, transfer::tax);
    t[0xAC] = op("LDY", Absolute, 4, 3, load_store::ldy);
    t[0xAD] = op("LDA", Absolute, 4, 3, load_store::lda);
    t[0xAE] = op("LDX", Absolute, 4, 3, load_store::ldx);

    t[0xB0] = op("BCS", Relative, 2, 2, branches::bcs);
    t[0xB1] = op("LDA", IndirectY, 5, 2, load_store::lda);
    t[0xB4] = op("LDY", ZeroPageX, 4, 2, load_store::ldy);
    t[0xB5] = op("LDA", ZeroPageX, 4, 2, load_store::lda);
    t[0xB6] = op("LDX", ZeroPageY, 4, 2, load_store::ldx);
    t[0xB8] = op("CLV", Implied, 2, 1, flags::clv);
    t[0xB9] = op("LDA", AbsoluteY, 4, 3, load_store::lda);
    t[0xBA] = op("TSX", Implied, 2, 1, transfer::tsx);
    t[0xBC] = op("LDY", AbsoluteX, 4, 3, load_store::ldy);
    t[0xBD] = op("LDA", AbsoluteX, 4, 3, load_store::lda);
    t[0xBE] = op("LDX", AbsoluteY, 4, 3, load_store::ldx);

    t[0xC0] = op("CPY", Immediate, 2, 2, alu::cpy);
    t[0xC1] = op("CMP", IndirectX, 6, 2, alu::cmp);
    t[0xC4] = op("CPY", ZeroPage, 3, 2, alu::cpy);
    t[0xC5] = op("CMP", ZeroPage, 3, 2, alu::cmp);
    t[0xC6] = op("DEC", ZeroPage, 5, 2, inc_dec::dec);
    t[0xC8] = op("INY", Implied, 2, 1, inc_dec::iny);
    t[0xC9] = op("CMP", Immediate, 2, 2, alu::cmp);
    t[0xCA] = op("DEX", Implied, 2, 1, inc_dec::dex);
    t[0xCC] = op("CPY", Absolute, 4, 3, alu::cpy);
    t[0xCD] = op("CMP", Absolute, 4, 3, alu::cmp);
    t[0xCE] = op("DEC", Absolute, 6, 3, inc_dec::dec);

    t[0xD0] = op("BNE", Relative, 2, 2, branches::bne);
    t[0xD1] = op("CMP", IndirectY, 5, 2, alu::cmp);
    t[0xD5] = op("CMP", ZeroPageX, 4, 2, alu::cmp);
    t[0xD6] = op("DEC", ZeroPageX, 6, 2, inc_dec::dec);
    t[0xD8] = op("CLD", Implied, 2, 1, flags::cld);
    t[0xD9] = op("CMP", AbsoluteY, 4, 3, alu::cmp);
    t[0xDD] = op("CMP", AbsoluteX, 4, 3, alu::cmp);
    t[0xDE] = op("DEC", AbsoluteX, 7, 3, inc_dec::dec);

    t[0xE0] = op("CPX", Immediate, 2, 2, alu::cpx);
    t[0xE1] = op("SBC", IndirectX, 6, 2, alu::sbc);
    t[0xE4] = op("CPX", ZeroPage, 3, 2, alu::cpx);
    t[0xE5] = op("SBC", ZeroPage, 3, 2, alu::sbc);
    t[0xE6] = op("INC", ZeroPage, 5, 2, inc_dec::inc);
    t[0xE8] = op("INX", Implied, 2, 1, inc_dec::inx);
    t[0xE9] = op("SBC", Immediate, 2, 2, alu::sbc);
    t[0xEA] = op("NOP", Implied, 2, 1, control::nop);
    t[0xEC] = op("CPX", Absolute, 4, 3, alu::cpx);
    t[0xED] = op("SBC", Absolute, 4, 3, alu::sbc);
    t[0xEE] = op("INC", Absolute, 6, 3, inc_dec::inc);

    t[0xF0] = op("BEQ", Relative, 2, 2, branches::beq);
    t[0xF1] = op("SBC", IndirectY, 5, 2, alu::sbc);
    t[0xF5] = op("SBC", ZeroPageX, 4, 2, alu::sbc);
    t[0xF6] = op("INC", ZeroPageX, 6, 2, inc_dec::inc);
    t[0xF8] = op("SED", Implied, 2, 1, flags::sed);
    t[0xF9] = op("SBC", AbsoluteY, 4, 3, alu::sbc);
    t[0xFD] = op("SBC", AbsoluteX, 4, 3, alu::sbc);
    t[0xFE] = op("INC", AbsoluteX, 7, 3, inc_dec::inc);

    t
};
