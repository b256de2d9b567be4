//! JSR and RTS tests.
//!
//! JSR is the template for every stack-touching instruction: the return
//! address (the call's last byte) goes through the word-write primitive at
//! the stack pointer, which then advances by the two bytes pushed. RTS
//! retreats the pointer, reads the word back, and resumes one byte later.

use emu6502::{Cpu, Memory, MemoryBus, STACK_BASE};

fn setup() -> (Cpu, Memory) {
    let mut mem = Memory::new();
    let mut cpu = Cpu::new();
    cpu.reset(&mut mem);
    cpu.set_pc(0x0200);
    (cpu, mem)
}

#[test]
fn jsr_jumps_to_target() {
    let (mut cpu, mut mem) = setup();
    mem.write(0x0200, 0x20); // JSR $3000
    mem.write(0x0201, 0x00);
    mem.write(0x0202, 0x30);

    let used = cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc(), 0x3000);
    assert_eq!(used, 6);
}

#[test]
fn jsr_advances_stack_pointer_by_return_address_width() {
    let (mut cpu, mut mem) = setup();
    mem.write(0x0200, 0x20);
    mem.write(0x0201, 0x00);
    mem.write(0x0202, 0x30);

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.sp(), STACK_BASE + 2);
}

#[test]
fn jsr_pushes_address_of_its_last_byte() {
    let (mut cpu, mut mem) = setup();
    mem.write(0x0200, 0x20);
    mem.write(0x0201, 0x00);
    mem.write(0x0202, 0x30);

    cpu.step(&mut mem).unwrap();

    // 0x0202, little-endian at the slot the pointer occupied before the push
    assert_eq!(mem.read(STACK_BASE), 0x02);
    assert_eq!(mem.read(STACK_BASE + 1), 0x02);
    let pushed = mem.read(STACK_BASE) as u16 | ((mem.read(STACK_BASE + 1) as u16) << 8);
    assert_eq!(pushed, 0x0202);
}

#[test]
fn jsr_touches_no_registers_or_flags() {
    let (mut cpu, mut mem) = setup();
    cpu.set_a(0x11);
    cpu.set_x(0x22);
    cpu.set_y(0x33);
    cpu.set_flag_c(true);
    cpu.set_flag_n(true);
    mem.write(0x0200, 0x20);
    mem.write(0x0201, 0x00);
    mem.write(0x0202, 0x30);

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.a(), 0x11);
    assert_eq!(cpu.x(), 0x22);
    assert_eq!(cpu.y(), 0x33);
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn nested_jsr_stacks_two_return_addresses() {
    let (mut cpu, mut mem) = setup();
    mem.write(0x0200, 0x20); // JSR $3000
    mem.write(0x0201, 0x00);
    mem.write(0x0202, 0x30);
    mem.write(0x3000, 0x20); // JSR $4000
    mem.write(0x3001, 0x00);
    mem.write(0x3002, 0x40);

    cpu.step(&mut mem).unwrap();
    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.pc(), 0x4000);
    assert_eq!(cpu.sp(), STACK_BASE + 4);

    let outer = mem.read(STACK_BASE) as u16 | ((mem.read(STACK_BASE + 1) as u16) << 8);
    let inner = mem.read(STACK_BASE + 2) as u16 | ((mem.read(STACK_BASE + 3) as u16) << 8);
    assert_eq!(outer, 0x0202);
    assert_eq!(inner, 0x3002);
}

#[test]
fn rts_resumes_after_the_call() {
    let (mut cpu, mut mem) = setup();
    mem.write(0x0200, 0x20); // JSR $3000
    mem.write(0x0201, 0x00);
    mem.write(0x0202, 0x30);
    mem.write(0x3000, 0x60); // RTS

    cpu.step(&mut mem).unwrap();
    let used = cpu.step(&mut mem).unwrap();

    // back at the byte after the JSR operand, stack fully unwound
    assert_eq!(cpu.pc(), 0x0203);
    assert_eq!(cpu.sp(), STACK_BASE);
    assert_eq!(used, 6);
}

#[test]
fn subroutine_call_round_trip_executes_the_body() {
    let (mut cpu, mut mem) = setup();
    mem.write(0x0200, 0x20); // JSR $3000
    mem.write(0x0201, 0x00);
    mem.write(0x0202, 0x30);
    mem.write(0x0203, 0xE8); // INX after return
    mem.write(0x3000, 0xA9); // LDA #$42
    mem.write(0x3001, 0x42);
    mem.write(0x3002, 0x60); // RTS

    // JSR(6) + LDA(2) + RTS(6) + INX(2)
    let used = cpu.execute(&mut mem, 16).unwrap();

    assert_eq!(used, 16);
    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.x(), 0x01);
    assert_eq!(cpu.pc(), 0x0204);
    assert_eq!(cpu.sp(), STACK_BASE);
}
