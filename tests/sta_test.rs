//! STA tests: stored value, flag preservation, and the store cost model
//! (indexed stores always pay the fixup cycle, no page-cross discount).

use emu6502::{Cpu, Memory, MemoryBus};

fn setup() -> (Cpu, Memory) {
    let mut mem = Memory::new();
    let mut cpu = Cpu::new();
    cpu.reset(&mut mem);
    cpu.set_pc(0x0200);
    (cpu, mem)
}

#[test]
fn sta_zero_page() {
    let (mut cpu, mut mem) = setup();
    cpu.set_a(0x42);
    mem.write(0x0200, 0x85);
    mem.write(0x0201, 0x10);

    let used = cpu.step(&mut mem).unwrap();

    assert_eq!(mem.read(0x0010), 0x42);
    assert_eq!(used, 3);
}

#[test]
fn sta_touches_no_flags() {
    let (mut cpu, mut mem) = setup();
    cpu.set_a(0x00); // storing zero must not set Z
    mem.write(0x0200, 0x85);
    mem.write(0x0201, 0x10);

    cpu.step(&mut mem).unwrap();

    assert_eq!(cpu.status(), 0b0010_0000);
}

#[test]
fn sta_absolute() {
    let (mut cpu, mut mem) = setup();
    cpu.set_a(0x42);
    mem.write(0x0200, 0x8D);
    mem.write(0x0201, 0x00);
    mem.write(0x0202, 0x44);

    let used = cpu.step(&mut mem).unwrap();

    assert_eq!(mem.read(0x4400), 0x42);
    assert_eq!(used, 4);
}

#[test]
fn sta_absolute_x_always_pays_the_fixup_cycle() {
    let (mut cpu, mut mem) = setup();
    cpu.set_a(0x42);
    cpu.set_x(0x10);
    mem.write(0x0200, 0x9D);
    mem.write(0x0201, 0x00);
    mem.write(0x0202, 0x44);

    // no page crossed, yet a store is 5 cycles
    let used = cpu.step(&mut mem).unwrap();

    assert_eq!(mem.read(0x4410), 0x42);
    assert_eq!(used, 5);
}

#[test]
fn sta_indirect_y_always_pays_the_fixup_cycle() {
    let (mut cpu, mut mem) = setup();
    cpu.set_a(0x42);
    cpu.set_y(0x10);
    mem.write(0x0200, 0x91);
    mem.write(0x0201, 0x30);
    mem.write(0x0030, 0x00);
    mem.write(0x0031, 0x44);

    let used = cpu.step(&mut mem).unwrap();

    assert_eq!(mem.read(0x4410), 0x42);
    assert_eq!(used, 6);
}

#[test]
fn stx_zero_page_y() {
    let (mut cpu, mut mem) = setup();
    cpu.set_x(0x42);
    cpu.set_y(0x05);
    mem.write(0x0200, 0x96);
    mem.write(0x0201, 0x10);

    let used = cpu.step(&mut mem).unwrap();

    assert_eq!(mem.read(0x0015), 0x42);
    assert_eq!(used, 4);
}

#[test]
fn sty_absolute() {
    let (mut cpu, mut mem) = setup();
    cpu.set_y(0x42);
    mem.write(0x0200, 0x8C);
    mem.write(0x0201, 0x34);
    mem.write(0x0202, 0x12);

    let used = cpu.step(&mut mem).unwrap();

    assert_eq!(mem.read(0x1234), 0x42);
    assert_eq!(used, 4);
}

#[test]
fn load_store_round_trip_through_memory() {
    let (mut cpu, mut mem) = setup();
    mem.write(0x0200, 0xA9); // LDA #$C3
    mem.write(0x0201, 0xC3);
    mem.write(0x0202, 0x85); // STA $40
    mem.write(0x0203, 0x40);
    mem.write(0x0204, 0xA6); // LDX $40
    mem.write(0x0205, 0x40);

    let used = cpu.execute(&mut mem, 8).unwrap();

    assert_eq!(used, 8);
    assert_eq!(mem.read(0x0040), 0xC3);
    assert_eq!(cpu.x(), 0xC3);
    assert!(cpu.flag_n());
}
