//! End-to-end scenarios driving the CPU purely through `reset`/`run`,
//! checking architectural state and exact cycle costs.

use emu_6502::{status, Mos6502, IRQ_VECTOR, RESET_VECTOR};
use emu_core::{Cpu, SimpleBus, Tickable, Ticks};

fn program_bus(program: &[u8]) -> SimpleBus {
    let mut bus = SimpleBus::new();
    bus.load(RESET_VECTOR, &[0x00, 0x30]);
    bus.load(0x3000, program);
    bus
}

#[test]
fn load_sets_flags_in_two_cycles() {
    // LDA #$80
    let mut bus = program_bus(&[0xA9, 0x80]);
    let mut cpu = Mos6502::new(&mut bus);
    cpu.reset();
    cpu.run(Ticks::new(7));

    cpu.run(Ticks::new(2));
    assert_eq!(cpu.regs.a, 0x80);
    assert!(!cpu.flag(status::Z));
    assert!(cpu.flag(status::N));
    assert_eq!(cpu.cycles_remaining(), 0);
}

#[test]
fn indexed_load_needs_five_cycles_across_a_page() {
    // LDA $10FF,X with X = 1 reaches $1100.
    let mut bus = program_bus(&[0xBD, 0xFF, 0x10]);
    bus.load(0x1100, &[0x42]);
    let mut cpu = Mos6502::new(&mut bus);
    cpu.reset();
    cpu.run(Ticks::new(7));
    cpu.regs.x = 1;

    cpu.run(Ticks::new(4));
    assert_eq!(cpu.cycles_remaining(), 1); // not done at the base cost
    cpu.run(Ticks::new(1));
    assert_eq!(cpu.regs.a, 0x42);
    assert_eq!(cpu.cycles_remaining(), 0);
}

#[test]
fn adc_overflows_at_the_signed_boundary() {
    // ADC #$01 with A = $7F
    let mut bus = program_bus(&[0x69, 0x01]);
    let mut cpu = Mos6502::new(&mut bus);
    cpu.reset();
    cpu.run(Ticks::new(7));
    cpu.regs.a = 0x7F;

    cpu.run(Ticks::new(2));
    assert_eq!(cpu.regs.a, 0x80);
    assert!(!cpu.flag(status::C));
    assert!(!cpu.flag(status::Z));
    assert!(cpu.flag(status::V));
    assert!(cpu.flag(status::N));
}

#[test]
fn taken_branch_across_a_page_costs_five_cycles() {
    // BEQ +1 at $30FD: post-operand PC is $30FF, target $3100.
    let mut bus = program_bus(&[]);
    bus.load(0x30FD, &[0xF0, 0x01]);
    let mut cpu = Mos6502::new(&mut bus);
    cpu.reset();
    cpu.run(Ticks::new(7));
    cpu.regs.pc = 0x30FD;
    cpu.set_flag(status::Z, true);

    cpu.run(Ticks::new(4));
    assert_eq!(cpu.cycles_remaining(), 1); // 2 base + 1 taken + 2 cross
    cpu.run(Ticks::new(1));
    assert_eq!(cpu.regs.pc, 0x3100);
    assert_eq!(cpu.cycles_remaining(), 0);
}

#[test]
fn indirect_jump_reproduces_the_page_wrap_bug() {
    // JMP ($00FF): low from $00FF, high from $0000.
    let mut bus = program_bus(&[0x6C, 0xFF, 0x00]);
    bus.load(0x00FF, &[0x34]);
    bus.load(0x0000, &[0x12]);
    let mut cpu = Mos6502::new(&mut bus);
    cpu.reset();
    cpu.run(Ticks::new(7));

    cpu.run(Ticks::new(5));
    assert_eq!(cpu.regs.pc, 0x1234);
    assert_eq!(cpu.cycles_remaining(), 0);
}

#[test]
fn brk_rti_round_trip_restores_the_stack() {
    // BRK at $3000, handler at $4000 is a lone RTI.
    let mut bus = program_bus(&[0x00]);
    bus.load(IRQ_VECTOR, &[0x00, 0x40]);
    bus.load(0x4000, &[0x40]);
    let mut cpu = Mos6502::new(&mut bus);
    cpu.reset();
    cpu.run(Ticks::new(7));
    let s = cpu.regs.s;

    cpu.run(Ticks::new(7)); // BRK
    assert_eq!(cpu.regs.pc, 0x4000);
    assert!(cpu.flag(status::B));

    cpu.run(Ticks::new(6)); // RTI
    assert_eq!(cpu.regs.pc, 0x3001);
    assert_eq!(cpu.regs.s, s);
    assert!(!cpu.flag(status::B));
    assert_eq!(cpu.cycles_remaining(), 0);
}

#[test]
fn irq_handler_returns_via_rti() {
    // Main program is NOPs; handler at $4000 is INX ; RTI.
    let mut bus = program_bus(&[0xEA, 0xEA]);
    bus.load(IRQ_VECTOR, &[0x00, 0x40]);
    bus.load(0x4000, &[0xE8, 0x40]);
    let mut cpu = Mos6502::new(&mut bus);
    cpu.reset();
    cpu.run(Ticks::new(7 + 2)); // first NOP retired
    cpu.set_flag(status::I, false);
    let p = cpu.regs.p.to_byte();

    cpu.irq();
    assert_eq!(cpu.regs.pc, 0x4000);
    cpu.run(Ticks::new(7 + 2 + 6)); // interrupt cost, INX, RTI
    assert_eq!(cpu.regs.x, 1);
    assert_eq!(cpu.regs.pc, 0x3001);
    assert_eq!(cpu.regs.p.to_byte(), p); // I restored from the stack
    assert_eq!(cpu.cycles_remaining(), 0);
}
