//! MOS 6502 CPU core.
//!
//! Instruction-level execution with cycle accounting: when the pending
//! cycle counter hits zero, one whole instruction is fetched, decoded
//! through the descriptor table and executed, and its full cost (base
//! cycles plus page-cross and branch penalties) is charged to the
//! counter. Each subsequent tick burns one cycle, so an instruction's
//! duration is observable through [`run`] without modelling individual
//! bus accesses.
//!
//! [`run`]: Tickable::run

use emu_core::{Bus, Cpu, Observable, Tickable, Ticks, Value};
use log::{trace, warn};

use crate::opcodes::{Mode, Op, OPCODES};
use crate::registers::Registers;
use crate::status::{self, Status};

/// Reset vector: PC is loaded from this address on reset.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// NMI vector.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Duration of the reset sequence.
const RESET_CYCLES: u32 = 7;

/// Cycle cost charged when an IRQ is accepted.
const IRQ_CYCLES: u32 = 7;

/// Cycle cost charged when an NMI is delivered.
const NMI_CYCLES: u32 = 8;

/// The MOS 6502 CPU.
///
/// Borrows its bus for the CPU's lifetime; the driver owns the memory
/// and reaches it through [`read_byte`]/[`write_byte`] while the CPU is
/// alive. Decimal mode is not implemented: ADC/SBC ignore the D flag
/// (2A03 behaviour), though CLD/SED still toggle the bit.
///
/// [`read_byte`]: Mos6502::read_byte
/// [`write_byte`]: Mos6502::write_byte
pub struct Mos6502<'a, B: Bus> {
    /// CPU registers.
    pub regs: Registers,

    /// Cycles still owed for the instruction in flight.
    cycles_remaining: u32,

    /// Total cycles consumed since construction.
    total_cycles: Ticks,

    pub(crate) bus: &'a mut B,
}

impl<'a, B: Bus> Mos6502<'a, B> {
    /// Create a CPU over `bus` with registers in reset state.
    ///
    /// No vector fetch happens here; call [`reset`](Cpu::reset) to start
    /// execution from the reset vector.
    pub fn new(bus: &'a mut B) -> Self {
        Self {
            regs: Registers::new(),
            cycles_remaining: 0,
            total_cycles: Ticks::ZERO,
            bus,
        }
    }

    /// Cycles still owed for the instruction in flight.
    #[must_use]
    pub fn cycles_remaining(&self) -> u32 {
        self.cycles_remaining
    }

    /// Total cycles consumed since construction.
    #[must_use]
    pub fn total_cycles(&self) -> Ticks {
        self.total_cycles
    }

    /// Read a byte from the bus.
    pub fn read_byte(&mut self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    /// Write a byte to the bus.
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }

    /// Check a status flag by mask (see [`status`]).
    #[must_use]
    pub fn flag(&self, mask: u8) -> bool {
        self.regs.p.is_set(mask)
    }

    /// Set or clear a status flag by mask.
    pub fn set_flag(&mut self, mask: u8, value: bool) {
        self.regs.p.set_if(mask, value);
    }

    /// The address the next push would write (`$0100 | S`).
    #[must_use]
    pub fn stack_addr(&self) -> u16 {
        self.regs.stack_addr()
    }

    /// Push a byte onto the stack.
    pub fn push(&mut self, value: u8) {
        let addr = self.regs.push();
        self.bus.write(addr, value);
    }

    /// Pull a byte from the stack.
    pub fn pull(&mut self) -> u8 {
        let addr = self.regs.pull();
        self.bus.read(addr)
    }

    /// Push a word onto the stack, high byte first.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    /// Pull a word from the stack, low byte first.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let low = self.pull();
        let high = self.pull();
        u16::from_le_bytes([low, high])
    }

    /// Resolve the operand and read it, keeping the page-cross verdict.
    fn read_operand(&mut self, mode: Mode) -> (u8, bool) {
        let (addr, crossed) = self.resolve(mode);
        (self.bus.read(addr), crossed)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Execute one decoded instruction, returning its penalty cycles.
    fn execute(&mut self, op: Op, mode: Mode) -> u32 {
        match op {
            // Load/store
            Op::Lda => {
                let (value, crossed) = self.read_operand(mode);
                self.regs.a = value;
                self.regs.p.update_nz(value);
                u32::from(crossed)
            }
            Op::Ldx => {
                let (value, crossed) = self.read_operand(mode);
                self.regs.x = value;
                self.regs.p.update_nz(value);
                u32::from(crossed)
            }
            Op::Ldy => {
                let (value, crossed) = self.read_operand(mode);
                self.regs.y = value;
                self.regs.p.update_nz(value);
                u32::from(crossed)
            }
            Op::Sta => {
                let (addr, _) = self.resolve(mode);
                self.bus.write(addr, self.regs.a);
                0
            }
            Op::Stx => {
                let (addr, _) = self.resolve(mode);
                self.bus.write(addr, self.regs.x);
                0
            }
            Op::Sty => {
                let (addr, _) = self.resolve(mode);
                self.bus.write(addr, self.regs.y);
                0
            }

            // Transfers; TXS is the one that leaves flags alone
            Op::Tax => {
                self.regs.x = self.regs.a;
                self.regs.p.update_nz(self.regs.x);
                0
            }
            Op::Tay => {
                self.regs.y = self.regs.a;
                self.regs.p.update_nz(self.regs.y);
                0
            }
            Op::Txa => {
                self.regs.a = self.regs.x;
                self.regs.p.update_nz(self.regs.a);
                0
            }
            Op::Tya => {
                self.regs.a = self.regs.y;
                self.regs.p.update_nz(self.regs.a);
                0
            }
            Op::Tsx => {
                self.regs.x = self.regs.s;
                self.regs.p.update_nz(self.regs.x);
                0
            }
            Op::Txs => {
                self.regs.s = self.regs.x;
                0
            }

            // Stack
            Op::Pha => {
                self.push(self.regs.a);
                0
            }
            Op::Php => {
                self.push(self.regs.p.to_byte());
                0
            }
            Op::Pla => {
                self.regs.a = self.pull();
                self.regs.p.update_nz(self.regs.a);
                0
            }
            Op::Plp => {
                let value = self.pull();
                self.regs.p = Status::from_byte(value);
                0
            }

            // Logical
            Op::And => {
                let (value, crossed) = self.read_operand(mode);
                self.regs.a &= value;
                self.regs.p.update_nz(self.regs.a);
                u32::from(crossed)
            }
            Op::Ora => {
                let (value, crossed) = self.read_operand(mode);
                self.regs.a |= value;
                self.regs.p.update_nz(self.regs.a);
                u32::from(crossed)
            }
            Op::Eor => {
                let (value, crossed) = self.read_operand(mode);
                self.regs.a ^= value;
                self.regs.p.update_nz(self.regs.a);
                u32::from(crossed)
            }
            Op::Bit => {
                let (value, _) = self.read_operand(mode);
                self.regs.p.set_if(status::Z, self.regs.a & value == 0);
                self.regs.p.set_if(status::V, value & 0x40 != 0);
                self.regs.p.set_if(status::N, value & 0x80 != 0);
                0
            }

            // Arithmetic
            Op::Adc => {
                let (value, crossed) = self.read_operand(mode);
                self.add_with_carry(value);
                u32::from(crossed)
            }
            Op::Sbc => {
                // A - M - !C == A + !M + C
                let (value, crossed) = self.read_operand(mode);
                self.add_with_carry(!value);
                u32::from(crossed)
            }

            // Compares
            Op::Cmp => {
                let (value, crossed) = self.read_operand(mode);
                self.compare(self.regs.a, value);
                u32::from(crossed)
            }
            Op::Cpx => {
                let (value, _) = self.read_operand(mode);
                self.compare(self.regs.x, value);
                0
            }
            Op::Cpy => {
                let (value, _) = self.read_operand(mode);
                self.compare(self.regs.y, value);
                0
            }

            // Increment/decrement
            Op::Inc => {
                let (addr, _) = self.resolve(mode);
                let result = self.bus.read(addr).wrapping_add(1);
                self.bus.write(addr, result);
                self.regs.p.update_nz(result);
                0
            }
            Op::Dec => {
                let (addr, _) = self.resolve(mode);
                let result = self.bus.read(addr).wrapping_sub(1);
                self.bus.write(addr, result);
                self.regs.p.update_nz(result);
                0
            }
            Op::Inx => {
                self.regs.x = self.regs.x.wrapping_add(1);
                self.regs.p.update_nz(self.regs.x);
                0
            }
            Op::Iny => {
                self.regs.y = self.regs.y.wrapping_add(1);
                self.regs.p.update_nz(self.regs.y);
                0
            }
            Op::Dex => {
                self.regs.x = self.regs.x.wrapping_sub(1);
                self.regs.p.update_nz(self.regs.x);
                0
            }
            Op::Dey => {
                self.regs.y = self.regs.y.wrapping_sub(1);
                self.regs.p.update_nz(self.regs.y);
                0
            }

            // Shifts/rotates
            Op::Asl => self.read_modify_write(mode, Self::asl_value),
            Op::Lsr => self.read_modify_write(mode, Self::lsr_value),
            Op::Rol => self.read_modify_write(mode, Self::rol_value),
            Op::Ror => self.read_modify_write(mode, Self::ror_value),

            // Jumps/subroutines
            Op::Jmp => {
                let (addr, _) = self.resolve(mode);
                self.regs.pc = addr;
                0
            }
            Op::Jsr => {
                let target = self.fetch_word();
                // Return address is the last byte of the JSR operand;
                // RTS adds one back.
                self.push_word(self.regs.pc.wrapping_sub(1));
                self.regs.pc = target;
                0
            }
            Op::Rts => {
                self.regs.pc = self.pull_word().wrapping_add(1);
                0
            }

            // Branches
            Op::Bcc => self.branch(mode, !self.regs.p.is_set(status::C)),
            Op::Bcs => self.branch(mode, self.regs.p.is_set(status::C)),
            Op::Beq => self.branch(mode, self.regs.p.is_set(status::Z)),
            Op::Bne => self.branch(mode, !self.regs.p.is_set(status::Z)),
            Op::Bmi => self.branch(mode, self.regs.p.is_set(status::N)),
            Op::Bpl => self.branch(mode, !self.regs.p.is_set(status::N)),
            Op::Bvc => self.branch(mode, !self.regs.p.is_set(status::V)),
            Op::Bvs => self.branch(mode, self.regs.p.is_set(status::V)),

            // Flag manipulation
            Op::Clc => {
                self.regs.p.clear(status::C);
                0
            }
            Op::Cld => {
                self.regs.p.clear(status::D);
                0
            }
            Op::Cli => {
                self.regs.p.clear(status::I);
                0
            }
            Op::Clv => {
                self.regs.p.clear(status::V);
                0
            }
            Op::Sec => {
                self.regs.p.set(status::C);
                0
            }
            Op::Sed => {
                self.regs.p.set(status::D);
                0
            }
            Op::Sei => {
                self.regs.p.set(status::I);
                0
            }

            // System
            Op::Brk => {
                // Pushes the post-opcode PC; the pushed status still has
                // B clear, the live register picks it up afterwards.
                self.push_word(self.regs.pc);
                self.push(self.regs.p.to_byte());
                self.regs.p.set(status::B);
                self.regs.pc = self.read_word(IRQ_VECTOR);
                0
            }
            Op::Rti => {
                let value = self.pull();
                self.regs.p = Status::from_byte(value);
                self.regs.p.clear(status::B);
                self.regs.pc = self.pull_word();
                0
            }
            Op::Nop => 0,

            // Filtered out before dispatch.
            Op::Illegal => 0,
        }
    }

    // =========================================================================
    // ALU helpers
    // =========================================================================

    /// Add `value` and the carry into A, updating C, V, N and Z.
    ///
    /// V is set when both addends share a sign and the result has the
    /// opposite one. SBC routes through here with the operand
    /// complemented, which makes C read as not-borrow.
    fn add_with_carry(&mut self, value: u8) {
        let a = self.regs.a;
        let carry = u16::from(self.regs.p.is_set(status::C));
        let sum = u16::from(a) + u16::from(value) + carry;
        let result = sum as u8;

        self.regs.p.set_if(status::C, sum > 0xFF);
        self.regs
            .p
            .set_if(status::V, (a ^ value) & 0x80 == 0 && (a ^ result) & 0x80 != 0);
        self.regs.p.update_nz(result);
        self.regs.a = result;
    }

    /// Compare a register against an operand without mutating it.
    fn compare(&mut self, register: u8, value: u8) {
        let result = register.wrapping_sub(value);
        self.regs.p.set_if(status::C, register >= value);
        self.regs.p.update_nz(result);
    }

    fn asl_value(&mut self, value: u8) -> u8 {
        self.regs.p.set_if(status::C, value & 0x80 != 0);
        let result = value << 1;
        self.regs.p.update_nz(result);
        result
    }

    fn lsr_value(&mut self, value: u8) -> u8 {
        self.regs.p.set_if(status::C, value & 0x01 != 0);
        let result = value >> 1;
        self.regs.p.update_nz(result);
        result
    }

    fn rol_value(&mut self, value: u8) -> u8 {
        let carry_in = u8::from(self.regs.p.is_set(status::C));
        self.regs.p.set_if(status::C, value & 0x80 != 0);
        let result = (value << 1) | carry_in;
        self.regs.p.update_nz(result);
        result
    }

    fn ror_value(&mut self, value: u8) -> u8 {
        let carry_in = u8::from(self.regs.p.is_set(status::C)) << 7;
        self.regs.p.set_if(status::C, value & 0x01 != 0);
        let result = (value >> 1) | carry_in;
        self.regs.p.update_nz(result);
        result
    }

    /// Shift/rotate dispatch: implied mode targets A, everything else
    /// rewrites the operand in place.
    fn read_modify_write(&mut self, mode: Mode, f: fn(&mut Self, u8) -> u8) -> u32 {
        if mode == Mode::Imp {
            self.regs.a = f(self, self.regs.a);
        } else {
            let (addr, _) = self.resolve(mode);
            let value = self.bus.read(addr);
            let result = f(self, value);
            self.bus.write(addr, result);
        }
        0
    }

    /// Conditional branch: +1 cycle when taken, +2 more when the target
    /// sits on a different page than the post-operand PC.
    fn branch(&mut self, mode: Mode, condition: bool) -> u32 {
        let (target, crossed) = self.resolve(mode);
        if condition {
            self.regs.pc = target;
            1 + if crossed { 2 } else { 0 }
        } else {
            0
        }
    }
}

impl<B: Bus> Tickable for Mos6502<'_, B> {
    /// Advance the CPU by one clock cycle.
    ///
    /// On a tick with no cycles pending, the next opcode is fetched and
    /// executed in full and its cycle cost becomes pending; the tick then
    /// consumes one pending cycle. An undocumented opcode byte consumes
    /// nothing and mutates nothing, so the CPU stalls on it until the
    /// driver intervenes.
    fn tick(&mut self) {
        if self.cycles_remaining == 0 {
            let opcode = self.bus.read(self.regs.pc);
            let entry = &OPCODES[opcode as usize];
            if entry.op == Op::Illegal {
                warn!(
                    "unknown opcode ${:02X} at PC ${:04X}",
                    opcode, self.regs.pc
                );
                return;
            }
            self.regs.pc = self.regs.pc.wrapping_add(1);
            let extra = self.execute(entry.op, entry.mode);
            self.cycles_remaining = u32::from(entry.cycles) + extra;
        }

        if self.cycles_remaining > 0 {
            self.cycles_remaining -= 1;
            self.total_cycles += Ticks::new(1);
        }
    }
}

impl<B: Bus> Cpu for Mos6502<'_, B> {
    /// Reset the CPU: registers to reset state, PC from the reset
    /// vector, and the 7-cycle reset sequence pending.
    fn reset(&mut self) {
        self.regs = Registers::new();
        self.regs.pc = self.read_word(RESET_VECTOR);
        self.cycles_remaining = RESET_CYCLES;
    }

    /// Deliver a maskable interrupt. Ignored while I is set.
    fn irq(&mut self) {
        if self.regs.p.is_set(status::I) {
            trace!("irq ignored: interrupt disable set");
            return;
        }
        trace!("irq taken at PC ${:04X}", self.regs.pc);
        self.push_word(self.regs.pc);
        self.push(self.regs.p.to_byte());
        self.regs.p.set(status::I);
        self.regs.pc = self.read_word(IRQ_VECTOR);
        self.cycles_remaining += IRQ_CYCLES;
    }

    /// Deliver a non-maskable interrupt.
    fn nmi(&mut self) {
        trace!("nmi taken at PC ${:04X}", self.regs.pc);
        self.push_word(self.regs.pc);
        self.push(self.regs.p.to_byte());
        self.regs.pc = self.read_word(NMI_VECTOR);
        self.cycles_remaining += NMI_CYCLES;
    }

    fn pc(&self) -> u16 {
        self.regs.pc
    }
}

impl<B: Bus> Observable for Mos6502<'_, B> {
    fn query(&self, path: &str) -> Option<Value> {
        let value = match path {
            "a" => Value::U8(self.regs.a),
            "x" => Value::U8(self.regs.x),
            "y" => Value::U8(self.regs.y),
            "s" => Value::U8(self.regs.s),
            "p" => Value::U8(self.regs.p.to_byte()),
            "pc" => Value::U16(self.regs.pc),
            "cycles.remaining" => Value::U64(u64::from(self.cycles_remaining)),
            "cycles.total" => Value::U64(self.total_cycles.get()),
            "flags.c" => Value::Bool(self.regs.p.is_set(status::C)),
            "flags.z" => Value::Bool(self.regs.p.is_set(status::Z)),
            "flags.i" => Value::Bool(self.regs.p.is_set(status::I)),
            "flags.d" => Value::Bool(self.regs.p.is_set(status::D)),
            "flags.b" => Value::Bool(self.regs.p.is_set(status::B)),
            "flags.v" => Value::Bool(self.regs.p.is_set(status::V)),
            "flags.n" => Value::Bool(self.regs.p.is_set(status::N)),
            _ => return None,
        };
        Some(value)
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "a",
            "x",
            "y",
            "s",
            "p",
            "pc",
            "cycles.remaining",
            "cycles.total",
            "flags.c",
            "flags.z",
            "flags.i",
            "flags.d",
            "flags.b",
            "flags.v",
            "flags.n",
        ]
    }
}

#[cfg(test)]
mod tests {
    use emu_core::SimpleBus;

    use super::*;

    /// Bus with a reset vector pointing at $3000.
    fn bus_with_program(program: &[u8]) -> SimpleBus {
        let mut bus = SimpleBus::new();
        bus.load(RESET_VECTOR, &[0x00, 0x30]);
        bus.load(0x3000, program);
        bus
    }

    #[test]
    fn reset_state_matches_the_datasheet() {
        let mut bus = bus_with_program(&[]);
        let mut cpu = Mos6502::new(&mut bus);
        cpu.reset();

        assert_eq!(cpu.regs.a, 0);
        assert_eq!(cpu.regs.x, 0);
        assert_eq!(cpu.regs.y, 0);
        assert_eq!(cpu.regs.s, 0xFD);
        assert_eq!(cpu.regs.p.to_byte(), 0b0010_0100);
        assert_eq!(cpu.regs.pc, 0x3000);
        assert_eq!(cpu.cycles_remaining(), 7);
    }

    #[test]
    fn reset_sequence_drains_one_cycle_per_tick() {
        let mut bus = bus_with_program(&[0xEA]);
        let mut cpu = Mos6502::new(&mut bus);
        cpu.reset();

        for k in 1..=7 {
            cpu.tick();
            assert_eq!(cpu.cycles_remaining(), 7 - k);
            assert_eq!(cpu.regs.pc, 0x3000);
            assert_eq!(cpu.regs.a, 0);
        }
        assert_eq!(cpu.total_cycles(), Ticks::new(7));
    }

    #[test]
    fn run_executes_whole_instructions() {
        // LDA #$01; NOP
        let mut bus = bus_with_program(&[0xA9, 0x01, 0xEA]);
        let mut cpu = Mos6502::new(&mut bus);
        cpu.reset();

        cpu.run(Ticks::new(7 + 2));
        assert_eq!(cpu.regs.a, 0x01);
        assert_eq!(cpu.regs.pc, 0x3002);
        assert_eq!(cpu.cycles_remaining(), 0);

        cpu.run(Ticks::new(2));
        assert_eq!(cpu.regs.pc, 0x3003);
    }

    #[test]
    fn unknown_opcode_stalls_without_state_change() {
        // $02 is not a documented opcode.
        let mut bus = bus_with_program(&[0x02]);
        let mut cpu = Mos6502::new(&mut bus);
        cpu.reset();
        cpu.run(Ticks::new(7));

        let before = cpu.regs;
        cpu.run(Ticks::new(3));
        assert_eq!(cpu.regs, before);
        assert_eq!(cpu.cycles_remaining(), 0);
        assert_eq!(cpu.total_cycles(), Ticks::new(7));
    }

    #[test]
    fn stack_push_pull_round_trips() {
        let mut bus = SimpleBus::new();
        let mut cpu = Mos6502::new(&mut bus);
        let s = cpu.regs.s;

        for value in [0x00, 0x42, 0xFF] {
            cpu.push(value);
            assert_eq!(cpu.pull(), value);
            assert_eq!(cpu.regs.s, s);
        }
        assert_eq!(cpu.stack_addr(), 0x0100 | u16::from(s));
    }

    #[test]
    fn irq_is_masked_by_interrupt_disable() {
        let mut bus = bus_with_program(&[]);
        bus.load(IRQ_VECTOR, &[0x00, 0x40]);
        let mut cpu = Mos6502::new(&mut bus);
        cpu.reset();
        cpu.run(Ticks::new(7));

        // I is set after reset.
        cpu.irq();
        assert_eq!(cpu.regs.pc, 0x3000);
        assert_eq!(cpu.cycles_remaining(), 0);

        cpu.set_flag(status::I, false);
        cpu.irq();
        assert_eq!(cpu.regs.pc, 0x4000);
        assert!(cpu.flag(status::I));
        assert_eq!(cpu.cycles_remaining(), 7);
    }

    #[test]
    fn irq_pushes_pc_then_status() {
        let mut bus = bus_with_program(&[]);
        bus.load(IRQ_VECTOR, &[0x00, 0x40]);
        let mut cpu = Mos6502::new(&mut bus);
        cpu.reset();
        cpu.run(Ticks::new(7));
        cpu.set_flag(status::I, false);
        let p = cpu.regs.p.to_byte();

        cpu.irq();
        assert_eq!(cpu.pull(), p);
        assert_eq!(cpu.pull_word(), 0x3000);
    }

    #[test]
    fn nmi_is_unconditional_and_costs_eight_cycles() {
        let mut bus = bus_with_program(&[]);
        bus.load(NMI_VECTOR, &[0x00, 0x50]);
        let mut cpu = Mos6502::new(&mut bus);
        cpu.reset();
        cpu.run(Ticks::new(7));

        // I set does not mask NMI.
        cpu.nmi();
        assert_eq!(cpu.regs.pc, 0x5000);
        assert_eq!(cpu.cycles_remaining(), 8);
    }

    #[test]
    fn interrupt_cost_adds_to_pending_cycles() {
        // LDA #$01 in flight when the NMI arrives.
        let mut bus = bus_with_program(&[0xA9, 0x01]);
        bus.load(NMI_VECTOR, &[0x00, 0x50]);
        let mut cpu = Mos6502::new(&mut bus);
        cpu.reset();
        cpu.run(Ticks::new(8));
        assert_eq!(cpu.cycles_remaining(), 1);

        cpu.nmi();
        assert_eq!(cpu.cycles_remaining(), 9);
    }

    #[test]
    fn query_exposes_registers_and_flags() {
        let mut bus = bus_with_program(&[]);
        let mut cpu = Mos6502::new(&mut bus);
        cpu.reset();
        cpu.regs.a = 0x42;

        assert_eq!(cpu.query("a"), Some(Value::U8(0x42)));
        assert_eq!(cpu.query("pc"), Some(Value::U16(0x3000)));
        assert_eq!(cpu.query("flags.i"), Some(Value::Bool(true)));
        assert_eq!(cpu.query("bogus"), None);

        for path in cpu.query_paths() {
            assert!(cpu.query(path).is_some(), "unqueryable path {path}");
        }
    }

    #[test]
    fn word_helpers_are_little_endian() {
        let mut bus = SimpleBus::new();
        let mut cpu = Mos6502::new(&mut bus);

        cpu.write_word(0x1234, 0xBEEF);
        assert_eq!(cpu.read_byte(0x1234), 0xEF);
        assert_eq!(cpu.read_byte(0x1235), 0xBE);
        assert_eq!(cpu.read_word(0x1234), 0xBEEF);
    }
}
