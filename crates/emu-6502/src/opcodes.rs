//! Opcode descriptor table.
//!
//! One descriptor per opcode byte: mnemonic, addressing mode, the
//! operation it performs, and the base cycle count from the canonical
//! 6502 timing table. Indexed and branch penalties are added by the
//! handlers at execution time. The 105 undocumented opcode bytes are
//! filled with explicit [`Op::Illegal`] descriptors.

/// Addressing mode of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Implied (includes accumulator operands).
    Imp,
    /// Immediate: `#$nn`.
    Imm,
    /// Zero page: `$nn`.
    Zpg,
    /// Zero page indexed by X: `$nn,X` (wraps within page zero).
    Zpx,
    /// Zero page indexed by Y: `$nn,Y` (wraps within page zero).
    Zpy,
    /// Relative branch displacement.
    Rel,
    /// Absolute: `$nnnn`.
    Abs,
    /// Absolute indexed by X: `$nnnn,X`.
    Abx,
    /// Absolute indexed by Y: `$nnnn,Y`.
    Aby,
    /// Indirect: `($nnnn)` (JMP only, with the page-wrap quirk).
    Ind,
    /// Indexed indirect: `($nn,X)`.
    Idx,
    /// Indirect indexed: `($nn),Y`.
    Idy,
}

impl Mode {
    /// Number of operand bytes following the opcode.
    #[must_use]
    pub const fn operand_len(self) -> u16 {
        match self {
            Mode::Imp => 0,
            Mode::Imm | Mode::Zpg | Mode::Zpx | Mode::Zpy | Mode::Rel | Mode::Idx | Mode::Idy => 1,
            Mode::Abs | Mode::Abx | Mode::Aby | Mode::Ind => 2,
        }
    }
}

/// The operation an opcode performs. Selects the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Txa,
    Tya,
    Tsx,
    Txs,
    Pha,
    Php,
    Pla,
    Plp,
    And,
    Ora,
    Eor,
    Bit,
    Adc,
    Sbc,
    Cmp,
    Cpx,
    Cpy,
    Inc,
    Inx,
    Iny,
    Dec,
    Dex,
    Dey,
    Asl,
    Lsr,
    Rol,
    Ror,
    Jmp,
    Jsr,
    Rts,
    Bcc,
    Bcs,
    Beq,
    Bne,
    Bmi,
    Bpl,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Sec,
    Sed,
    Sei,
    Brk,
    Rti,
    Nop,
    /// Undocumented opcode byte; fetching one stalls the CPU.
    Illegal,
}

/// One entry of the dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct Opcode {
    /// Instruction mnemonic, for diagnostics.
    pub mnemonic: &'static str,
    /// Addressing mode.
    pub mode: Mode,
    /// Operation tag.
    pub op: Op,
    /// Base cycle count before penalties.
    pub cycles: u8,
}

impl Opcode {
    const fn new(mnemonic: &'static str, mode: Mode, op: Op, cycles: u8) -> Self {
        Self {
            mnemonic,
            mode,
            op,
            cycles,
        }
    }

    /// Total instruction length in bytes (opcode plus operands).
    #[must_use]
    pub const fn len(&self) -> u16 {
        1 + self.mode.operand_len()
    }
}

/// Dispatch table indexed by opcode byte.
pub static OPCODES: [Opcode; 256] = {
    use Mode::*;
    use Op::*;

    const ILLEGAL: Opcode = Opcode::new("???", Imp, Illegal, 0);
    let mut t = [ILLEGAL; 256];

    // Load
    t[0xA9] = Opcode::new("LDA", Imm, Lda, 2);
    t[0xA5] = Opcode::new("LDA", Zpg, Lda, 3);
    t[0xB5] = Opcode::new("LDA", Zpx, Lda, 4);
    t[0xAD] = Opcode::new("LDA", Abs, Lda, 4);
    t[0xBD] = Opcode::new("LDA", Abx, Lda, 4);
    t[0xB9] = Opcode::new("LDA", Aby, Lda, 4);
    t[0xA1] = Opcode::new("LDA", Idx, Lda, 6);
    t[0xB1] = Opcode::new("LDA", Idy, Lda, 5);
    t[0xA2] = Opcode::new("LDX", Imm, Ldx, 2);
    t[0xA6] = Opcode::new("LDX", Zpg, Ldx, 3);
    t[0xB6] = Opcode::new("LDX", Zpy, Ldx, 4);
    t[0xAE] = Opcode::new("LDX", Abs, Ldx, 4);
    t[0xBE] = Opcode::new("LDX", Aby, Ldx, 4);
    t[0xA0] = Opcode::new("LDY", Imm, Ldy, 2);
    t[0xA4] = Opcode::new("LDY", Zpg, Ldy, 3);
    t[0xB4] = Opcode::new("LDY", Zpx, Ldy, 4);
    t[0xAC] = Opcode::new("LDY", Abs, Ldy, 4);
    t[0xBC] = Opcode::new("LDY", Abx, Ldy, 4);

    // Store
    t[0x85] = Opcode::new("STA", Zpg, Sta, 3);
    t[0x95] = Opcode::new("STA", Zpx, Sta, 4);
    t[0x8D] = Opcode::new("STA", Abs, Sta, 4);
    t[0x9D] = Opcode::new("STA", Abx, Sta, 5);
    t[0x99] = Opcode::new("STA", Aby, Sta, 5);
    t[0x81] = Opcode::new("STA", Idx, Sta, 6);
    t[0x91] = Opcode::new("STA", Idy, Sta, 6);
    t[0x86] = Opcode::new("STX", Zpg, Stx, 3);
    t[0x96] = Opcode::new("STX", Zpy, Stx, 4);
    t[0x8E] = Opcode::new("STX", Abs, Stx, 4);
    t[0x84] = Opcode::new("STY", Zpg, Sty, 3);
    t[0x94] = Opcode::new("STY", Zpx, Sty, 4);
    t[0x8C] = Opcode::new("STY", Abs, Sty, 4);

    // Transfer
    t[0xAA] = Opcode::new("TAX", Imp, Tax, 2);
    t[0xA8] = Opcode::new("TAY", Imp, Tay, 2);
    t[0x8A] = Opcode::new("TXA", Imp, Txa, 2);
    t[0x98] = Opcode::new("TYA", Imp, Tya, 2);
    t[0xBA] = Opcode::new("TSX", Imp, Tsx, 2);
    t[0x9A] = Opcode::new("TXS", Imp, Txs, 2);

    // Stack
    t[0x48] = Opcode::new("PHA", Imp, Pha, 3);
    t[0x08] = Opcode::new("PHP", Imp, Php, 3);
    t[0x68] = Opcode::new("PLA", Imp, Pla, 4);
    t[0x28] = Opcode::new("PLP", Imp, Plp, 4);

    // Logical
    t[0x29] = Opcode::new("AND", Imm, And, 2);
    t[0x25] = Opcode::new("AND", Zpg, And, 3);
    t[0x35] = Opcode::new("AND", Zpx, And, 4);
    t[0x2D] = Opcode::new("AND", Abs, And, 4);
    t[0x3D] = Opcode::new("AND", Abx, And, 4);
    t[0x39] = Opcode::new("AND", Aby, And, 4);
    t[0x21] = Opcode::new("AND", Idx, And, 6);
    t[0x31] = Opcode::new("AND", Idy, And, 5);
    t[0x09] = Opcode::new("ORA", Imm, Ora, 2);
    t[0x05] = Opcode::new("ORA", Zpg, Ora, 3);
    t[0x15] = Opcode::new("ORA", Zpx, Ora, 4);
    t[0x0D] = Opcode::new("ORA", Abs, Ora, 4);
    t[0x1D] = Opcode::new("ORA", Abx, Ora, 4);
    t[0x19] = Opcode::new("ORA", Aby, Ora, 4);
    t[0x01] = Opcode::new("ORA", Idx, Ora, 6);
    t[0x11] = Opcode::new("ORA", Idy, Ora, 5);
    t[0x49] = Opcode::new("EOR", Imm, Eor, 2);
    t[0x45] = Opcode::new("EOR", Zpg, Eor, 3);
    t[0x55] = Opcode::new("EOR", Zpx, Eor, 4);
    t[0x4D] = Opcode::new("EOR", Abs, Eor, 4);
    t[0x5D] = Opcode::new("EOR", Abx, Eor, 4);
    t[0x59] = Opcode::new("EOR", Aby, Eor, 4);
    t[0x41] = Opcode::new("EOR", Idx, Eor, 6);
    t[0x51] = Opcode::new("EOR", Idy, Eor, 5);
    t[0x24] = Opcode::new("BIT", Zpg, Bit, 3);
    t[0x2C] = Opcode::new("BIT", Abs, Bit, 4);

    // Arithmetic
    t[0x69] = Opcode::new("ADC", Imm, Adc, 2);
    t[0x65] = Opcode::new("ADC", Zpg, Adc, 3);
    t[0x75] = Opcode::new("ADC", Zpx, Adc, 4);
    t[0x6D] = Opcode::new("ADC", Abs, Adc, 4);
    t[0x7D] = Opcode::new("ADC", Abx, Adc, 4);
    t[0x79] = Opcode::new("ADC", Aby, Adc, 4);
    t[0x61] = Opcode::new("ADC", Idx, Adc, 6);
    t[0x71] = Opcode::new("ADC", Idy, Adc, 5);
    t[0xE9] = Opcode::new("SBC", Imm, Sbc, 2);
    t[0xE5] = Opcode::new("SBC", Zpg, Sbc, 3);
    t[0xF5] = Opcode::new("SBC", Zpx, Sbc, 4);
    t[0xED] = Opcode::new("SBC", Abs, Sbc, 4);
    t[0xFD] = Opcode::new("SBC", Abx, Sbc, 4);
    t[0xF9] = Opcode::new("SBC", Aby, Sbc, 4);
    t[0xE1] = Opcode::new("SBC", Idx, Sbc, 6);
    t[0xF1] = Opcode::new("SBC", Idy, Sbc, 5);

    // Compare
    t[0xC9] = Opcode::new("CMP", Imm, Cmp, 2);
    t[0xC5] = Opcode::new("CMP", Zpg, Cmp, 3);
    t[0xD5] = Opcode::new("CMP", Zpx, Cmp, 4);
    t[0xCD] = Opcode::new("CMP", Abs, Cmp, 4);
    t[0xDD] = Opcode::new("CMP", Abx, Cmp, 4);
    t[0xD9] = Opcode::new("CMP", Aby, Cmp, 4);
    t[0xC1] = Opcode::new("CMP", Idx, Cmp, 6);
    t[0xD1] = Opcode::new("CMP", Idy, Cmp, 5);
    t[0xE0] = Opcode::new("CPX", Imm, Cpx, 2);
    t[0xE4] = Opcode::new("CPX", Zpg, Cpx, 3);
    t[0xEC] = Opcode::new("CPX", Abs, Cpx, 4);
    t[0xC0] = Opcode::new("CPY", Imm, Cpy, 2);
    t[0xC4] = Opcode::new("CPY", Zpg, Cpy, 3);
    t[0xCC] = Opcode::new("CPY", Abs, Cpy, 4);

    // Increment/decrement
    t[0xE6] = Opcode::new("INC", Zpg, Inc, 5);
    t[0xF6] = Opcode::new("INC", Zpx, Inc, 6);
    t[0xEE] = Opcode::new("INC", Abs, Inc, 6);
    t[0xFE] = Opcode::new("INC", Abx, Inc, 7);
    t[0xE8] = Opcode::new("INX", Imp, Inx, 2);
    t[0xC8] = Opcode::new("INY", Imp, Iny, 2);
    t[0xC6] = Opcode::new("DEC", Zpg, Dec, 5);
    t[0xD6] = Opcode::new("DEC", Zpx, Dec, 6);
    t[0xCE] = Opcode::new("DEC", Abs, Dec, 6);
    t[0xDE] = Opcode::new("DEC", Abx, Dec, 7);
    t[0xCA] = Opcode::new("DEX", Imp, Dex, 2);
    t[0x88] = Opcode::new("DEY", Imp, Dey, 2);

    // Shift/rotate
    t[0x0A] = Opcode::new("ASL", Imp, Asl, 2);
    t[0x06] = Opcode::new("ASL", Zpg, Asl, 5);
    t[0x16] = Opcode::new("ASL", Zpx, Asl, 6);
    t[0x0E] = Opcode::new("ASL", Abs, Asl, 6);
    t[0x1E] = Opcode::new("ASL", Abx, Asl, 7);
    t[0x4A] = Opcode::new("LSR", Imp, Lsr, 2);
    t[0x46] = Opcode::new("LSR", Zpg, Lsr, 5);
    t[0x56] = Opcode::new("LSR", Zpx, Lsr, 6);
    t[0x4E] = Opcode::new("LSR", Abs, Lsr, 6);
    t[0x5E] = Opcode::new("LSR", Abx, Lsr, 7);
    t[0x2A] = Opcode::new("ROL", Imp, Rol, 2);
    t[0x26] = Opcode::new("ROL", Zpg, Rol, 5);
    t[0x36] = Opcode::new("ROL", Zpx, Rol, 6);
    t[0x2E] = Opcode::new("ROL", Abs, Rol, 6);
    t[0x3E] = Opcode::new("ROL", Abx, Rol, 7);
    t[0x6A] = Opcode::new("ROR", Imp, Ror, 2);
    t[0x66] = Opcode::new("ROR", Zpg, Ror, 5);
    t[0x76] = Opcode::new("ROR", Zpx, Ror, 6);
    t[0x6E] = Opcode::new("ROR", Abs, Ror, 6);
    t[0x7E] = Opcode::new("ROR", Abx, Ror, 7);

    // Jump/subroutine
    t[0x4C] = Opcode::new("JMP", Abs, Jmp, 3);
    t[0x6C] = Opcode::new("JMP", Ind, Jmp, 5);
    t[0x20] = Opcode::new("JSR", Abs, Jsr, 6);
    t[0x60] = Opcode::new("RTS", Imp, Rts, 6);

    // Branch
    t[0x90] = Opcode::new("BCC", Rel, Bcc, 2);
    t[0xB0] = Opcode::new("BCS", Rel, Bcs, 2);
    t[0xF0] = Opcode::new("BEQ", Rel, Beq, 2);
    t[0xD0] = Opcode::new("BNE", Rel, Bne, 2);
    t[0x30] = Opcode::new("BMI", Rel, Bmi, 2);
    t[0x10] = Opcode::new("BPL", Rel, Bpl, 2);
    t[0x50] = Opcode::new("BVC", Rel, Bvc, 2);
    t[0x70] = Opcode::new("BVS", Rel, Bvs, 2);

    // Flags
    t[0x18] = Opcode::new("CLC", Imp, Clc, 2);
    t[0xD8] = Opcode::new("CLD", Imp, Cld, 2);
    t[0x58] = Opcode::new("CLI", Imp, Cli, 2);
    t[0xB8] = Opcode::new("CLV", Imp, Clv, 2);
    t[0x38] = Opcode::new("SEC", Imp, Sec, 2);
    t[0xF8] = Opcode::new("SED", Imp, Sed, 2);
    t[0x78] = Opcode::new("SEI", Imp, Sei, 2);

    // System
    t[0x00] = Opcode::new("BRK", Imp, Brk, 7);
    t[0x40] = Opcode::new("RTI", Imp, Rti, 6);
    t[0xEA] = Opcode::new("NOP", Imp, Nop, 2);

    t
};
