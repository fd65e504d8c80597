//! MOS 6502 CPU emulator.
//!
//! Implements the 151 documented opcodes of the NMOS 6502 with
//! instruction-level cycle accounting: the driver advances the CPU in
//! clock ticks, and each instruction's cost (base cycles plus the
//! documented page-cross and branch-taken penalties) is charged when
//! the opcode is fetched, then drained one tick at a time.
//!
//! The undocumented opcodes are not implemented; fetching one logs a
//! warning and stalls the CPU without touching architectural state.
//! ADC/SBC ignore the decimal flag, matching the NES 2A03 variant.

mod addressing;
mod cpu;
mod opcodes;
mod registers;
pub mod status;

pub use cpu::{Mos6502, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use opcodes::{Mode, Op, Opcode, OPCODES};
pub use registers::Registers;
pub use status::Status;
