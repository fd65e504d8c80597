//! CPU core trait.

use crate::Tickable;

/// A CPU core.
///
/// CPUs are tickable components that execute instructions from the bus
/// they were constructed over. Interrupt lines are driven between ticks
/// by the machine that owns the CPU.
pub trait Cpu: Tickable {
    /// Reset the CPU to its initial state.
    fn reset(&mut self);

    /// Signal a maskable interrupt.
    fn irq(&mut self);

    /// Signal a non-maskable interrupt.
    fn nmi(&mut self);

    /// Returns the current program counter.
    fn pc(&self) -> u16;
}
