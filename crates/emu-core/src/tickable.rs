//! Trait for components advanced by clock ticks.

use crate::Ticks;

/// A component that can be advanced by clock ticks.
///
/// Drivers advance a component one tick at a time or in bulk with
/// [`run`]. A component is never advanced behind the driver's back.
///
/// [`run`]: Tickable::run
pub trait Tickable {
    /// Advance the component by one clock tick.
    fn tick(&mut self);

    /// Advance the component by `count` ticks.
    ///
    /// Default implementation calls `tick()` in a loop. Components may
    /// override for efficiency, but must produce identical results.
    fn run(&mut self, count: Ticks) {
        for _ in 0..count.get() {
            self.tick();
        }
    }
}
