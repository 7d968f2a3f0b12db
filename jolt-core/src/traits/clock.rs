//! Monotonic time and blocking delay

/// Trait for the game's time base
///
/// The game loop is a single cooperative poll: it reads `now_ms` to
/// measure round time and calls `delay_ms` between polls and for
/// presentation pacing. Test clocks advance `now_ms` inside `delay_ms`.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed point; never goes backwards
    fn now_ms(&self) -> u64;

    /// Block for the given number of milliseconds
    fn delay_ms(&mut self, ms: u32);

    /// Milliseconds elapsed since `start_ms`
    fn elapsed_since(&self, start_ms: u64) -> u64 {
        self.now_ms().saturating_sub(start_ms)
    }
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}
