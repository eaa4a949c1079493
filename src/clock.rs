use std::time::Instant;

/// Minimal frame clock - tracks delta time between ticks.
/// Entities manage their own internal state.
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
}

impl FrameClock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Get delta time since last tick in seconds and advance the clock.
    /// Never negative: a non-monotonic reading clamps to zero here, at
    /// the boundary, so the rest of the loop can rely on `delta >= 0`.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now
            .saturating_duration_since(self.last_tick)
            .as_secs_f32()
            .max(0.0);
        self.last_tick = now;
        delta
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let mut clock = FrameClock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        // Should be roughly 10ms = 0.01s
        assert!(delta >= 0.009 && delta <= 0.050);
    }

    #[test]
    fn delta_is_never_negative() {
        let mut clock = FrameClock::new();

        for _ in 0..100 {
            assert!(clock.tick() >= 0.0);
        }
    }

    #[test]
    fn clock_resets() {
        let mut clock = FrameClock::new();

        thread::sleep(Duration::from_millis(10));
        clock.reset();

        let delta = clock.tick();
        // Should be very small since we just reset
        assert!(delta < 0.005);
    }
}
