//! Frame cadence
//!
//! The driver calls `tick` once per display refresh with a monotonic
//! timestamp; the simulation receives the elapsed milliseconds.

/// Converts frame timestamps into per-tick elapsed time
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed milliseconds since the previous call (0 on the first call).
    /// A timestamp that goes backwards yields 0 rather than a negative dt.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(1234.0), 0.0);
        assert_eq!(clock.tick(1250.0), 16.0);
        assert_eq!(clock.tick(1300.0), 50.0);
    }

    #[test]
    fn test_stall_produces_large_dt() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        assert_eq!(clock.tick(60_000.0), 60_000.0);
    }

    #[test]
    fn test_backwards_timestamp_is_zero() {
        let mut clock = FrameClock::new();
        clock.tick(500.0);
        assert_eq!(clock.tick(490.0), 0.0);
        assert_eq!(clock.tick(506.0), 16.0);
    }
}
