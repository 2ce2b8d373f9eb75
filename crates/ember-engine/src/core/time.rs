/// Fixed timestep accumulator.
/// Ensures game logic runs at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Discard any accumulated time. No further steps are produced until
    /// new frame time arrives, which makes stopping a tick source exact.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(0.1);
        let steps = ts.accumulate(0.1);
        assert_eq!(steps, 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(0.1);
        let steps = ts.accumulate(0.06); // over half a tick
        assert_eq!(steps, 0);
        let steps = ts.accumulate(0.06); // over one tick total
        assert_eq!(steps, 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut ts = FixedTimestep::new(0.1);
        let steps = ts.accumulate(6.0); // 60 ticks worth, but capped at 10
        assert_eq!(steps, 10);
    }

    #[test]
    fn reset_discards_pending_time() {
        let mut ts = FixedTimestep::new(0.1);
        ts.accumulate(0.09);
        ts.reset();
        let steps = ts.accumulate(0.02); // would be a full tick without reset
        assert_eq!(steps, 0);
    }
}
