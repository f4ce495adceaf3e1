/// Per-frame data handed to every node and timer step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    /// Monotonic frame counter.
    pub tick: u64,
    /// Seconds elapsed since the previous frame.
    pub dt_seconds: f32,
    /// Host clock at the start of this frame, in seconds.
    pub time_seconds: f64,
}

impl TickContext {
    pub fn new(tick: u64, dt_seconds: f32, time_seconds: f64) -> Self {
        Self {
            tick,
            dt_seconds,
            time_seconds,
        }
    }

    /// Context for a fixed-step loop: frame `tick` of a clock advancing by `dt_seconds`.
    pub fn fixed_step(tick: u64, dt_seconds: f32) -> Self {
        Self::new(tick, dt_seconds, tick as f64 * f64::from(dt_seconds))
    }

    /// The context for the frame that follows this one, using the same step.
    pub fn next(&self) -> Self {
        Self::new(
            self.tick.wrapping_add(1),
            self.dt_seconds,
            self.time_seconds + f64::from(self.dt_seconds),
        )
    }
}
