/// Frame clock.
/// Turns host timestamps into the per-frame step `dt` consumed by every update.
///
/// The host samples its own wall clock (`performance.now()` in the browser,
/// `Instant` natively) and calls `advance` once per frame. The first call only
/// establishes the baseline and yields a zero step.
#[derive(Debug, Clone)]
pub struct Clock {
    /// Timestamp of the previous `advance`, in seconds.
    last: Option<f64>,
    /// Step computed by the most recent `advance`.
    dt: f32,
    /// Upper bound for a single step.
    max_dt: f32,
}

impl Clock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last: None,
            dt: 0.0,
            max_dt,
        }
    }

    /// Record a new timestamp (seconds) and return the clamped step since the previous one.
    pub fn advance(&mut self, now: f64) -> f32 {
        self.dt = match self.last {
            Some(last) => sanitize_dt((now - last) as f32, self.max_dt),
            None => 0.0,
        };
        self.last = Some(now);
        self.dt
    }

    /// Step computed by the most recent `advance`.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Forget the baseline, e.g. after the game was paused for a long time.
    pub fn reset(&mut self) {
        self.last = None;
        self.dt = 0.0;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(0.25)
    }
}

/// Clamp a frame step into `[0, max_dt]`. Non-finite steps become zero.
pub fn sanitize_dt(dt: f32, max_dt: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        0.0
    } else {
        dt.min(max_dt)
    }
}
