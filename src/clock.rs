//! Gravity timing. The driver feeds elapsed time in, the clock says when a drop is due.

pub const DEFAULT_DROP_INTERVAL_MS: f64 = 1000.0;


#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DropClock
{
    drop_interval_ms: f64,
    now_ms: f64,          // Monotonic, starts at zero with the session.
    last_drop_ms: f64
}


impl DropClock
{
    pub fn new(drop_interval_ms: f64) -> Self
    {
        DropClock { drop_interval_ms, now_ms: 0.0, last_drop_ms: 0.0 }
    }

    pub fn now_ms(&self) -> f64
    {
        self.now_ms
    }

    /// Moves time forward by `dt_ms`. See `at`.
    pub fn advance(&mut self, dt_ms: f64) -> bool
    {
        let now = self.now_ms + dt_ms.max(0.0);
        self.at(now)
    }

    /// Sets the current time. Returns true once strictly more than the drop interval has passed
    /// since the last drop, and restarts the interval from `timestamp_ms`.
    pub fn at(&mut self, timestamp_ms: f64) -> bool
    {
        self.now_ms = timestamp_ms.max(self.now_ms);

        if self.now_ms - self.last_drop_ms > self.drop_interval_ms {
            self.last_drop_ms = self.now_ms;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self)
    {
        self.now_ms = 0.0;
        self.last_drop_ms = 0.0;
    }
}


impl Default for DropClock
{
    fn default() -> Self
    {
        DropClock::new(DEFAULT_DROP_INTERVAL_MS)
    }
}
