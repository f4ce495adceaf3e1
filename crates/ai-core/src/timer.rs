//! Deferred-event queue driven by the host frame clock.
//!
//! Timed behavior is modeled as plain events scheduled for a due time instead of
//! suspended control flow. The owner advances the queue once per frame and
//! drains everything that became due, then runs its decision logic against the
//! settled state:
//!
//! ```
//! use ai_core::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! timers.schedule_after(0.5, "ready");
//!
//! timers.advance(0.25);
//! assert_eq!(timers.pop_due(), None);
//!
//! timers.advance(0.25);
//! assert_eq!(timers.pop_due(), Some("ready"));
//! ```

/// Handle returned by [`TimerQueue::schedule_after`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

#[derive(Debug, Clone)]
struct Scheduled<E> {
    id: TimerId,
    due: f64,
    event: E,
}

/// Deterministic one-shot timers.
///
/// Ordering contract:
/// - events fire in `(due time, scheduling order)` order;
/// - while an event is being handled, [`now`](Self::now) equals its due time, so
///   follow-up events scheduled from the handler are placed relative to it and
///   still fire within the same [`advance`](Self::advance) window when due;
/// - once nothing is due, `now` catches up with the advanced horizon.
#[derive(Debug, Clone)]
pub struct TimerQueue<E> {
    now: f64,
    horizon: f64,
    next_id: u64,
    pending: Vec<Scheduled<E>>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self {
            now: 0.0,
            horizon: 0.0,
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time in seconds.
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedule `event` to fire `delay_seconds` after [`now`](Self::now).
    ///
    /// Negative or non-finite delays fire on the next drain.
    pub fn schedule_after(&mut self, delay_seconds: f32, event: E) -> TimerId {
        let delay = if delay_seconds.is_finite() {
            f64::from(delay_seconds.max(0.0))
        } else {
            0.0
        };

        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.push(Scheduled {
            id,
            due: self.now + delay,
            event,
        });
        id
    }

    /// Move the horizon forward by one frame.
    ///
    /// When nothing is due by the new horizon, `now` jumps straight to it.
    pub fn advance(&mut self, dt_seconds: f32) {
        if dt_seconds.is_finite() && dt_seconds > 0.0 {
            self.horizon += f64::from(dt_seconds);
        }
        if !self.pending.iter().any(|s| s.due <= self.horizon) {
            self.now = self.horizon;
        }
    }

    /// Remove and return the earliest event due at or before the horizon.
    pub fn pop_due(&mut self) -> Option<E> {
        let next = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due <= self.horizon)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.id.cmp(&b.id)))
            .map(|(i, _)| i);

        let Some(index) = next else {
            self.now = self.horizon;
            return None;
        };

        let scheduled = self.pending.swap_remove(index);
        self.now = scheduled.due.max(self.now);
        Some(scheduled.event)
    }

    /// Seconds until the earliest pending event, measured from [`now`](Self::now).
    pub fn time_until_next(&self) -> Option<f64> {
        self.pending
            .iter()
            .map(|s| (s.due - self.now).max(0.0))
            .min_by(f64::total_cmp)
    }
}
