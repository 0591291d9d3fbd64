//! Explicit timers
//!
//! The game has two clocks besides the frame loop: a 1 s countdown and a
//! one-shot delay per pickup. Both are plain data advanced by the caller so
//! they work the same under `requestAnimationFrame` and in tests.

use crate::consts::MAX_FRAME_DT;

/// Frame delta in ms as the clocks see it: clamped to `[0, MAX_FRAME_DT]`,
/// non-finite input counts as no time passing
pub fn frame_delta_ms(dt_secs: f32) -> f64 {
    if !dt_secs.is_finite() {
        return 0.0;
    }
    f64::from(dt_secs.clamp(0.0, MAX_FRAME_DT)) * 1000.0
}

/// Periodic task: reports how many whole periods elapsed
#[derive(Debug, Clone)]
pub struct Ticker {
    period_ms: f64,
    elapsed_ms: f64,
}

impl Ticker {
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms: period_ms.max(1.0),
            elapsed_ms: 0.0,
        }
    }

    /// Restart the period from zero
    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }

    /// Advance by `dt_ms`, returning the number of times the task fires
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        self.elapsed_ms += dt_ms.max(0.0);
        let mut fires = 0;
        while self.elapsed_ms >= self.period_ms {
            self.elapsed_ms -= self.period_ms;
            fires += 1;
        }
        fires
    }
}

#[derive(Debug, Clone)]
struct Pending<T> {
    due_ms: f64,
    payload: T,
}

/// One-shot delayed payloads ordered by due time.
///
/// There is no per-entry cancel: payloads carry whatever the consumer needs
/// to decide, when they come due, whether they still apply.
#[derive(Debug, Clone)]
pub struct DelayQueue<T> {
    pending: Vec<Pending<T>>,
}

impl<T> Default for DelayQueue<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<T> DelayQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Queue `payload` to come due `delay_ms` after `now_ms`
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, payload: T) {
        let due_ms = now_ms + delay_ms.max(0.0);
        // Keep sorted; equal due times stay in scheduling order
        let idx = self.pending.partition_point(|p| p.due_ms <= due_ms);
        self.pending.insert(idx, Pending { due_ms, payload });
    }

    /// Remove and return everything due at `now_ms`, oldest first
    pub fn pop_due(&mut self, now_ms: f64) -> Vec<T> {
        let split = self.pending.partition_point(|p| p.due_ms <= now_ms);
        self.pending.drain(..split).map(|p| p.payload).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_counts_periods() {
        let mut t = Ticker::new(1000.0);
        assert_eq!(t.advance(400.0), 0);
        assert_eq!(t.advance(700.0), 1);
        assert_eq!(t.advance(2500.0), 2);
        t.reset();
        assert_eq!(t.advance(999.0), 0);
    }

    #[test]
    fn test_delay_queue_order() {
        let mut q = DelayQueue::new();
        q.schedule(0.0, 500.0, "a");
        q.schedule(100.0, 100.0, "b");
        q.schedule(100.0, 400.0, "c");

        assert!(q.pop_due(199.0).is_empty());
        assert_eq!(q.pop_due(200.0), vec!["b"]);
        assert_eq!(q.len(), 2);
        assert_eq!(q.pop_due(600.0), vec!["a", "c"]);
        assert!(q.is_empty());
    }

    #[test]
    fn test_frame_delta_rejects_garbage() {
        assert_eq!(frame_delta_ms(f32::NAN), 0.0);
        assert_eq!(frame_delta_ms(f32::INFINITY), 0.0);
        assert_eq!(frame_delta_ms(-0.5), 0.0);
        assert!((frame_delta_ms(3.0) - 100.0).abs() < 1e-3);
        assert!((frame_delta_ms(0.016) - 16.0).abs() < 1e-3);
    }
}
